//! Session bridge - abstract surface of a live automation session
//!
//! The resolver layer never talks to a concrete driver; it goes through the
//! [`Session`] trait defined here. A session implementation adapts one
//! browser/mobile driver connection and tags itself with a
//! [`uigrip_core_types::SessionKind`] so the classifier can pick a native
//! predicate dialect without runtime type inspection.

pub mod classifier;
pub mod errors;
pub mod session;

pub use classifier::classify;
pub use errors::SessionError;
pub use session::Session;
