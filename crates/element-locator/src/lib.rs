//! Element Locator - adaptive, lazily evaluated element resolution
//!
//! One [`ElementResolver`] backs one page-object property. On access it
//! resolves a live element handle (or list of handles) from the bound
//! session, choosing among:
//! - Declarative lookup via a structured locator (primary)
//! - Platform-native predicate query (forced per property)
//! - Vision-based recognition (fallback when declarative lookup misses)
//!
//! Results are cached per property according to the configured policy:
//! first write wins, never re-validated within the resolver's lifetime.

pub mod cache;
pub mod config;
pub mod errors;
pub mod resolver;

pub use cache::ResolvedElementCache;
pub use config::LocatorConfig;
pub use errors::LocatorError;
pub use resolver::ElementResolver;
