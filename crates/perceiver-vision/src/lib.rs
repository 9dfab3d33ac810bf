//! Vision Perceiver - visual-recognition fallback for element resolution
//!
//! When a declarative lookup misses, this crate resolves an element by asking
//! a vision backend to recognize it on the session's rendered surface:
//! - Recognition query by label/caption against the current viewport
//! - Bounding-box centroid converted to a point hit-test on the live tree
//! - Transient diagnostic overlay drawn over the match (best effort)

pub mod backend;
pub mod errors;
pub mod models;
pub mod overlay;
pub mod resolver;

pub use backend::VisionBackend;
pub use errors::VisionError;
pub use models::RecognitionResult;
pub use overlay::{OverlayOptions, OverlayRenderer};
pub use resolver::VisionFallbackResolver;
