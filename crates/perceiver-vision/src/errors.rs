//! Error types for vision fallback

use session_bridge::SessionError;
use thiserror::Error;

/// Failures surfaced by the vision fallback path.
#[derive(Debug, Error, Clone)]
pub enum VisionError {
    /// The backend returned no match, or the hit-test found nothing under
    /// the recognized point. Degrades to element-not-found upstream.
    #[error("no visual match for label={label:?} caption={caption:?}")]
    NoMatch {
        label: Option<String>,
        caption: Option<String>,
    },

    /// Vision backend transport failure. Propagated unchanged.
    #[error("vision backend error: {0}")]
    Backend(String),

    /// Session failure during scroll reset or hit-test. Propagated unchanged.
    #[error(transparent)]
    Session(#[from] SessionError),
}
