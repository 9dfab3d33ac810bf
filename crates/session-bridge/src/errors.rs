//! Error types for session operations

use thiserror::Error;

/// Failures surfaced by a session implementation.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The query ran but matched no element.
    #[error("no element matched '{selector}'")]
    NotFound { selector: String },

    /// Script evaluation inside the session failed.
    #[error("script evaluation failed: {0}")]
    Script(String),

    /// Driver/transport failure. Propagated to the resolver's caller
    /// unchanged; never swallowed by the fallback chain.
    #[error("driver transport error: {0}")]
    Transport(String),
}

impl SessionError {
    /// Only not-found outcomes are eligible for fallback strategies.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::NotFound { .. })
    }
}
