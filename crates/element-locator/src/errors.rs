//! Error types for element resolution

use perceiver_vision::VisionError;
use session_bridge::SessionError;
use thiserror::Error;
use uigrip_core_types::{SessionKind, UnsupportedLocatorKind};

/// Failures surfaced by the resolver.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// No strategy produced a result. Recoverable by the caller; carries the
    /// original declarative-lookup failure when one was captured.
    #[error("element not found: {reason}")]
    ElementNotFound {
        reason: String,
        #[source]
        source: Option<SessionError>,
    },

    /// Rendered locator matched no recognized prefix. Configuration error.
    #[error(transparent)]
    UnsupportedLocatorKind(#[from] UnsupportedLocatorKind),

    /// Forced predicate mode on a session without native predicate support.
    /// Configuration error; there is no silent fallback.
    #[error("session kind '{kind}' does not support native predicate queries")]
    UnsupportedSession { kind: SessionKind },

    /// Locator config cannot drive the requested resolution.
    #[error("invalid locator config: {0}")]
    InvalidConfig(String),

    /// Session transport/script failure, propagated unchanged.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Vision backend failure, propagated unchanged.
    #[error(transparent)]
    Vision(#[from] VisionError),
}

impl LocatorError {
    pub(crate) fn not_found(reason: impl Into<String>) -> Self {
        Self::ElementNotFound {
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn not_found_after(reason: impl Into<String>, source: SessionError) -> Self {
        Self::ElementNotFound {
            reason: reason.into(),
            source: Some(source),
        }
    }
}
