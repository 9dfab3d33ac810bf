//! The abstract vision-recognition collaborator

use async_trait::async_trait;
use session_bridge::Session;

use crate::{errors::VisionError, models::RecognitionResult};

/// Black-box recognition service.
///
/// Implementations capture the session's current visual surface and look for
/// an element matching the given label/caption. `Ok(None)` means the query
/// ran and found nothing; errors are transport failures.
#[async_trait]
pub trait VisionBackend: Send + Sync {
    async fn recognize(
        &self,
        label: Option<&str>,
        caption: Option<&str>,
        session: &dyn Session,
    ) -> Result<Option<RecognitionResult>, VisionError>;
}
