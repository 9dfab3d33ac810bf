//! Vision fallback resolution

use std::sync::Arc;

use session_bridge::Session;
use tracing::{debug, info};

use crate::{
    backend::VisionBackend,
    errors::VisionError,
    overlay::{OverlayOptions, OverlayRenderer},
};
use uigrip_core_types::ElementHandle;

/// Resolves an element by visual recognition instead of structural query.
///
/// Recognition coordinates are captured against an unscrolled viewport, so
/// the session scroll is reset to the origin before the centroid hit-test.
pub struct VisionFallbackResolver {
    backend: Arc<dyn VisionBackend>,
    overlay: OverlayRenderer,
}

impl VisionFallbackResolver {
    pub fn new(backend: Arc<dyn VisionBackend>) -> Self {
        Self {
            backend,
            overlay: OverlayRenderer::default(),
        }
    }

    /// Override the diagnostic overlay behavior.
    pub fn with_overlay_options(mut self, options: OverlayOptions) -> Self {
        self.overlay = OverlayRenderer::new(options);
        self
    }

    /// Recognize the element described by label/caption and resolve the live
    /// handle underneath its bounding-box centroid.
    pub async fn recognize(
        &self,
        label: Option<&str>,
        caption: Option<&str>,
        session: &dyn Session,
    ) -> Result<ElementHandle, VisionError> {
        debug!(label, caption, "issuing vision recognition query");

        let recognition = self
            .backend
            .recognize(label, caption, session)
            .await?
            .ok_or_else(|| no_match(label, caption))?;

        let point = recognition.centroid();
        info!(
            label = %recognition.label,
            caption = %recognition.caption,
            confidence = recognition.confidence,
            x = point.x,
            y = point.y,
            "vision backend matched, hit-testing centroid"
        );

        session.reset_scroll().await?;
        let target = session
            .hit_test_at_point(point)
            .await?
            .ok_or_else(|| no_match(label, caption))?;

        self.overlay.annotate(session, &recognition, &target).await;
        Ok(target)
    }
}

fn no_match(label: Option<&str>, caption: Option<&str>) -> VisionError {
    VisionError::NoMatch {
        label: label.map(str::to_string),
        caption: caption.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::Value;
    use session_bridge::SessionError;
    use uigrip_core_types::{LocatorDescriptor, Point, PredicateDialect, SessionKind};

    use super::*;
    use crate::models::RecognitionResult;

    struct StubBackend {
        result: Option<RecognitionResult>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl VisionBackend for StubBackend {
        async fn recognize(
            &self,
            _label: Option<&str>,
            _caption: Option<&str>,
            _session: &dyn Session,
        ) -> Result<Option<RecognitionResult>, VisionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.result.clone())
        }
    }

    #[derive(Default)]
    struct StubSession {
        hit: Option<ElementHandle>,
        script_fails: bool,
        scroll_resets: AtomicUsize,
        hit_tests: AtomicUsize,
        scripts: AtomicUsize,
    }

    #[async_trait]
    impl Session for StubSession {
        fn kind(&self) -> SessionKind {
            SessionKind::Other
        }

        async fn find_one(
            &self,
            locator: &LocatorDescriptor,
        ) -> Result<ElementHandle, SessionError> {
            Err(SessionError::NotFound {
                selector: locator.render(),
            })
        }

        async fn find_many(
            &self,
            _locator: &LocatorDescriptor,
        ) -> Result<Vec<ElementHandle>, SessionError> {
            Ok(Vec::new())
        }

        async fn find_one_native(
            &self,
            _dialect: PredicateDialect,
            query: &str,
        ) -> Result<ElementHandle, SessionError> {
            Err(SessionError::NotFound {
                selector: query.to_string(),
            })
        }

        async fn find_many_native(
            &self,
            _dialect: PredicateDialect,
            _query: &str,
        ) -> Result<Vec<ElementHandle>, SessionError> {
            Ok(Vec::new())
        }

        async fn execute_script(
            &self,
            _script: &str,
            _args: Vec<Value>,
        ) -> Result<Value, SessionError> {
            self.scripts.fetch_add(1, Ordering::SeqCst);
            if self.script_fails {
                Err(SessionError::Script("canvas injection rejected".to_string()))
            } else {
                Ok(Value::Null)
            }
        }

        async fn hit_test_at_point(
            &self,
            _point: Point,
        ) -> Result<Option<ElementHandle>, SessionError> {
            self.hit_tests.fetch_add(1, Ordering::SeqCst);
            Ok(self.hit.clone())
        }

        async fn reset_scroll(&self) -> Result<(), SessionError> {
            self.scroll_resets.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn recognition() -> RecognitionResult {
        RecognitionResult {
            top_left: Point::new(0.0, 0.0),
            bottom_right: Point::new(100.0, 50.0),
            label: "button".to_string(),
            caption: "Login".to_string(),
            confidence: 0.9,
        }
    }

    fn resolver(result: Option<RecognitionResult>) -> VisionFallbackResolver {
        VisionFallbackResolver::new(Arc::new(StubBackend {
            result,
            calls: AtomicUsize::new(0),
        }))
        .with_overlay_options(OverlayOptions {
            display_for: Duration::ZERO,
        })
    }

    #[tokio::test]
    async fn resolves_handle_under_centroid() {
        let session = StubSession {
            hit: Some(ElementHandle::new("node-7")),
            ..Default::default()
        };
        let handle = resolver(Some(recognition()))
            .recognize(Some("button"), Some("Login"), &session)
            .await
            .unwrap();

        assert_eq!(handle, ElementHandle::new("node-7"));
        assert_eq!(session.scroll_resets.load(Ordering::SeqCst), 1);
        assert_eq!(session.hit_tests.load(Ordering::SeqCst), 1);
        // Overlay was drawn.
        assert_eq!(session.scripts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn backend_miss_is_no_match() {
        let session = StubSession::default();
        let err = resolver(None)
            .recognize(Some("button"), None, &session)
            .await
            .unwrap_err();

        assert!(matches!(err, VisionError::NoMatch { .. }));
        assert_eq!(session.scroll_resets.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_hit_test_is_no_match() {
        let session = StubSession::default();
        let err = resolver(Some(recognition()))
            .recognize(None, Some("Login"), &session)
            .await
            .unwrap_err();

        assert!(matches!(err, VisionError::NoMatch { .. }));
        assert_eq!(session.hit_tests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn overlay_failure_is_swallowed() {
        let session = StubSession {
            hit: Some(ElementHandle::new("node-7")),
            script_fails: true,
            ..Default::default()
        };
        let handle = resolver(Some(recognition()))
            .recognize(Some("button"), Some("Login"), &session)
            .await
            .unwrap();

        assert_eq!(handle, ElementHandle::new("node-7"));
    }
}
