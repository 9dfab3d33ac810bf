//! Diagnostic overlay injection
//!
//! Draws a transient full-viewport canvas over the session's rendered page:
//! the recognized bounding box, its centroid, diagonal guides, and a text
//! line with label, caption, and confidence. The target element gets a green
//! border. The canvas removes itself after the display duration, and the
//! caller is held for that same duration so the operator actually sees the
//! annotation before the test moves on.

use std::time::Duration;

use serde_json::{json, Value};
use session_bridge::Session;
use tracing::{debug, warn};
use uigrip_core_types::ElementHandle;

use crate::models::RecognitionResult;

/// Default display duration, in milliseconds.
const DEFAULT_DISPLAY_MS: u64 = 2500;

/// Overlay behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct OverlayOptions {
    /// How long the annotation stays on screen, and how long `annotate`
    /// waits before returning. Zero draws without holding the caller.
    pub display_for: Duration,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            display_for: Duration::from_millis(DEFAULT_DISPLAY_MS),
        }
    }
}

/// Renders the diagnostic overlay through the session's scripting capability.
#[derive(Debug, Clone, Default)]
pub struct OverlayRenderer {
    options: OverlayOptions,
}

impl OverlayRenderer {
    pub fn new(options: OverlayOptions) -> Self {
        Self { options }
    }

    /// Inject the annotation canvas and hold for the display duration.
    ///
    /// Side-effect only. Failures are logged and swallowed; the overlay is a
    /// diagnostic and must never break resolution.
    pub async fn annotate(
        &self,
        session: &dyn Session,
        recognition: &RecognitionResult,
        target: &ElementHandle,
    ) {
        let script = build_overlay_script(recognition, self.options.display_for.as_millis());
        let args: Vec<Value> = vec![json!(target.id())];
        match session.execute_script(&script, args).await {
            Ok(_) => {
                debug!(%target, "overlay annotation injected");
                tokio::time::sleep(self.options.display_for).await;
            }
            Err(err) => warn!("overlay annotation failed: {err}"),
        }
    }
}

/// Build the canvas-drawing script for one recognition.
fn build_overlay_script(recognition: &RecognitionResult, display_ms: u128) -> String {
    format!(
        concat!(
            "var x = {tl_x}; var y = {tl_y};",
            "var x2 = {br_x}; var y2 = {br_y};",
            "var width = {width}; var height = {height};",
            "var canvas = document.createElement('canvas');",
            "canvas.style.width='100%'; canvas.style.height='100%';",
            "canvas.width = window.innerWidth; canvas.height = window.innerHeight;",
            "canvas.style.position='absolute'; canvas.style.left=0; canvas.style.top=0;",
            "canvas.style.zIndex=100000; canvas.style.pointerEvents='none';",
            "document.body.appendChild(canvas);",
            "var context = canvas.getContext('2d');",
            "context.fillStyle = 'red'; context.strokeStyle = 'red';",
            "context.strokeRect(x, y, width, height);",
            "context.beginPath();",
            "context.arc((x + x2) / 2, (y + y2) / 2, 5, 0, Math.PI * 2, true);",
            "context.moveTo(x, y); context.lineTo(x2, y2);",
            "context.moveTo(x, y2); context.lineTo(x2, y);",
            "context.stroke();",
            "context.font = '20px Courier red';",
            "context.fillText('{label}: {caption} {confidence:.0}%', x, y - 10);",
            "arguments[0].style.border='3px solid green';",
            "setTimeout(function () {{ canvas.remove(); }}, {display_ms});"
        ),
        tl_x = recognition.top_left.x,
        tl_y = recognition.top_left.y,
        br_x = recognition.bottom_right.x,
        br_y = recognition.bottom_right.y,
        width = recognition.width(),
        height = recognition.height(),
        label = recognition.label.to_uppercase(),
        caption = recognition.caption,
        confidence = recognition.confidence * 100.0,
        display_ms = display_ms,
    )
}
