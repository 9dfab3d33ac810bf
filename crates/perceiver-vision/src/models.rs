//! Data models for vision recognition

use serde::{Deserialize, Serialize};
use uigrip_core_types::Point;

/// One positive recognition produced by the vision backend.
///
/// Coordinates are viewport coordinates captured against an unscrolled page;
/// callers must reset scroll before hit-testing against them. Transient, one
/// per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Top-left corner of the matched bounding box.
    pub top_left: Point,

    /// Bottom-right corner of the matched bounding box.
    pub bottom_right: Point,

    /// Label the backend matched against.
    pub label: String,

    /// Caption the backend matched against.
    pub caption: String,

    /// Match confidence in `[0, 1]`.
    pub confidence: f64,
}

impl RecognitionResult {
    /// Center of the bounding box, the point used for hit-testing.
    pub fn centroid(&self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }
}
