//! Shared primitives for the uigrip element-resolution layer

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod descriptor;

pub use descriptor::{LocatorDescriptor, StrategyKind, UnsupportedLocatorKind};

/// Opaque reference to one UI element within a live automation session.
///
/// The inner id is assigned by the driver; this layer never interprets it.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element:{}", self.0)
    }
}

/// A point in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Platform tag supplied by the session collaborator.
///
/// Replaces runtime driver-type inspection: the session reports what it is
/// and the classifier maps that to a predicate dialect.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Ios,
    Android,
    Other,
}

impl SessionKind {
    pub fn name(&self) -> &'static str {
        match self {
            SessionKind::Ios => "ios",
            SessionKind::Android => "android",
            SessionKind::Other => "other",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Native predicate dialect a session may support.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PredicateDialect {
    /// iOS NSPredicate selector strings.
    IosPredicate,

    /// Android UI-Automator query strings.
    AndroidAutomator,
}

impl PredicateDialect {
    pub fn name(&self) -> &'static str {
        match self {
            PredicateDialect::IosPredicate => "ios-predicate",
            PredicateDialect::AndroidAutomator => "android-automator",
        }
    }
}

impl fmt::Display for PredicateDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
