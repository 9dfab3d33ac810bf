//! The abstract session collaborator

use async_trait::async_trait;
use serde_json::Value;
use uigrip_core_types::{ElementHandle, LocatorDescriptor, Point, PredicateDialect, SessionKind};

use crate::errors::SessionError;

/// Live connection to a browser/mobile automation target.
///
/// One session is owned by one thread of control at a time (standard
/// automation-driver constraint, not enforced here). Every call is a
/// synchronous round-trip to the driver; timeout and retry policy, if any,
/// live behind the implementation.
#[async_trait]
pub trait Session: Send + Sync {
    /// Platform tag used to classify native predicate support.
    fn kind(&self) -> SessionKind;

    /// Declarative lookup of a single element. `NotFound` when the query
    /// matches nothing.
    async fn find_one(&self, locator: &LocatorDescriptor) -> Result<ElementHandle, SessionError>;

    /// Declarative lookup of all matching elements, in document order.
    /// An empty result is not an error.
    async fn find_many(
        &self,
        locator: &LocatorDescriptor,
    ) -> Result<Vec<ElementHandle>, SessionError>;

    /// Single-element query in the session's native predicate dialect.
    async fn find_one_native(
        &self,
        dialect: PredicateDialect,
        query: &str,
    ) -> Result<ElementHandle, SessionError>;

    /// Multi-element query in the session's native predicate dialect.
    async fn find_many_native(
        &self,
        dialect: PredicateDialect,
        query: &str,
    ) -> Result<Vec<ElementHandle>, SessionError>;

    /// Evaluate a script inside the rendered page. Element-handle arguments
    /// are materialized to DOM nodes by the implementation.
    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, SessionError>;

    /// Element under the given viewport point, if any.
    async fn hit_test_at_point(&self, point: Point) -> Result<Option<ElementHandle>, SessionError>;

    /// Reset the scroll position to the viewport origin.
    async fn reset_scroll(&self) -> Result<(), SessionError>;
}
