//! Native predicate capability classification

use tracing::debug;
use uigrip_core_types::{PredicateDialect, SessionKind};

use crate::session::Session;

/// Determine which native predicate dialect the session supports.
///
/// `None` for unrecognized session kinds; never errors.
pub fn classify(session: &dyn Session) -> Option<PredicateDialect> {
    let dialect = match session.kind() {
        SessionKind::Ios => Some(PredicateDialect::IosPredicate),
        SessionKind::Android => Some(PredicateDialect::AndroidAutomator),
        SessionKind::Other => None,
    };
    debug!(
        kind = session.kind().name(),
        dialect = dialect.map(|d| d.name()),
        "classified session"
    );
    dialect
}
