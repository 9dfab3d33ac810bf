//! Tiered resolution orchestration
//!
//! Strategy selection, shared by single- and multi-element resolution:
//! - Forced predicate: classify the session, translate the descriptor, issue
//!   exactly one native query. No declarative or vision attempt, ever.
//! - Otherwise: declarative lookup first; a not-found outcome is captured and
//!   vision fallback is tried when a vision resolver was injected. The
//!   captured error is preserved in the final failure for diagnostics.
//!
//! Each strategy runs exactly once per call; there is no retry loop here.

use std::sync::Arc;

use perceiver_vision::{VisionError, VisionFallbackResolver};
use session_bridge::{classify, Session, SessionError};
use tracing::{debug, warn};
use uigrip_core_types::ElementHandle;

use crate::{cache::ResolvedElementCache, config::LocatorConfig, errors::LocatorError};

/// Lazily resolves the element(s) behind one page-object property.
///
/// Not designed for concurrent invocation on the same instance: concurrent
/// callers race on the first-write-wins cache slot and must serialize.
pub struct ElementResolver {
    config: LocatorConfig,
    vision: Option<Arc<VisionFallbackResolver>>,
    cache: ResolvedElementCache,
}

impl ElementResolver {
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            config,
            vision: None,
            cache: ResolvedElementCache::new(),
        }
    }

    /// Enable vision fallback. Vision enablement is an explicit construction
    /// choice, not process-wide state.
    pub fn with_vision(mut self, vision: Arc<VisionFallbackResolver>) -> Self {
        self.vision = Some(vision);
        self
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Resolve a single element handle.
    pub async fn resolve_one(&self, session: &dyn Session) -> Result<ElementHandle, LocatorError> {
        if self.config.should_cache {
            if let Some(handle) = self.cache.cached_single() {
                debug!(%handle, "returning cached element");
                return Ok(handle);
            }
        }

        let handle = if self.config.force_predicate {
            self.find_one_native(session).await?
        } else {
            self.find_one_with_fallback(session).await?
        };

        if self.config.should_cache {
            self.cache.store_single(&handle);
        }
        Ok(handle)
    }

    /// Resolve all matching element handles. An empty sequence is a valid
    /// result, not an error. Vision fallback is single-target by design and
    /// does not apply here.
    pub async fn resolve_many(
        &self,
        session: &dyn Session,
    ) -> Result<Vec<ElementHandle>, LocatorError> {
        if self.config.should_cache {
            if let Some(handles) = self.cache.cached_list() {
                debug!(count = handles.len(), "returning cached element list");
                return Ok(handles);
            }
        }

        let handles = if self.config.force_predicate {
            let (dialect, query) = self.predicate_query(session)?;
            debug!(%dialect, %query, "issuing native predicate list query");
            session.find_many_native(dialect, &query).await?
        } else {
            let descriptor = self.config.descriptor.as_ref().ok_or_else(|| {
                LocatorError::InvalidConfig("list resolution requires a descriptor".to_string())
            })?;
            debug!(locator = %descriptor, "declarative list lookup");
            session.find_many(descriptor).await?
        };

        if self.config.should_cache {
            self.cache.store_list(&handles);
        }
        Ok(handles)
    }

    async fn find_one_native(&self, session: &dyn Session) -> Result<ElementHandle, LocatorError> {
        let (dialect, query) = self.predicate_query(session)?;
        debug!(%dialect, %query, "issuing native predicate query");
        Ok(session.find_one_native(dialect, &query).await?)
    }

    /// Declarative lookup, then vision. The declarative not-found error is
    /// captured, not raised, so it can surface in the final failure.
    async fn find_one_with_fallback(
        &self,
        session: &dyn Session,
    ) -> Result<ElementHandle, LocatorError> {
        let mut declarative_miss: Option<SessionError> = None;

        if let Some(descriptor) = &self.config.descriptor {
            debug!(locator = %descriptor, "declarative lookup");
            match session.find_one(descriptor).await {
                Ok(handle) => return Ok(handle),
                Err(err) if err.is_not_found() => {
                    warn!(locator = %descriptor, "declarative lookup missed: {err}");
                    declarative_miss = Some(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(vision) = &self.vision {
            debug!("engaging vision fallback");
            match vision
                .recognize(
                    self.config.vision_label.as_deref(),
                    self.config.vision_caption.as_deref(),
                    session,
                )
                .await
            {
                Ok(handle) => return Ok(handle),
                Err(VisionError::NoMatch { .. }) => {
                    debug!("vision fallback produced no match");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(match declarative_miss {
            Some(err) => {
                LocatorError::not_found_after("declarative lookup and fallbacks exhausted", err)
            }
            None => LocatorError::not_found("no resolution strategy produced an element"),
        })
    }

    fn predicate_query(
        &self,
        session: &dyn Session,
    ) -> Result<(uigrip_core_types::PredicateDialect, String), LocatorError> {
        let dialect = classify(session).ok_or(LocatorError::UnsupportedSession {
            kind: session.kind(),
        })?;
        let descriptor = self.config.descriptor.as_ref().ok_or_else(|| {
            LocatorError::InvalidConfig("forced predicate mode requires a descriptor".to_string())
        })?;
        Ok((dialect, descriptor.native_selector().to_string()))
    }
}
