//! Per-property locator configuration

use serde::{Deserialize, Serialize};
use uigrip_core_types::{LocatorDescriptor, UnsupportedLocatorKind};

/// Resolved configuration for one page-object property.
///
/// Built by page-object setup code at construction time and immutable
/// thereafter. The upstream annotation/introspection step is not this
/// layer's concern; it just has to hand over one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Structured locator for declarative lookup, if one was declared.
    pub descriptor: Option<LocatorDescriptor>,

    /// Cache the first successful resolution for the resolver's lifetime.
    pub should_cache: bool,

    /// Resolve through a single native predicate query instead of the
    /// declarative/vision chain.
    pub force_predicate: bool,

    /// Label hint for vision recognition.
    pub vision_label: Option<String>,

    /// Caption hint for vision recognition.
    pub vision_caption: Option<String>,
}

impl LocatorConfig {
    /// Config with a declarative descriptor and default policy.
    pub fn new(descriptor: LocatorDescriptor) -> Self {
        Self {
            descriptor: Some(descriptor),
            should_cache: false,
            force_predicate: false,
            vision_label: None,
            vision_caption: None,
        }
    }

    /// Config from a locator that is only available in rendered form, e.g.
    /// produced by an upstream API that does not expose the structured
    /// representation. Fails on unrecognized prefixes; there is no default
    /// strategy.
    pub fn from_rendered(rendered: &str) -> Result<Self, UnsupportedLocatorKind> {
        Ok(Self::new(LocatorDescriptor::parse_rendered(rendered)?))
    }

    /// Config without a structured locator (vision-only properties).
    pub fn without_descriptor() -> Self {
        Self {
            descriptor: None,
            should_cache: false,
            force_predicate: false,
            vision_label: None,
            vision_caption: None,
        }
    }

    /// Enable result caching for this property.
    pub fn with_cache(mut self) -> Self {
        self.should_cache = true;
        self
    }

    /// Force native predicate resolution for this property.
    pub fn with_predicate(mut self) -> Self {
        self.force_predicate = true;
        self
    }

    /// Attach vision-recognition hints. Vision-resolved elements are always
    /// cached, so this also turns caching on.
    pub fn with_vision(
        mut self,
        label: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        self.vision_label = Some(label.into());
        self.vision_caption = Some(caption.into());
        self.should_cache = true;
        self
    }
}
