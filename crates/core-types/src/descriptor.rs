//! Structured locator representation and native-selector translation
//!
//! A `LocatorDescriptor` is a strategy kind plus the raw selector string. It
//! renders to a canonical `kind=selector` form and parses back from that form
//! or from the verbose `By.kind: selector` form emitted by upstream APIs that
//! only expose a rendered locator. Translation to a platform-native predicate
//! query is prefix stripping: the remainder of a recognized rendering is the
//! raw selector, usable as an iOS predicate string or Android UI-Automator
//! query as-is.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendered locator matched no recognized prefix. Configuration error, fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unable to derive a native selector from locator '{rendered}'")]
pub struct UnsupportedLocatorKind {
    pub rendered: String,
}

/// Locator strategy kinds understood by the declarative lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Id,
    Name,
    Xpath,
    LinkText,
    PartialLinkText,
    CssSelector,
    TagName,
    ClassName,
}

impl StrategyKind {
    /// All kinds, in prefix-matching order.
    pub const ALL: [StrategyKind; 8] = [
        StrategyKind::Id,
        StrategyKind::Name,
        StrategyKind::Xpath,
        StrategyKind::LinkText,
        StrategyKind::PartialLinkText,
        StrategyKind::CssSelector,
        StrategyKind::TagName,
        StrategyKind::ClassName,
    ];

    /// Canonical kind name used in the short rendering (`name=selector`).
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Id => "id",
            StrategyKind::Name => "name",
            StrategyKind::Xpath => "xpath",
            StrategyKind::LinkText => "linkText",
            StrategyKind::PartialLinkText => "partialLinkText",
            StrategyKind::CssSelector => "cssSelector",
            StrategyKind::TagName => "tagName",
            StrategyKind::ClassName => "className",
        }
    }

    /// Accepted spellings for this kind. `css` is a historical alias for the
    /// css-selector kind and stays accepted on parse.
    fn spellings(&self) -> &'static [&'static str] {
        match self {
            StrategyKind::Id => &["id"],
            StrategyKind::Name => &["name"],
            StrategyKind::Xpath => &["xpath"],
            StrategyKind::LinkText => &["linkText"],
            StrategyKind::PartialLinkText => &["partialLinkText"],
            StrategyKind::CssSelector => &["cssSelector", "css"],
            StrategyKind::TagName => &["tagName"],
            StrategyKind::ClassName => &["className"],
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured query against the UI tree: strategy kind + raw selector.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LocatorDescriptor {
    pub kind: StrategyKind,
    pub raw_selector: String,
}

impl LocatorDescriptor {
    pub fn new(kind: StrategyKind, raw_selector: impl Into<String>) -> Self {
        Self {
            kind,
            raw_selector: raw_selector.into(),
        }
    }

    /// Canonical rendering, e.g. `xpath=//div`.
    pub fn render(&self) -> String {
        format!("{}={}", self.kind.name(), self.raw_selector)
    }

    /// Reverse parse from a rendered locator string.
    ///
    /// Accepts the short form (`xpath=//div`) and the verbose form
    /// (`By.xpath: //div`). Matching is case-sensitive and exact; anything
    /// else is a hard failure, there is no default strategy.
    pub fn parse_rendered(rendered: &str) -> Result<Self, UnsupportedLocatorKind> {
        for kind in StrategyKind::ALL {
            for spelling in kind.spellings() {
                if let Some(rest) = rendered.strip_prefix(&format!("{spelling}=")) {
                    return Ok(Self::new(kind, rest));
                }
                if let Some(rest) = rendered.strip_prefix(&format!("By.{spelling}: ")) {
                    return Ok(Self::new(kind, rest));
                }
            }
        }
        Err(UnsupportedLocatorKind {
            rendered: rendered.to_string(),
        })
    }

    /// The selector usable by a platform-native predicate query.
    pub fn native_selector(&self) -> &str {
        &self.raw_selector
    }
}

impl fmt::Display for LocatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Strip one recognized prefix from a rendered locator and return the
/// remainder unchanged. Pure; fails with [`UnsupportedLocatorKind`] when no
/// prefix matches.
pub fn native_selector_from_rendered(rendered: &str) -> Result<String, UnsupportedLocatorKind> {
    LocatorDescriptor::parse_rendered(rendered).map(|descriptor| descriptor.raw_selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_parse_round_trip() {
        let descriptor = LocatorDescriptor::new(StrategyKind::Xpath, "//button[@id='login']");
        let rendered = descriptor.render();
        assert_eq!(rendered, "xpath=//button[@id='login']");
        assert_eq!(LocatorDescriptor::parse_rendered(&rendered).unwrap(), descriptor);
    }

    #[test]
    fn short_prefixes_strip_to_raw_selector() {
        let cases = [
            ("id=login", "login"),
            ("name=user", "user"),
            ("xpath=//div", "//div"),
            ("linkText=Sign in", "Sign in"),
            ("partialLinkText=Sign", "Sign"),
            ("cssSelector=.btn", ".btn"),
            ("css=.btn", ".btn"),
            ("tagName=button", "button"),
            ("className=primary", "primary"),
        ];
        for (rendered, expected) in cases {
            assert_eq!(native_selector_from_rendered(rendered).unwrap(), expected);
        }
    }

    #[test]
    fn verbose_prefixes_strip_to_raw_selector() {
        let cases = [
            ("By.id: login", "login"),
            ("By.xpath: //div", "//div"),
            ("By.partialLinkText: Sign", "Sign"),
            ("By.cssSelector: .btn", ".btn"),
            ("By.css: .btn", ".btn"),
            ("By.className: primary", "primary"),
        ];
        for (rendered, expected) in cases {
            assert_eq!(native_selector_from_rendered(rendered).unwrap(), expected);
        }
    }

    #[test]
    fn css_alias_parses_to_css_selector_kind() {
        let descriptor = LocatorDescriptor::parse_rendered("css=.btn").unwrap();
        assert_eq!(descriptor.kind, StrategyKind::CssSelector);
        assert_eq!(descriptor.raw_selector, ".btn");
    }

    #[test]
    fn unrecognized_prefix_is_a_hard_failure() {
        for rendered in ["accessibilityId=ok", "ID=login", "xpath =//div", "//div"] {
            let err = native_selector_from_rendered(rendered).unwrap_err();
            assert_eq!(err.rendered, rendered);
        }
    }

    #[test]
    fn remainder_is_returned_unchanged() {
        // Selector text containing '=' or ': ' past the prefix must survive.
        assert_eq!(
            native_selector_from_rendered("xpath=//a[@href='x=1']").unwrap(),
            "//a[@href='x=1']"
        );
        assert_eq!(
            native_selector_from_rendered("By.name: a: b").unwrap(),
            "a: b"
        );
    }
}
