//! Locator abstraction and the per-page locator registry.
//!
//! A [`Locator`] is pure data: a selection strategy plus a value, with an
//! optional ordinal for selectors that match multiple nodes. Locators are
//! created when a page object is constructed and never mutated afterwards.
//!
//! The [`LocatorRegistry`] maps symbolic field names to locators so that a
//! page object can translate intention-revealing operation names into
//! driver queries without ever handing a raw locator to its callers.

use std::collections::HashMap;
use std::fmt;

/// Selection strategy for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Match by element id attribute
    Id,
    /// Match an anchor by its exact link text
    LinkText,
    /// CSS selector
    Css,
    /// XPath expression
    XPath,
}

impl Strategy {
    /// Short prefix used in locator descriptions and error messages
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LinkText => "link",
            Self::Css => "css",
            Self::XPath => "xpath",
        }
    }
}

/// A strategy + value (+ optional ordinal) describing how to find an
/// element in the live document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    value: String,
    nth: Option<usize>,
}

impl Locator {
    /// Locate by element id
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Id,
            value: value.into(),
            nth: None,
        }
    }

    /// Locate an anchor by exact link text
    #[must_use]
    pub fn link_text(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::LinkText,
            value: value.into(),
            nth: None,
        }
    }

    /// Locate by CSS selector
    #[must_use]
    pub fn css(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            value: value.into(),
            nth: None,
        }
    }

    /// Locate by XPath expression
    #[must_use]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            value: value.into(),
            nth: None,
        }
    }

    /// Disambiguate to the `i`-th match (zero-based) when the selector
    /// matches multiple nodes
    #[must_use]
    pub fn nth(mut self, i: usize) -> Self {
        self.nth = Some(i);
        self
    }

    /// The selection strategy
    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// The selector value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The ordinal disambiguator, if any
    #[must_use]
    pub const fn ordinal(&self) -> Option<usize> {
        self.nth
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.strategy.prefix(), self.value)?;
        if let Some(i) = self.nth {
            write!(f, "[{i}]")?;
        }
        Ok(())
    }
}

/// Mapping from symbolic field names to locators.
///
/// Lookup of an unknown name is a programming error in the page object,
/// not a runtime condition, and fails fast.
#[derive(Debug, Default, Clone)]
pub struct LocatorRegistry {
    locators: HashMap<String, Locator>,
}

impl LocatorRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locator under a symbolic name
    pub fn insert(&mut self, name: impl Into<String>, locator: Locator) {
        let _ = self.locators.insert(name.into(), locator);
    }

    /// Builder-style registration
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, locator: Locator) -> Self {
        self.insert(name, locator);
        self
    }

    /// Look up a locator by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Locator> {
        self.locators.get(name)
    }

    /// Look up a locator by name, panicking on unknown names.
    ///
    /// # Panics
    ///
    /// Panics when `name` was never registered; that is a defect in the
    /// page object definition and must fail fast.
    #[must_use]
    pub fn locator(&self, name: &str) -> &Locator {
        self.locators
            .get(name)
            .unwrap_or_else(|| panic!("unknown locator name: {name}"))
    }

    /// All registered names
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.locators.keys().map(String::as_str).collect()
    }

    /// Number of registered locators
    #[must_use]
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod locator_tests {
        use super::*;

        #[test]
        fn test_css_locator() {
            let locator = Locator::css(".btn.btn-primary");
            assert_eq!(locator.strategy(), &Strategy::Css);
            assert_eq!(locator.value(), ".btn.btn-primary");
            assert!(locator.ordinal().is_none());
        }

        #[test]
        fn test_id_locator() {
            let locator = Locator::id("input-search");
            assert_eq!(locator.strategy(), &Strategy::Id);
        }

        #[test]
        fn test_link_text_locator() {
            let locator = Locator::link_text("Awesome Granite Chips");
            assert_eq!(locator.strategy(), &Strategy::LinkText);
            assert_eq!(locator.value(), "Awesome Granite Chips");
        }

        #[test]
        fn test_nth_disambiguation() {
            let locator = Locator::xpath("//td[@class='amount']").nth(2);
            assert_eq!(locator.ordinal(), Some(2));
        }

        #[test]
        fn test_display_includes_strategy_and_ordinal() {
            let locator = Locator::xpath("//td[@class='amount']").nth(1);
            assert_eq!(locator.to_string(), "xpath://td[@class='amount'][1]");

            let plain = Locator::css(".error");
            assert_eq!(plain.to_string(), "css:.error");
        }
    }

    mod registry_tests {
        use super::*;

        #[test]
        fn test_insert_and_get() {
            let registry = LocatorRegistry::new()
                .with("search_bar", Locator::id("input-search"))
                .with("search_button", Locator::css(".btn.btn-light.btn-sm"));

            assert_eq!(registry.len(), 2);
            assert!(registry.get("search_bar").is_some());
            assert!(registry.get("nonexistent").is_none());
        }

        #[test]
        fn test_locator_lookup() {
            let registry = LocatorRegistry::new().with("badge", Locator::css(".shopping_cart_badge"));
            assert_eq!(registry.locator("badge").value(), ".shopping_cart_badge");
        }

        #[test]
        #[should_panic(expected = "unknown locator name: missing")]
        fn test_unknown_name_fails_fast() {
            let registry = LocatorRegistry::new();
            let _ = registry.locator("missing");
        }

        #[test]
        fn test_names() {
            let registry = LocatorRegistry::new().with("one", Locator::id("a"));
            assert_eq!(registry.names(), vec!["one"]);
            assert!(!registry.is_empty());
        }
    }
}
