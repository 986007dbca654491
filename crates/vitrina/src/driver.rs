//! Driver capability trait and element handles.
//!
//! The [`Driver`] trait is the boundary between the page-object layer and
//! whatever renders the application, whether that is a live browser session
//! or the in-process [`Storefront`](crate::sim::Storefront) runtime. Page
//! objects borrow a driver; they never own or launch one, and session
//! lifecycle (start/stop, capabilities) is the harness's concern.
//!
//! Execution is synchronous and blocking: each call returns only once the
//! application has responded. A harness that parallelizes scenarios must
//! give every concurrent scenario its own driver instance.

use serde::{Deserialize, Serialize};

use crate::locator::Locator;
use crate::result::{VitrinaError, VitrinaResult};

/// An ephemeral reference to a live DOM node.
///
/// Handles are resolved from a [`Locator`] at the moment of use and are
/// invalidated by any navigation or DOM mutation; they must never be cached
/// across operations. The `generation` field stamps the document revision
/// the handle was resolved against so a driver can report staleness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Driver-assigned element identifier
    pub element_id: String,
    /// Element tag name
    pub tag: String,
    /// Text content at resolution time
    pub text: String,
    /// Whether the element was displayed at resolution time
    pub displayed: bool,
    /// Document revision the handle belongs to
    pub generation: u64,
}

impl ElementHandle {
    /// Create a new handle
    #[must_use]
    pub fn new(element_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            tag: tag.into(),
            text: String::new(),
            displayed: true,
            generation: 0,
        }
    }

    /// Set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the document generation
    #[must_use]
    pub fn at_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }
}

/// Capability the page-object layer needs from a browser session.
///
/// Locator-addressed operations re-resolve the element on every call;
/// nothing is memoized, because any prior interaction may have invalidated
/// the underlying node. Errors propagate to the caller unmodified; the
/// driver never recovers an `ElementNotFound`, `StaleElement` or `Timeout`
/// locally.
pub trait Driver {
    /// Resolve a locator against the current document, returning zero or
    /// more handles in document order. The locator's ordinal is NOT applied
    /// here; use [`Driver::find`] for single-element resolution.
    fn resolve(&self, locator: &Locator) -> VitrinaResult<Vec<ElementHandle>>;

    /// Click the element the locator resolves to
    fn click(&self, locator: &Locator) -> VitrinaResult<()>;

    /// Type text into the element the locator resolves to
    fn send_keys(&self, locator: &Locator, text: &str) -> VitrinaResult<()>;

    /// Select an option from a `<select>` element by its visible text
    fn select_option(&self, locator: &Locator, visible_text: &str) -> VitrinaResult<()>;

    /// Read the text of a handle, failing with `StaleElement` when the
    /// handle's generation is outdated
    fn handle_text(&self, handle: &ElementHandle) -> VitrinaResult<String>;

    /// Report whether a handle's element is displayed, failing with
    /// `StaleElement` when the handle's generation is outdated
    fn handle_displayed(&self, handle: &ElementHandle) -> VitrinaResult<bool>;

    /// Resolve a locator to exactly one handle, applying the locator's
    /// ordinal. Zero matches (or an ordinal past the match list) is
    /// `ElementNotFound`.
    fn find(&self, locator: &Locator) -> VitrinaResult<ElementHandle> {
        let matches = self.resolve(locator)?;
        matches
            .into_iter()
            .nth(locator.ordinal().unwrap_or(0))
            .ok_or_else(|| VitrinaError::ElementNotFound {
                locator: locator.to_string(),
            })
    }

    /// Resolve a locator to an optional handle, so absence is a normal
    /// return value rather than a control-flow exception
    fn try_find(&self, locator: &Locator) -> VitrinaResult<Option<ElementHandle>> {
        match self.find(locator) {
            Ok(handle) => Ok(Some(handle)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Read the current text of the element the locator resolves to
    fn text(&self, locator: &Locator) -> VitrinaResult<String> {
        Ok(self.find(locator)?.text)
    }

    /// Whether the element the locator resolves to is displayed
    fn is_displayed(&self, locator: &Locator) -> VitrinaResult<bool> {
        Ok(self.find(locator)?.displayed)
    }

    /// Text of every element the locator resolves to, in document order
    fn all_texts(&self, locator: &Locator) -> VitrinaResult<Vec<String>> {
        Ok(self.resolve(locator)?.into_iter().map(|h| h.text).collect())
    }
}
