//! Result and error types for Vitrina.

use thiserror::Error;

/// Result type for Vitrina operations
pub type VitrinaResult<T> = Result<T, VitrinaError>;

/// Errors that can occur while driving the storefront
#[derive(Debug, Error)]
pub enum VitrinaError {
    /// No element matched the locator
    #[error("Element not found: {locator}")]
    ElementNotFound {
        /// Locator description
        locator: String,
    },

    /// A previously resolved element is no longer attached to the document
    #[error("Element is stale (no longer attached): {locator}")]
    StaleElement {
        /// Locator description of the original resolution
        locator: String,
    },

    /// A bounded wait elapsed before its condition held
    #[error("Wait timed out after {ms}ms: {condition}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Description of the awaited condition
        condition: String,
    },

    /// Rendered price text could not be parsed as a number
    #[error("Failed to parse price from {text:?}")]
    PriceParse {
        /// The offending rendered text
        text: String,
    },

    /// Navigation to an application screen failed
    #[error("Navigation failed: {message}")]
    NavigationError {
        /// Error message
        message: String,
    },

    /// One or more assertions failed
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message (may aggregate multiple soft failures)
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VitrinaError {
    /// True when the error means "zero matching elements".
    ///
    /// Scenarios use this to turn absence into a positive assertion
    /// (e.g. "the product was removed"), but prefer `Driver::try_find`
    /// which returns absence as a normal value.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }

    /// True when the error is a bounded-wait timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
