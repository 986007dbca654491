//! Bounded blocking waits over a [`Driver`].
//!
//! These are the shared helpers the page objects use instead of inheriting
//! them from a base page: free functions that poll the driver until an
//! element is present and displayed, or a bounded timeout elapses. A
//! timeout surfaces immediately as [`VitrinaError::Timeout`]; there is no
//! retry policy beyond the poll loop itself.

use std::time::{Duration, Instant};

use crate::driver::{Driver, ElementHandle};
use crate::locator::Locator;
use crate::result::{VitrinaError, VitrinaResult};

/// Default timeout for wait operations (10 seconds, as the suite's
/// page-level waits)
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = 10_000;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }
}

/// Block until the locator resolves to a displayed element, or the bounded
/// timeout elapses.
///
/// The element is re-resolved on every poll; the returned handle is the
/// final resolution. On timeout the error is `Timeout`, distinct from the
/// `ElementNotFound` a plain [`Driver::find`] produces.
pub fn wait_for<D: Driver + ?Sized>(
    driver: &D,
    locator: &Locator,
    opts: WaitOptions,
) -> VitrinaResult<ElementHandle> {
    let deadline = Instant::now() + Duration::from_millis(opts.timeout_ms);
    loop {
        if let Some(handle) = driver.try_find(locator)? {
            if handle.displayed {
                return Ok(handle);
            }
        }
        if Instant::now() >= deadline {
            return Err(VitrinaError::Timeout {
                ms: opts.timeout_ms,
                condition: format!("element displayed: {locator}"),
            });
        }
        std::thread::sleep(Duration::from_millis(opts.poll_interval_ms));
    }
}

/// Wait for the element to be present and displayed, then click it.
pub fn click_when_ready<D: Driver + ?Sized>(
    driver: &D,
    locator: &Locator,
    opts: WaitOptions,
) -> VitrinaResult<()> {
    let _ = wait_for(driver, locator, opts)?;
    driver.click(locator)
}
