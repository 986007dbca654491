//! Vitrina: page-object test harness for the demo storefront.
//!
//! Vitrina (Romanian: "shop window") layers end-to-end storefront
//! scenarios on top of a small driver abstraction:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ Scenario     │   │ Page objects │   │ Driver        │
//! │ (asserts)    │──►│ + flows      │──►│ (Storefront  │
//! │              │   │ (no asserts) │   │  or browser) │
//! └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! Scenarios own every assertion; flows sequence page primitives; pages
//! translate named operations into locator-addressed driver calls. The
//! bundled [`sim::Storefront`] runtime implements [`Driver`] in process,
//! so the whole stack runs deterministically with no browser attached.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::large_stack_arrays, clippy::large_stack_frames))]

mod assertion;
mod driver;
mod locator;
mod price;
mod reporter;
mod result;
mod wait;

/// Composite workflows built from page-object primitives
pub mod flows;
/// Page objects for the storefront screens
pub mod page;
/// Deterministic in-process storefront runtime
pub mod sim;

pub use assertion::{Assertion, AssertionResult, SoftAssert};
pub use driver::{Driver, ElementHandle};
pub use locator::{Locator, LocatorRegistry, Strategy};
pub use price::parse_price;
pub use reporter::{LogEntry, Reporter, ScenarioResult, ScenarioStatus, Severity};
pub use result::{VitrinaError, VitrinaResult};
pub use wait::{
    click_when_ready, wait_for, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS,
};

/// Install a global tracing subscriber for scenario runs.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. Safe to call
/// from every scenario; only the first call installs the subscriber.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Convenience re-exports for scenario suites
pub mod prelude {
    pub use super::assertion::{Assertion, AssertionResult, SoftAssert};
    pub use super::driver::{Driver, ElementHandle};
    pub use super::flows;
    pub use super::locator::{Locator, LocatorRegistry, Strategy};
    pub use super::page::{CheckoutPage, HomePage, LoginPage};
    pub use super::price::parse_price;
    pub use super::reporter::{Reporter, ScenarioResult, ScenarioStatus, Severity};
    pub use super::result::{VitrinaError, VitrinaResult};
    pub use super::sim::Storefront;
    pub use super::wait::{click_when_ready, wait_for, WaitOptions};
}
