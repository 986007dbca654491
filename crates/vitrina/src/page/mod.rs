//! Page objects for the storefront screens.
//!
//! Each page owns a [`LocatorRegistry`](crate::locator::LocatorRegistry)
//! mapping element names to locators and exposes named operations and
//! queries; raw locators never cross the page boundary. Pages borrow
//! their driver, so any number of page objects can share one session,
//! and behavior shared between pages lives in the free functions here
//! rather than a base-page inheritance chain.

use crate::driver::Driver;
use crate::locator::Locator;
use crate::price::parse_price;
use crate::result::VitrinaResult;

mod checkout;
mod home;
mod login;

pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use login::LoginPage;

/// Read an element's text and parse it as a dollar amount
pub fn read_price<D: Driver + ?Sized>(driver: &D, locator: &Locator) -> VitrinaResult<f64> {
    let text = driver.text(locator)?;
    parse_price(&text)
}

/// Whether the locator currently resolves to an element. Absence is a
/// normal answer here, not an error.
pub fn is_present<D: Driver + ?Sized>(driver: &D, locator: &Locator) -> VitrinaResult<bool> {
    Ok(driver.try_find(locator)?.is_some())
}
