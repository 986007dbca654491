//! Composite workflows.
//!
//! A flow strings together page-object primitives into a reusable
//! journey and nothing more: flows never assert. Verification belongs to
//! the scenario that called the flow, so the same flow can serve as a
//! test subject in one scenario and as setup in another.

use tracing::info;

use crate::driver::Driver;
use crate::page::{CheckoutPage, HomePage, LoginPage};
use crate::result::VitrinaResult;
use crate::sim::products;

/// Default delivery details used by the purchase journeys
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    /// Recipient first name
    pub first_name: String,
    /// Recipient last name
    pub last_name: String,
    /// Delivery address
    pub address: String,
}

impl Default for DeliveryDetails {
    fn default() -> Self {
        Self {
            first_name: "Ioan".to_string(),
            last_name: "Amariei".to_string(),
            address: "Acasa la Floresti".to_string(),
        }
    }
}

/// Open a product from the grid, add it to the cart and navigate to the
/// cart. Starts from the landing screen so the journey works from any
/// screen, including the cart itself.
pub fn add_product_to_cart<D: Driver>(driver: &D, name: &str) -> VitrinaResult<()> {
    info!(product = name, "adding product to cart");
    let home = HomePage::new(driver);
    home.go_home()?;
    home.open_product(name)?;
    home.add_to_cart()?;
    home.open_cart()
}

/// Put the granite chips in the cart and land on the cart screen
pub fn add_chips_to_cart<D: Driver>(driver: &D) -> VitrinaResult<()> {
    add_product_to_cart(driver, products::AWESOME_CHIPS)
}

/// Put the soft shirt in the cart and land on the cart screen
pub fn add_shirt_to_cart<D: Driver>(driver: &D) -> VitrinaResult<()> {
    add_product_to_cart(driver, products::AWESOME_SHIRT)
}

/// Open a product and put it on the wishlist, staying on the detail view
pub fn add_product_to_wishlist<D: Driver>(driver: &D, name: &str) -> VitrinaResult<()> {
    info!(product = name, "adding product to wishlist");
    let home = HomePage::new(driver);
    home.open_product(name)?;
    home.add_to_wishlist()
}

/// Sign in through the login modal
pub fn login_as<D: Driver>(driver: &D, username: &str, password: &str) -> VitrinaResult<()> {
    info!(username, "logging in");
    let login = LoginPage::new(driver);
    login.open()?;
    login.set_username(username)?;
    login.set_password(password)?;
    login.submit()
}

/// Fill the delivery-details form and submit it
pub fn fill_delivery_details<D: Driver>(
    driver: &D,
    details: &DeliveryDetails,
) -> VitrinaResult<()> {
    info!(first_name = %details.first_name, "filling delivery details");
    let checkout = CheckoutPage::new(driver);
    checkout.set_first_name(&details.first_name)?;
    checkout.set_last_name(&details.last_name)?;
    checkout.set_address(&details.address)?;
    checkout.continue_checkout()
}

/// Drive a cart through checkout to the order-complete screen
pub fn place_order<D: Driver>(driver: &D, details: &DeliveryDetails) -> VitrinaResult<()> {
    let checkout = CheckoutPage::new(driver);
    checkout.proceed_to_checkout()?;
    fill_delivery_details(driver, details)?;
    checkout.complete_order()
}
