//! Cart, checkout form, order summary and order confirmation screens.

use crate::driver::Driver;
use crate::locator::{Locator, LocatorRegistry};
use crate::result::VitrinaResult;

use super::{is_present, read_price};

/// Everything from the shopping cart through order confirmation.
///
/// The cart totals row exposes three amount cells in a fixed order;
/// the ordinal on the shared cell locator picks each one out.
pub struct CheckoutPage<'a, D: Driver> {
    driver: &'a D,
    locators: LocatorRegistry,
}

impl<'a, D: Driver> CheckoutPage<'a, D> {
    /// Bind the page to a driver session
    #[must_use]
    pub fn new(driver: &'a D) -> Self {
        let amount = Locator::xpath("//td[@class='amount']");
        let locators = LocatorRegistry::new()
            .with("heading", Locator::css(".text-muted"))
            .with("item_total", amount.clone().nth(0))
            .with("tax", amount.clone().nth(1))
            .with("total", amount.nth(2))
            .with("primary_button", Locator::css(".btn.btn-success"))
            .with("secondary_button", Locator::css(".btn.btn-danger"))
            .with("first_name", Locator::id("first-name"))
            .with("last_name", Locator::id("last-name"))
            .with("address", Locator::id("address"))
            .with("error", Locator::css(".error"))
            .with("remove_item", Locator::css(".svg-inline--fa.fa-trash.fa-w-14"))
            .with(
                "increase_quantity",
                Locator::css(".svg-inline--fa.fa-plus-circle.fa-w-16"),
            )
            .with(
                "remove_from_wishlist",
                Locator::css(".svg-inline--fa.fa-heart-broken.fa-w-16.fa-2x"),
            )
            .with("empty_cart_message", Locator::css(".text-center.container"))
            .with("order_confirmation", Locator::css(".text-center"));
        Self { driver, locators }
    }

    /// Heading of the current screen
    pub fn heading(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("heading"))
    }

    /// Item total from the cart amounts row
    pub fn item_total(&self) -> VitrinaResult<f64> {
        read_price(self.driver, self.locators.locator("item_total"))
    }

    /// Tax from the cart amounts row
    pub fn tax(&self) -> VitrinaResult<f64> {
        read_price(self.driver, self.locators.locator("tax"))
    }

    /// Grand total from the cart amounts row
    pub fn total(&self) -> VitrinaResult<f64> {
        read_price(self.driver, self.locators.locator("total"))
    }

    /// Whether a product line is present in the cart or wishlist view
    pub fn product_listed(&self, name: &str) -> VitrinaResult<bool> {
        is_present(self.driver, &Locator::link_text(name))
    }

    /// Proceed from the cart to the delivery-details form
    pub fn proceed_to_checkout(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("primary_button"))
    }

    /// Submit the delivery-details form, moving on to the order summary
    /// when every field validates
    pub fn continue_checkout(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("primary_button"))
    }

    /// Place the order from the summary screen
    pub fn complete_order(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("primary_button"))
    }

    /// Leave the delivery-details form back to the cart
    pub fn cancel(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("secondary_button"))
    }

    /// Leave the cart back to the product grid
    pub fn continue_shopping(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("secondary_button"))
    }

    /// Type into the first-name field
    pub fn set_first_name(&self, value: &str) -> VitrinaResult<()> {
        self.driver.send_keys(self.locators.locator("first_name"), value)
    }

    /// Type into the last-name field
    pub fn set_last_name(&self, value: &str) -> VitrinaResult<()> {
        self.driver.send_keys(self.locators.locator("last_name"), value)
    }

    /// Type into the address field
    pub fn set_address(&self, value: &str) -> VitrinaResult<()> {
        self.driver.send_keys(self.locators.locator("address"), value)
    }

    /// First validation message on the delivery-details form
    pub fn validation_error(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("error"))
    }

    /// All validation messages on the delivery-details form, in form
    /// field order
    pub fn validation_errors(&self) -> VitrinaResult<Vec<String>> {
        self.driver.all_texts(self.locators.locator("error"))
    }

    /// Remove the first line from the cart
    pub fn remove_item(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("remove_item"))
    }

    /// Bump the first cart line's quantity by one
    pub fn increase_quantity(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("increase_quantity"))
    }

    /// Remove the first item from the wishlist
    pub fn remove_from_wishlist(&self) -> VitrinaResult<()> {
        self.driver
            .click(self.locators.locator("remove_from_wishlist"))
    }

    /// Message shown when the cart has no lines
    pub fn empty_cart_message(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("empty_cart_message"))
    }

    /// Confirmation text on the order-complete screen
    pub fn order_confirmation(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("order_confirmation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HomePage;
    use crate::sim::{products, Storefront};

    fn cart_with_chips(shop: &Storefront) {
        let home = HomePage::new(shop);
        home.open_product(products::AWESOME_CHIPS).unwrap();
        home.add_to_cart().unwrap();
        home.open_cart().unwrap();
    }

    #[test]
    fn test_amounts_row_ordinals() {
        let shop = Storefront::new();
        cart_with_chips(&shop);
        let checkout = CheckoutPage::new(&shop);

        assert!((checkout.item_total().unwrap() - 15.99).abs() < f64::EPSILON);
        assert!((checkout.tax().unwrap() - 0.79).abs() < f64::EPSILON);
        assert!((checkout.total().unwrap() - 16.78).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_item_empties_cart() {
        let shop = Storefront::new();
        cart_with_chips(&shop);
        let checkout = CheckoutPage::new(&shop);

        checkout.remove_item().unwrap();
        assert_eq!(
            checkout.empty_cart_message().unwrap(),
            "How about adding some products in your cart?"
        );
    }

    #[test]
    fn test_form_validation_lists_missing_fields_in_order() {
        let shop = Storefront::new();
        cart_with_chips(&shop);
        let checkout = CheckoutPage::new(&shop);
        checkout.proceed_to_checkout().unwrap();
        checkout.set_last_name("Amariei").unwrap();
        checkout.continue_checkout().unwrap();

        assert_eq!(
            checkout.validation_errors().unwrap(),
            vec!["First Name is required", "Address is required"]
        );
        assert_eq!(checkout.validation_error().unwrap(), "First Name is required");
    }
}
