//! Product grid, navigation bar and product-detail interactions.

use crate::driver::Driver;
use crate::locator::{Locator, LocatorRegistry};
use crate::price::parse_price;
use crate::result::VitrinaResult;
use crate::wait::{self, WaitOptions};

use super::is_present;

/// The storefront landing screen: search, sorting, the product grid and
/// the ever-present navigation icons. Product-detail actions (add to
/// cart, add to wishlist) live here too since the detail view opens from
/// the grid.
pub struct HomePage<'a, D: Driver> {
    driver: &'a D,
    locators: LocatorRegistry,
}

impl<'a, D: Driver> HomePage<'a, D> {
    /// Bind the page to a driver session
    #[must_use]
    pub fn new(driver: &'a D) -> Self {
        let locators = LocatorRegistry::new()
            .with("heading", Locator::css(".text-muted"))
            .with("search_bar", Locator::id("input-search"))
            .with("search_button", Locator::css(".btn.btn-light.btn-sm"))
            .with("product_links", Locator::css(".card-link"))
            .with(
                "product_prices",
                Locator::xpath("//span[@style='font-weight: bold; font-size: 16px;']"),
            )
            .with(
                "sort_select",
                Locator::css(".sort-products-select.form-control.form-control-sm"),
            )
            .with(
                "add_to_cart",
                Locator::css(".svg-inline--fa.fa-cart-plus.fa-w-18.fa-3x"),
            )
            .with(
                "add_to_wishlist",
                Locator::css(".svg-inline--fa.fa-heart.fa-w-16.fa-3x"),
            )
            .with("cart_icon", Locator::css(".svg-inline--fa.fa-shopping-cart.fa-w-18"))
            .with("wishlist_icon", Locator::css(".svg-inline--fa.fa-heart.fa-w-16"))
            .with(
                "wishlist_badge",
                Locator::css(".fa-layers-counter.shopping_cart_badge"),
            )
            .with(
                "brand_logo",
                Locator::css(".svg-inline--fa.fa-shopping-bag.fa-w-14.fa-3x.brand-logo"),
            )
            .with("help_icon", Locator::css(".svg-inline--fa.fa-question.fa-w-12"))
            .with("help_modal_title", Locator::css(".modal-title"))
            .with("reset_icon", Locator::css(".svg-inline--fa.fa-undo.fa-w-16"));
        Self { driver, locators }
    }

    /// Heading of the current screen
    pub fn heading(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("heading"))
    }

    /// Type a term into the search bar and run the search
    pub fn search(&self, term: &str) -> VitrinaResult<()> {
        self.driver.send_keys(self.locators.locator("search_bar"), term)?;
        self.driver.click(self.locators.locator("search_button"))
    }

    /// Names of the products currently on the grid, in display order
    pub fn product_names(&self) -> VitrinaResult<Vec<String>> {
        self.driver.all_texts(self.locators.locator("product_links"))
    }

    /// Prices of the products currently on the grid, in display order
    pub fn product_prices(&self) -> VitrinaResult<Vec<f64>> {
        self.driver
            .all_texts(self.locators.locator("product_prices"))?
            .iter()
            .map(|text| parse_price(text))
            .collect()
    }

    /// Displayed price of a single grid position
    pub fn product_price_at(&self, index: usize) -> VitrinaResult<f64> {
        let locator = self.locators.locator("product_prices").clone().nth(index);
        let text = self.driver.text(&locator)?;
        parse_price(&text)
    }

    /// Apply one of the sort options by its visible text
    pub fn sort_by(&self, option: &str) -> VitrinaResult<()> {
        self.driver
            .select_option(self.locators.locator("sort_select"), option)
    }

    /// Open a product's detail view from its grid link
    pub fn open_product(&self, name: &str) -> VitrinaResult<()> {
        self.driver.click(&Locator::link_text(name))
    }

    /// Whether a product link is visible on the current screen
    pub fn product_visible(&self, name: &str) -> VitrinaResult<bool> {
        is_present(self.driver, &Locator::link_text(name))
    }

    /// Add the currently open product to the cart
    pub fn add_to_cart(&self) -> VitrinaResult<()> {
        wait::click_when_ready(
            self.driver,
            self.locators.locator("add_to_cart"),
            WaitOptions::default(),
        )
    }

    /// Add the currently open product to the wishlist
    pub fn add_to_wishlist(&self) -> VitrinaResult<()> {
        wait::click_when_ready(
            self.driver,
            self.locators.locator("add_to_wishlist"),
            WaitOptions::default(),
        )
    }

    /// Navigate to the shopping cart
    pub fn open_cart(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("cart_icon"))
    }

    /// Navigate to the wishlist
    pub fn open_wishlist(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("wishlist_icon"))
    }

    /// Wishlist badge text, or `None` while the wishlist is empty and
    /// the badge is not rendered
    pub fn wishlist_badge(&self) -> VitrinaResult<Option<String>> {
        match self.driver.try_find(self.locators.locator("wishlist_badge"))? {
            Some(handle) => Ok(Some(self.driver.handle_text(&handle)?)),
            None => Ok(None),
        }
    }

    /// Open the wishlist by clicking the counter badge
    pub fn click_badge(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("wishlist_badge"))
    }

    /// Return to the landing screen via the brand logo
    pub fn go_home(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("brand_logo"))
    }

    /// Open the help modal
    pub fn open_help(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("help_icon"))
    }

    /// Title of the open help modal
    pub fn help_modal_title(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("help_modal_title"))
    }

    /// Reset the application to its pristine landing state
    pub fn reset(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("reset_icon"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{products, Storefront};

    #[test]
    fn test_search_narrows_grid_to_matches() {
        let shop = Storefront::new();
        let home = HomePage::new(&shop);
        home.search("Awesome").unwrap();

        let names = home.product_names().unwrap();
        assert_eq!(names.len(), 3);
        assert!(names.iter().all(|n| n.contains("Awesome")));
    }

    #[test]
    fn test_sort_by_price_ascending_orders_prices() {
        let shop = Storefront::new();
        let home = HomePage::new(&shop);
        home.sort_by("Sort by price (low to high)").unwrap();

        let prices = home.product_prices().unwrap();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_add_to_cart_from_detail_view() {
        let shop = Storefront::new();
        let home = HomePage::new(&shop);
        home.open_product(products::AWESOME_CHIPS).unwrap();
        home.add_to_cart().unwrap();
        home.open_cart().unwrap();

        assert!(home.product_visible(products::AWESOME_CHIPS).unwrap());
    }

    #[test]
    fn test_badge_absent_with_empty_wishlist() {
        let shop = Storefront::new();
        let home = HomePage::new(&shop);
        assert_eq!(home.wishlist_badge().unwrap(), None);
    }
}
