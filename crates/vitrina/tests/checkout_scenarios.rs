//! Cart and checkout scenarios: totals, quantities, form validation and
//! the full purchase journey.

use std::time::Instant;

use vitrina::flows::DeliveryDetails;
use vitrina::prelude::*;
use vitrina::sim::products::{AWESOME_CHIPS, AWESOME_SHIRT};

const PRICE_EPSILON: f64 = 1e-9;

fn session() -> Storefront {
    vitrina::init_tracing();
    Storefront::new()
}

#[test]
fn test_added_product_appears_in_cart() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();

    let mut soft = SoftAssert::new();
    soft.check_eq(&checkout.heading().unwrap(), &"Your cart".to_string(), "cart heading");
    soft.check_true(
        checkout.product_listed(AWESOME_CHIPS).unwrap(),
        "product line present",
    );
    soft.assert_all().unwrap();
}

#[test]
fn test_cart_totals_add_up() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();

    let item = checkout.item_total().unwrap();
    let tax = checkout.tax().unwrap();
    let total = checkout.total().unwrap();

    let mut soft = SoftAssert::new();
    soft.check_approx(item, 15.99, "item total");
    soft.check_approx(tax, 0.79, "tax");
    soft.check_approx(item + tax, total, "item + tax = total");
    soft.assert_all().unwrap();
}

#[test]
fn test_increasing_quantity_doubles_the_item_total() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    let single = checkout.item_total().unwrap();

    checkout.increase_quantity().unwrap();
    let doubled = checkout.item_total().unwrap();

    let mut soft = SoftAssert::new();
    soft.check(Assertion::approx_eq(
        doubled,
        single * 2.0,
        PRICE_EPSILON,
        "doubled item total",
    ));
    soft.check_approx(
        checkout.item_total().unwrap() + checkout.tax().unwrap(),
        checkout.total().unwrap(),
        "totals stay consistent",
    );
    soft.assert_all().unwrap();
}

#[test]
fn test_two_products_sum_in_the_item_total() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    flows::add_shirt_to_cart(&shop).unwrap();

    let item = checkout.item_total().unwrap();
    let mut soft = SoftAssert::new();
    soft.check_approx(item, 45.98, "chips + shirt");
    soft.check_approx(
        item + checkout.tax().unwrap(),
        checkout.total().unwrap(),
        "item + tax = total",
    );
    soft.assert_all().unwrap();
}

#[test]
fn test_removing_the_only_line_empties_the_cart() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.remove_item().unwrap();

    assert_eq!(
        checkout.empty_cart_message().unwrap(),
        "How about adding some products in your cart?"
    );
}

#[test]
fn test_reset_clears_the_cart() {
    let shop = session();
    let home = HomePage::new(&shop);
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    home.reset().unwrap();
    home.open_cart().unwrap();

    assert_eq!(
        checkout.empty_cart_message().unwrap(),
        "How about adding some products in your cart?"
    );
}

#[test]
fn test_continue_shopping_returns_to_the_grid() {
    let shop = session();
    let home = HomePage::new(&shop);
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.continue_shopping().unwrap();

    assert_eq!(home.heading().unwrap(), "Products");
}

#[test]
fn test_brand_logo_leaves_the_cart_for_the_grid() {
    let shop = session();
    let home = HomePage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    home.go_home().unwrap();

    assert_eq!(home.heading().unwrap(), "Products");
}

#[test]
fn test_cancel_returns_from_the_form_to_the_cart() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.proceed_to_checkout().unwrap();
    assert_eq!(checkout.heading().unwrap(), "Your information");

    checkout.cancel().unwrap();

    let mut soft = SoftAssert::new();
    soft.check_eq(&checkout.heading().unwrap(), &"Your cart".to_string(), "back on cart");
    soft.check_true(
        checkout.product_listed(AWESOME_CHIPS).unwrap(),
        "cart line survived the detour",
    );
    soft.assert_all().unwrap();
}

#[test]
fn test_full_purchase_journey() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);
    let mut reporter = Reporter::new();
    let started = Instant::now();

    flows::add_chips_to_cart(&shop).unwrap();
    reporter.info("product in cart");

    checkout.proceed_to_checkout().unwrap();
    assert_eq!(checkout.heading().unwrap(), "Your information");
    reporter.pass("delivery form reached");

    flows::fill_delivery_details(&shop, &DeliveryDetails::default()).unwrap();
    assert_eq!(checkout.heading().unwrap(), "Order summary");
    reporter.pass("order summary reached");

    checkout.complete_order().unwrap();
    assert_eq!(checkout.heading().unwrap(), "Order complete");
    assert_eq!(checkout.order_confirmation().unwrap(), "Thank you for your order!");
    reporter.record(ScenarioResult::passed("full purchase", started.elapsed()));

    assert!(reporter.all_passed());
    assert!(reporter.to_json().unwrap().contains("full purchase"));
}

#[test]
fn test_completed_order_empties_the_cart() {
    let shop = session();
    let home = HomePage::new(&shop);
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    flows::place_order(&shop, &DeliveryDetails::default()).unwrap();

    home.open_cart().unwrap();
    assert_eq!(
        checkout.empty_cart_message().unwrap(),
        "How about adding some products in your cart?"
    );
}

#[test]
fn test_first_name_is_required() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.proceed_to_checkout().unwrap();
    checkout.set_last_name("Amariei").unwrap();
    checkout.set_address("Acasa la Floresti").unwrap();
    checkout.continue_checkout().unwrap();

    let mut soft = SoftAssert::new();
    soft.check_eq(
        &checkout.validation_error().unwrap(),
        &"First Name is required".to_string(),
        "first-name message",
    );
    soft.check_eq(
        &checkout.heading().unwrap(),
        &"Your information".to_string(),
        "form not submitted",
    );
    soft.assert_all().unwrap();
}

#[test]
fn test_last_name_is_required() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.proceed_to_checkout().unwrap();
    checkout.set_first_name("Ioan").unwrap();
    checkout.set_address("Acasa la Floresti").unwrap();
    checkout.continue_checkout().unwrap();

    assert_eq!(
        checkout.validation_errors().unwrap(),
        vec!["Last Name is required"]
    );
}

#[test]
fn test_address_is_required() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.proceed_to_checkout().unwrap();
    checkout.set_first_name("Ioan").unwrap();
    checkout.set_last_name("Amariei").unwrap();
    checkout.continue_checkout().unwrap();

    assert_eq!(
        checkout.validation_errors().unwrap(),
        vec!["Address is required"]
    );
}

#[test]
fn test_every_missing_field_is_reported_at_once() {
    let shop = session();
    let checkout = CheckoutPage::new(&shop);

    flows::add_chips_to_cart(&shop).unwrap();
    checkout.proceed_to_checkout().unwrap();
    checkout.continue_checkout().unwrap();

    assert_eq!(
        checkout.validation_errors().unwrap(),
        vec![
            "First Name is required",
            "Last Name is required",
            "Address is required"
        ]
    );
}

#[test]
fn test_removing_from_the_wishlist_clears_the_badge() {
    let shop = session();
    let home = HomePage::new(&shop);
    let checkout = CheckoutPage::new(&shop);

    flows::add_product_to_wishlist(&shop, AWESOME_CHIPS).unwrap();
    home.open_wishlist().unwrap();
    checkout.remove_from_wishlist().unwrap();

    let mut soft = SoftAssert::new();
    soft.check_true(
        !checkout.product_listed(AWESOME_CHIPS).unwrap(),
        "product gone from the wishlist",
    );
    soft.check_eq(&home.wishlist_badge().unwrap(), &None, "badge gone");
    soft.assert_all().unwrap();
}

#[test]
fn test_purchase_starting_from_the_wishlist() {
    let shop = session();
    let home = HomePage::new(&shop);
    let checkout = CheckoutPage::new(&shop);

    flows::add_product_to_wishlist(&shop, AWESOME_SHIRT).unwrap();
    assert_eq!(home.wishlist_badge().unwrap().as_deref(), Some("1"));

    home.open_wishlist().unwrap();
    home.open_product(AWESOME_SHIRT).unwrap();
    home.add_to_cart().unwrap();
    home.open_cart().unwrap();

    flows::place_order(&shop, &DeliveryDetails::default()).unwrap();

    let mut soft = SoftAssert::new();
    soft.check_eq(
        &checkout.order_confirmation().unwrap(),
        &"Thank you for your order!".to_string(),
        "order confirmed",
    );
    soft.check_eq(
        &home.wishlist_badge().unwrap().as_deref(),
        &Some("1"),
        "wishlist untouched by the purchase",
    );
    soft.assert_all().unwrap();
}
