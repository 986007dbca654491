//! Deterministic in-process storefront runtime.
//!
//! [`Storefront`] models the demo shop (product grid, search, sort,
//! cart, wishlist, login and checkout) as an explicit state machine and
//! exposes it through the [`Driver`] trait, so scenarios drive it exactly
//! as they would drive a live browser session. A fresh instance per
//! scenario gives each run its own isolated session; there is no ambient
//! shared state.
//!
//! Every mutation bumps a document generation counter; element handles
//! resolved before a mutation become stale, mirroring how a real DOM
//! invalidates node references on navigation.

use std::cell::RefCell;

use crate::driver::{Driver, ElementHandle};
use crate::locator::{Locator, Strategy};
use crate::result::{VitrinaError, VitrinaResult};

/// A catalog entry: product name and price in integer cents
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Display name (also the link text)
    pub name: &'static str,
    /// Price in cents
    pub cents: u32,
}

/// Product name fixtures used across the scenario suites
pub mod products {
    /// $15.99
    pub const AWESOME_CHIPS: &str = "Awesome Granite Chips";
    /// $15.99
    pub const AWESOME_CHAIR: &str = "Awesome Metal Chair";
    /// $29.99
    pub const AWESOME_SHIRT: &str = "Awesome Soft Shirt";
    /// $7.99
    pub const CONCRETE_HAT: &str = "Incredible Concrete Hat";
}

/// The fixed demo-shop catalog
pub const CATALOG: &[Product] = &[
    Product {
        name: products::AWESOME_CHIPS,
        cents: 15_99,
    },
    Product {
        name: products::AWESOME_CHAIR,
        cents: 15_99,
    },
    Product {
        name: products::AWESOME_SHIRT,
        cents: 29_99,
    },
    Product {
        name: products::CONCRETE_HAT,
        cents: 7_99,
    },
    Product {
        name: "Practical Wooden Bacon",
        cents: 29_99,
    },
    Product {
        name: "Practical Metal Mouse",
        cents: 9_99,
    },
    Product {
        name: "Gorgeous Soft Pizza",
        cents: 19_99,
    },
    Product {
        name: "Licensed Frozen Gloves",
        cents: 14_99,
    },
    Product {
        name: "Refined Steel Table",
        cents: 31_99,
    },
];

/// Valid demo credentials
pub const VALID_USER: &str = "dino";
/// Valid demo password
pub const VALID_PASSWORD: &str = "choochoo";

/// Sales tax applied to the cart subtotal, in percent
const TAX_RATE_PERCENT: u64 = 5;

/// Message shown on an emptied cart
pub const EMPTY_CART_MESSAGE: &str = "How about adding some products in your cart?";

// Selector vocabulary of the storefront markup. The page objects register
// these same strings; the runtime resolves them against its state.
mod selectors {
    pub const SEARCH_BAR: &str = "input-search";
    pub const SEARCH_BUTTON: &str = ".btn.btn-light.btn-sm";
    pub const CARD_LINK: &str = ".card-link";
    pub const PRICE_SPAN: &str = "//span[@style='font-weight: bold; font-size: 16px;']";
    pub const SORT_SELECT: &str = ".sort-products-select.form-control.form-control-sm";
    pub const LOGIN_ICON: &str = ".svg-inline--fa.fa-sign-in-alt.fa-w-16";
    pub const SIGN_OUT_ICON: &str = ".svg-inline--fa.fa-sign-out-alt.fa-w-16";
    pub const USER_NAME: &str = "user-name";
    pub const PASSWORD: &str = "password";
    pub const LOGIN_SUBMIT: &str = ".btn.btn-primary";
    pub const MODAL_TITLE: &str = ".modal-title.h4";
    pub const HELP_MODAL_TITLE: &str = ".modal-title";
    pub const ERROR: &str = ".error";
    pub const ADD_TO_CART_ICON: &str = ".svg-inline--fa.fa-cart-plus.fa-w-18.fa-3x";
    pub const CART_NAV_ICON: &str = ".svg-inline--fa.fa-shopping-cart.fa-w-18";
    pub const HEART_ICON: &str = ".svg-inline--fa.fa-heart.fa-w-16.fa-3x";
    pub const WISHLIST_NAV_ICON: &str = ".svg-inline--fa.fa-heart.fa-w-16";
    pub const BROKEN_HEART_ICON: &str = ".svg-inline--fa.fa-heart-broken.fa-w-16.fa-2x";
    pub const BADGE: &str = ".fa-layers-counter.shopping_cart_badge";
    pub const BRAND_LOGO: &str = ".svg-inline--fa.fa-shopping-bag.fa-w-14.fa-3x.brand-logo";
    pub const HELP_ICON: &str = ".svg-inline--fa.fa-question.fa-w-12";
    pub const RESET_ICON: &str = ".svg-inline--fa.fa-undo.fa-w-16";
    pub const HEADING: &str = ".text-muted";
    pub const PRIMARY_ACTION: &str = ".btn.btn-success";
    pub const SECONDARY_ACTION: &str = ".btn.btn-danger";
    pub const TRASH_ICON: &str = ".svg-inline--fa.fa-trash.fa-w-14";
    pub const PLUS_ICON: &str = ".svg-inline--fa.fa-plus-circle.fa-w-16";
    pub const AMOUNT_CELL: &str = "//td[@class='amount']";
    pub const EMPTY_CART: &str = ".text-center.container";
    pub const ORDER_THANKS: &str = ".text-center";
    pub const FIRST_NAME: &str = "first-name";
    pub const LAST_NAME: &str = "last-name";
    pub const ADDRESS: &str = "address";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Products,
    ProductDetail(usize),
    Cart,
    Wishlist,
    CheckoutInfo,
    OrderSummary,
    OrderComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    None,
    Login,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SortMode {
    #[default]
    Catalog,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

#[derive(Debug, Clone, Copy)]
struct CartLine {
    product: usize,
    qty: u32,
}

#[derive(Debug, Default, Clone)]
struct CheckoutForm {
    first_name: String,
    last_name: String,
    address: String,
}

#[derive(Debug)]
struct State {
    screen: Screen,
    modal: Modal,
    cart: Vec<CartLine>,
    wishlist: Vec<usize>,
    session: Option<String>,
    search_input: String,
    search_filter: String,
    sort: SortMode,
    login_user: String,
    login_password: String,
    login_error: Option<String>,
    form: CheckoutForm,
    form_errors: Vec<String>,
    generation: u64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            screen: Screen::Products,
            modal: Modal::None,
            cart: Vec::new(),
            wishlist: Vec::new(),
            session: None,
            search_input: String::new(),
            search_filter: String::new(),
            sort: SortMode::Catalog,
            login_user: String::new(),
            login_password: String::new(),
            login_error: None,
            form: CheckoutForm::default(),
            form_errors: Vec::new(),
            generation: 0,
        }
    }
}

/// The simulated storefront session.
///
/// One instance is one browser session: construct a fresh one per
/// scenario. Interior mutability keeps the [`Driver`] methods `&self`,
/// so several page objects can borrow the same session, as they would
/// share one live driver handle.
#[derive(Debug, Default)]
pub struct Storefront {
    state: RefCell<State>,
}

fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

impl Storefront {
    /// Open a fresh session on the landing (Products) screen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog price of a product in cents; panics on unknown names
    /// (fixture defect, fail fast)
    #[must_use]
    pub fn price_cents(name: &str) -> u32 {
        CATALOG
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.cents)
            .unwrap_or_else(|| panic!("unknown catalog product: {name}"))
    }

    fn product_index(name: &str) -> Option<usize> {
        CATALOG.iter().position(|p| p.name == name)
    }

    /// Product indices visible on the Products grid under the current
    /// search filter and sort mode
    fn visible_products(state: &State) -> Vec<usize> {
        let mut visible: Vec<usize> = (0..CATALOG.len())
            .filter(|&i| state.search_filter.is_empty() || CATALOG[i].name.contains(&state.search_filter))
            .collect();
        match state.sort {
            SortMode::Catalog => {}
            SortMode::NameAsc => visible.sort_by_key(|&i| CATALOG[i].name),
            SortMode::NameDesc => {
                visible.sort_by_key(|&i| CATALOG[i].name);
                visible.reverse();
            }
            SortMode::PriceAsc => visible.sort_by_key(|&i| (CATALOG[i].cents, CATALOG[i].name)),
            SortMode::PriceDesc => {
                visible.sort_by_key(|&i| (CATALOG[i].cents, CATALOG[i].name));
                visible.reverse();
            }
        }
        visible
    }

    fn subtotal_cents(state: &State) -> u64 {
        state
            .cart
            .iter()
            .map(|line| u64::from(CATALOG[line.product].cents) * u64::from(line.qty))
            .sum()
    }

    fn tax_cents(state: &State) -> u64 {
        Self::subtotal_cents(state) * TAX_RATE_PERCENT / 100
    }

    /// Whether a product link is attached to the current screen
    fn product_link_visible(state: &State, product: usize) -> bool {
        match state.screen {
            Screen::Products => Self::visible_products(state).contains(&product),
            Screen::ProductDetail(current) => current == product,
            Screen::Cart => state.cart.iter().any(|line| line.product == product),
            Screen::Wishlist => state.wishlist.contains(&product),
            _ => false,
        }
    }

    fn heading(state: &State) -> Option<&'static str> {
        match (state.screen, state.modal) {
            (_, Modal::Login | Modal::Help) => None,
            (Screen::Products, _) => Some("Products"),
            (Screen::Cart, _) => Some("Your cart"),
            (Screen::Wishlist, _) => Some("Wishlist"),
            (Screen::CheckoutInfo, _) => Some("Your information"),
            (Screen::OrderSummary, _) => Some("Order summary"),
            (Screen::OrderComplete, _) => Some("Order complete"),
            (Screen::ProductDetail(_), _) => None,
        }
    }

    fn element(state: &State, id: String, tag: &str, text: String) -> ElementHandle {
        ElementHandle {
            element_id: id,
            tag: tag.to_string(),
            text,
            displayed: true,
            generation: state.generation,
        }
    }

    fn resolve_in(state: &State, locator: &Locator) -> Vec<ElementHandle> {
        let one = |id: &str, tag: &str, text: &str| {
            vec![Self::element(state, id.to_string(), tag, text.to_string())]
        };

        match (locator.strategy(), locator.value()) {
            (Strategy::Id, selectors::SEARCH_BAR) if state.screen == Screen::Products => {
                one("search-bar", "input", &state.search_input)
            }
            (Strategy::Id, selectors::USER_NAME) if state.modal == Modal::Login => {
                one("user-name", "input", &state.login_user)
            }
            (Strategy::Id, selectors::PASSWORD) if state.modal == Modal::Login => {
                one("password", "input", &state.login_password)
            }
            (Strategy::Id, selectors::FIRST_NAME) if state.screen == Screen::CheckoutInfo => {
                one("first-name", "input", &state.form.first_name)
            }
            (Strategy::Id, selectors::LAST_NAME) if state.screen == Screen::CheckoutInfo => {
                one("last-name", "input", &state.form.last_name)
            }
            (Strategy::Id, selectors::ADDRESS) if state.screen == Screen::CheckoutInfo => {
                one("address", "input", &state.form.address)
            }
            (Strategy::LinkText, name) => {
                if state.session.as_deref() == Some(name) {
                    return one("session-link", "a", name);
                }
                match Self::product_index(name) {
                    Some(product) if Self::product_link_visible(state, product) => {
                        one(&format!("product-link-{product}"), "a", name)
                    }
                    _ => vec![],
                }
            }
            (Strategy::Css, selectors::SEARCH_BUTTON) if state.screen == Screen::Products => {
                one("search-button", "button", "Search")
            }
            (Strategy::Css, selectors::CARD_LINK) if state.screen == Screen::Products => {
                Self::visible_products(state)
                    .into_iter()
                    .map(|i| {
                        Self::element(
                            state,
                            format!("card-link-{i}"),
                            "a",
                            CATALOG[i].name.to_string(),
                        )
                    })
                    .collect()
            }
            (Strategy::XPath, selectors::PRICE_SPAN) if state.screen == Screen::Products => {
                Self::visible_products(state)
                    .into_iter()
                    .map(|i| {
                        Self::element(
                            state,
                            format!("price-span-{i}"),
                            "span",
                            format_cents(u64::from(CATALOG[i].cents)),
                        )
                    })
                    .collect()
            }
            (Strategy::Css, selectors::SORT_SELECT) if state.screen == Screen::Products => {
                one("sort-select", "select", "")
            }
            (Strategy::Css, selectors::LOGIN_ICON) if state.session.is_none() => {
                one("login-icon", "svg", "")
            }
            (Strategy::Css, selectors::SIGN_OUT_ICON) if state.session.is_some() => {
                one("sign-out-icon", "svg", "")
            }
            (Strategy::Css, selectors::LOGIN_SUBMIT) if state.modal == Modal::Login => {
                one("login-submit", "button", "Login")
            }
            (Strategy::Css, selectors::MODAL_TITLE | selectors::HELP_MODAL_TITLE) => {
                match state.modal {
                    Modal::Login => one("modal-title", "div", "Login"),
                    Modal::Help => one("modal-title", "div", "Help"),
                    Modal::None => vec![],
                }
            }
            (Strategy::Css, selectors::ERROR) => {
                if state.modal == Modal::Login {
                    state
                        .login_error
                        .as_deref()
                        .map(|message| one("login-error", "span", message))
                        .unwrap_or_default()
                } else if state.screen == Screen::CheckoutInfo {
                    state
                        .form_errors
                        .iter()
                        .enumerate()
                        .map(|(i, message)| {
                            Self::element(state, format!("form-error-{i}"), "span", message.clone())
                        })
                        .collect()
                } else {
                    vec![]
                }
            }
            (Strategy::Css, selectors::ADD_TO_CART_ICON) => match state.screen {
                Screen::ProductDetail(_) => one("add-to-cart", "svg", ""),
                _ => vec![],
            },
            (Strategy::Css, selectors::HEART_ICON) => match state.screen {
                Screen::ProductDetail(_) => one("heart", "svg", ""),
                _ => vec![],
            },
            (Strategy::Css, selectors::CART_NAV_ICON) => one("cart-nav", "svg", ""),
            (Strategy::Css, selectors::WISHLIST_NAV_ICON) => one("wishlist-nav", "svg", ""),
            (Strategy::Css, selectors::BROKEN_HEART_ICON)
                if state.screen == Screen::Wishlist && !state.wishlist.is_empty() =>
            {
                one("broken-heart", "svg", "")
            }
            (Strategy::Css, selectors::BADGE) if !state.wishlist.is_empty() => {
                one("badge", "span", &state.wishlist.len().to_string())
            }
            (Strategy::Css, selectors::BRAND_LOGO) => one("brand-logo", "svg", ""),
            (Strategy::Css, selectors::HELP_ICON) => one("help-icon", "svg", ""),
            (Strategy::Css, selectors::RESET_ICON) => one("reset-icon", "svg", ""),
            (Strategy::Css, selectors::HEADING) => Self::heading(state)
                .map(|text| one("heading", "h4", text))
                .unwrap_or_default(),
            (Strategy::Css, selectors::PRIMARY_ACTION) => match state.screen {
                Screen::Cart if !state.cart.is_empty() => one("checkout-button", "button", "Checkout"),
                Screen::CheckoutInfo => one("continue-button", "button", "Continue checkout"),
                Screen::OrderSummary => {
                    one("complete-order-button", "button", "Complete your order")
                }
                _ => vec![],
            },
            (Strategy::Css, selectors::SECONDARY_ACTION) => match state.screen {
                Screen::Cart => one("continue-shopping-button", "button", "Continue shopping"),
                Screen::CheckoutInfo => one("cancel-button", "button", "Cancel"),
                _ => vec![],
            },
            (Strategy::Css, selectors::TRASH_ICON)
                if state.screen == Screen::Cart && !state.cart.is_empty() =>
            {
                one("trash", "svg", "")
            }
            (Strategy::Css, selectors::PLUS_ICON)
                if state.screen == Screen::Cart && !state.cart.is_empty() =>
            {
                one("plus", "svg", "")
            }
            (Strategy::XPath, selectors::AMOUNT_CELL)
                if state.screen == Screen::Cart && !state.cart.is_empty() =>
            {
                let subtotal = Self::subtotal_cents(state);
                let tax = Self::tax_cents(state);
                [subtotal, tax, subtotal + tax]
                    .into_iter()
                    .enumerate()
                    .map(|(i, cents)| {
                        Self::element(state, format!("amount-{i}"), "td", format_cents(cents))
                    })
                    .collect()
            }
            (Strategy::Css, selectors::EMPTY_CART)
                if state.screen == Screen::Cart && state.cart.is_empty() =>
            {
                one("empty-cart", "div", EMPTY_CART_MESSAGE)
            }
            (Strategy::Css, selectors::ORDER_THANKS) if state.screen == Screen::OrderComplete => {
                one("order-thanks", "h5", "Thank you for your order!")
            }
            _ => vec![],
        }
    }

    fn apply_click(state: &mut State, locator: &Locator) {
        match (locator.strategy(), locator.value()) {
            (Strategy::LinkText, name) => {
                if let Some(product) = Self::product_index(name) {
                    state.screen = Screen::ProductDetail(product);
                    state.modal = Modal::None;
                }
            }
            (Strategy::Css, selectors::SEARCH_BUTTON) => {
                state.search_filter = state.search_input.clone();
            }
            (Strategy::Css, selectors::LOGIN_ICON) => {
                state.modal = Modal::Login;
                state.login_user.clear();
                state.login_password.clear();
                state.login_error = None;
            }
            (Strategy::Css, selectors::LOGIN_SUBMIT) => {
                if state.login_user.is_empty() {
                    state.login_error = Some("Please fill in the username!".to_string());
                } else if state.login_password.is_empty() {
                    state.login_error = Some("Please fill in the password!".to_string());
                } else if state.login_user == VALID_USER && state.login_password == VALID_PASSWORD {
                    state.session = Some(state.login_user.clone());
                    state.modal = Modal::None;
                    state.login_error = None;
                } else {
                    state.login_error = Some("Incorrect username or password!".to_string());
                }
            }
            (Strategy::Css, selectors::SIGN_OUT_ICON) => {
                state.session = None;
            }
            (Strategy::Css, selectors::ADD_TO_CART_ICON) => {
                if let Screen::ProductDetail(product) = state.screen {
                    if let Some(line) = state.cart.iter_mut().find(|line| line.product == product) {
                        line.qty += 1;
                    } else {
                        state.cart.push(CartLine { product, qty: 1 });
                    }
                }
            }
            (Strategy::Css, selectors::HEART_ICON) => {
                if let Screen::ProductDetail(product) = state.screen {
                    if !state.wishlist.contains(&product) {
                        state.wishlist.push(product);
                    }
                }
            }
            (Strategy::Css, selectors::CART_NAV_ICON) => {
                state.screen = Screen::Cart;
                state.modal = Modal::None;
            }
            (Strategy::Css, selectors::WISHLIST_NAV_ICON | selectors::BADGE) => {
                state.screen = Screen::Wishlist;
                state.modal = Modal::None;
            }
            (Strategy::Css, selectors::BROKEN_HEART_ICON) => {
                if !state.wishlist.is_empty() {
                    let _ = state.wishlist.remove(0);
                }
            }
            (Strategy::Css, selectors::BRAND_LOGO) => {
                state.screen = Screen::Products;
                state.modal = Modal::None;
            }
            (Strategy::Css, selectors::HELP_ICON) => {
                state.modal = Modal::Help;
            }
            (Strategy::Css, selectors::RESET_ICON) => {
                // Generation stays monotonic so pre-reset handles remain stale
                let generation = state.generation;
                *state = State::default();
                state.generation = generation;
            }
            (Strategy::Css, selectors::PRIMARY_ACTION) => match state.screen {
                Screen::Cart => {
                    state.screen = Screen::CheckoutInfo;
                    state.form = CheckoutForm::default();
                    state.form_errors.clear();
                }
                Screen::CheckoutInfo => {
                    state.form_errors.clear();
                    if state.form.first_name.is_empty() {
                        state.form_errors.push("First Name is required".to_string());
                    }
                    if state.form.last_name.is_empty() {
                        state.form_errors.push("Last Name is required".to_string());
                    }
                    if state.form.address.is_empty() {
                        state.form_errors.push("Address is required".to_string());
                    }
                    if state.form_errors.is_empty() {
                        state.screen = Screen::OrderSummary;
                    }
                }
                Screen::OrderSummary => {
                    state.screen = Screen::OrderComplete;
                    state.cart.clear();
                }
                _ => {}
            },
            (Strategy::Css, selectors::SECONDARY_ACTION) => match state.screen {
                Screen::Cart => state.screen = Screen::Products,
                Screen::CheckoutInfo => state.screen = Screen::Cart,
                _ => {}
            },
            (Strategy::Css, selectors::TRASH_ICON) => {
                if !state.cart.is_empty() {
                    let _ = state.cart.remove(0);
                }
            }
            (Strategy::Css, selectors::PLUS_ICON) => {
                if let Some(line) = state.cart.first_mut() {
                    line.qty += 1;
                }
            }
            _ => {}
        }
    }
}

impl Driver for Storefront {
    fn resolve(&self, locator: &Locator) -> VitrinaResult<Vec<ElementHandle>> {
        Ok(Self::resolve_in(&self.state.borrow(), locator))
    }

    fn click(&self, locator: &Locator) -> VitrinaResult<()> {
        // Presence check first: clicking a detached element is NotFound.
        let _ = self.find(locator)?;
        let mut state = self.state.borrow_mut();
        Self::apply_click(&mut state, locator);
        state.generation += 1;
        Ok(())
    }

    fn send_keys(&self, locator: &Locator, text: &str) -> VitrinaResult<()> {
        let _ = self.find(locator)?;
        let mut state = self.state.borrow_mut();
        match (locator.strategy(), locator.value()) {
            (Strategy::Id, selectors::SEARCH_BAR) => state.search_input.push_str(text),
            (Strategy::Id, selectors::USER_NAME) => state.login_user.push_str(text),
            (Strategy::Id, selectors::PASSWORD) => state.login_password.push_str(text),
            (Strategy::Id, selectors::FIRST_NAME) => state.form.first_name.push_str(text),
            (Strategy::Id, selectors::LAST_NAME) => state.form.last_name.push_str(text),
            (Strategy::Id, selectors::ADDRESS) => state.form.address.push_str(text),
            _ => {}
        }
        state.generation += 1;
        Ok(())
    }

    fn select_option(&self, locator: &Locator, visible_text: &str) -> VitrinaResult<()> {
        let _ = self.find(locator)?;
        let sort = match visible_text {
            "Sort by name (A to Z)" => SortMode::NameAsc,
            "Sort by name (Z to A)" => SortMode::NameDesc,
            "Sort by price (low to high)" => SortMode::PriceAsc,
            "Sort by price (high to low)" => SortMode::PriceDesc,
            other => {
                return Err(VitrinaError::NavigationError {
                    message: format!("no such sort option: {other}"),
                })
            }
        };
        let mut state = self.state.borrow_mut();
        state.sort = sort;
        state.generation += 1;
        Ok(())
    }

    fn handle_text(&self, handle: &ElementHandle) -> VitrinaResult<String> {
        let state = self.state.borrow();
        if handle.generation != state.generation {
            return Err(VitrinaError::StaleElement {
                locator: handle.element_id.clone(),
            });
        }
        Ok(handle.text.clone())
    }

    fn handle_displayed(&self, handle: &ElementHandle) -> VitrinaResult<bool> {
        let state = self.state.borrow();
        if handle.generation != state.generation {
            return Err(VitrinaError::StaleElement {
                locator: handle.element_id.clone(),
            });
        }
        Ok(handle.displayed)
    }
}
