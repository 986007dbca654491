//! Login modal and session state.

use crate::driver::Driver;
use crate::locator::{Locator, LocatorRegistry};
use crate::result::VitrinaResult;

use super::is_present;

/// The login modal plus the navbar session controls around it.
pub struct LoginPage<'a, D: Driver> {
    driver: &'a D,
    locators: LocatorRegistry,
}

impl<'a, D: Driver> LoginPage<'a, D> {
    /// Bind the page to a driver session
    #[must_use]
    pub fn new(driver: &'a D) -> Self {
        let locators = LocatorRegistry::new()
            .with("login_icon", Locator::css(".svg-inline--fa.fa-sign-in-alt.fa-w-16"))
            .with("modal_title", Locator::css(".modal-title.h4"))
            .with("username", Locator::id("user-name"))
            .with("password", Locator::id("password"))
            .with("login_button", Locator::css(".btn.btn-primary"))
            .with("error", Locator::css(".error"))
            .with(
                "sign_out_icon",
                Locator::css(".svg-inline--fa.fa-sign-out-alt.fa-w-16"),
            )
            .with("reset_icon", Locator::css(".svg-inline--fa.fa-undo.fa-w-16"));
        Self { driver, locators }
    }

    /// Open the login modal from the navbar
    pub fn open(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("login_icon"))
    }

    /// Title of the open modal
    pub fn modal_title(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("modal_title"))
    }

    /// Type into the username field
    pub fn set_username(&self, username: &str) -> VitrinaResult<()> {
        self.driver
            .send_keys(self.locators.locator("username"), username)
    }

    /// Type into the password field
    pub fn set_password(&self, password: &str) -> VitrinaResult<()> {
        self.driver
            .send_keys(self.locators.locator("password"), password)
    }

    /// Submit the login form
    pub fn submit(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("login_button"))
    }

    /// Validation message shown in the modal
    pub fn error_message(&self) -> VitrinaResult<String> {
        self.driver.text(self.locators.locator("error"))
    }

    /// Whether the navbar shows the given user as signed in
    pub fn logged_in_as(&self, username: &str) -> VitrinaResult<bool> {
        is_present(self.driver, &Locator::link_text(username))
    }

    /// Sign the current user out
    pub fn sign_out(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("sign_out_icon"))
    }

    /// Reset the application, which also drops the session
    pub fn reset(&self) -> VitrinaResult<()> {
        self.driver.click(self.locators.locator("reset_icon"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Storefront, VALID_PASSWORD, VALID_USER};

    #[test]
    fn test_modal_title_reads_login() {
        let shop = Storefront::new();
        let login = LoginPage::new(&shop);
        login.open().unwrap();
        assert_eq!(login.modal_title().unwrap(), "Login");
    }

    #[test]
    fn test_successful_login_and_sign_out() {
        let shop = Storefront::new();
        let login = LoginPage::new(&shop);
        login.open().unwrap();
        login.set_username(VALID_USER).unwrap();
        login.set_password(VALID_PASSWORD).unwrap();
        login.submit().unwrap();
        assert!(login.logged_in_as(VALID_USER).unwrap());

        login.sign_out().unwrap();
        assert!(!login.logged_in_as(VALID_USER).unwrap());
    }

    #[test]
    fn test_missing_username_message() {
        let shop = Storefront::new();
        let login = LoginPage::new(&shop);
        login.open().unwrap();
        login.submit().unwrap();
        assert_eq!(login.error_message().unwrap(), "Please fill in the username!");
    }
}
