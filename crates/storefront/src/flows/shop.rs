//! Browsing, cart, membership, and checkout.

use tech_house_core::{MembershipTier, ProductId};

use super::{Continuation, Flow, NOTICE_PAUSE, RECEIPT_PAUSE, REDRAW_PAUSE, Screen, Transition};
use crate::services::cart::CartError;
use crate::terminal::Style;

impl Flow<'_> {
    pub(super) fn main_menu(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("MAIN MENU");
        self.out.blank();

        let (logged_in, is_admin) = match self.state.current_account() {
            Some(account) => {
                self.out.print(format!("Logged in: {}", account.username));
                if let Some(tier) = account.membership {
                    self.out.print(format!("Membership: {tier}"));
                }
                (true, account.is_admin())
            }
            None => {
                self.out.print("Guest Mode");
                (false, false)
            }
        };
        self.out.print(format!("Cart: {} items", self.state.session().cart_len()));
        self.out.blank();

        self.out.print("1. View all products");
        self.out.print("2. Search products");
        self.out.print("3. View cart");
        self.out.print("4. Add to cart");
        if logged_in {
            self.out.print("5. Set membership");
            self.out.print("6. Checkout");
        }
        self.out.print("7. Membership packages");
        if logged_in {
            self.out.print("8. Check admin status");
        }
        if is_admin {
            self.out.print("9. [ADMIN] Add product");
            self.out.print("10. [ADMIN] Make user admin");
        }
        if logged_in {
            self.out.print("99. Logout");
        }
        self.out.print("0. Exit");
        self.out.blank();

        Transition::ask("Select: ", Continuation::MainChoice)
    }

    pub(super) fn main_choice(&mut self, input: &str) -> Transition {
        let logged_in = self.state.session().is_authenticated();
        let is_admin = self
            .state
            .current_account()
            .is_some_and(|account| account.is_admin());

        match input.trim() {
            "1" => self.list_products(),
            "2" => {
                self.out.blank();
                Transition::ask("Enter search term: ", Continuation::SearchKeyword)
            }
            "3" => self.view_cart(),
            "4" => self.choose_product(),
            "5" if logged_in => self.membership_menu(),
            "6" if logged_in => self.checkout(),
            "7" => self.membership_packages(),
            "8" if logged_in => self.admin_status(),
            "9" if is_admin => self.add_product(),
            "10" if is_admin => self.promote_menu(),
            "99" if logged_in => self.logout(),
            "0" => self.farewell(),
            _ => {
                self.notice("Invalid choice or feature not available", Style::Error);
                Transition::After(NOTICE_PAUSE, Screen::MainMenu)
            }
        }
    }

    fn list_products(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("AVAILABLE PRODUCTS");
        self.out.blank();

        for (category, products) in self.state.catalog().available_by_category() {
            self.out.blank();
            self.out.info(format!("{category}:"));
            for product in products {
                self.out.print(format!("  {}", product.listing()));
            }
        }

        self.out.blank();
        Transition::After(REDRAW_PAUSE, Screen::MainMenu)
    }

    pub(super) fn search(&mut self, keyword: &str) -> Transition {
        self.out.blank();
        self.out.info("Search Results:");
        self.out.thin_rule();

        let results = self.state.catalog().search(keyword.trim());
        if results.is_empty() {
            self.out.error("No products found");
        } else {
            for product in results {
                self.out.print(product.listing());
            }
        }

        self.out.blank();
        Transition::After(REDRAW_PAUSE, Screen::MainMenu)
    }

    fn choose_product(&mut self) -> Transition {
        self.out.blank();
        self.out.print("Available products:");
        for product in self.state.catalog().available() {
            self.out.print(product.listing());
        }
        self.out.blank();
        Transition::ask(
            "Enter product ID (0 to cancel): ",
            Continuation::AddProductId,
        )
    }

    pub(super) fn add_to_cart(&mut self, input: &str) -> Transition {
        let input = input.trim();
        if input == "0" {
            return Transition::After(NOTICE_PAUSE, Screen::MainMenu);
        }

        let added = input
            .parse::<ProductId>()
            .ok()
            .and_then(|id| self.state.cart().add(id).ok().map(|p| p.name.clone()));
        match added {
            Some(name) => self.notice(&format!("{name} added to cart!"), Style::Success),
            None => self.notice("Invalid product ID", Style::Error),
        }
        Transition::After(NOTICE_PAUSE, Screen::MainMenu)
    }

    fn view_cart(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("SHOPPING CART");
        self.out.blank();

        if self.state.session().cart_len() == 0 {
            self.out.print("Your cart is empty");
        } else {
            let quoted = self.state.cart().quote();
            match quoted {
                Ok(quote) => {
                    for (index, line) in quote.lines.iter().enumerate() {
                        self.out.print(format!("{}. {} - {}", index + 1, line.name, line.price));
                    }
                    self.out.blank();
                    if quote.totals.free_delivery() {
                        self.out.print("Delivery: FREE (Gold Membership)");
                    } else {
                        self.out.print(format!("Delivery: {}", quote.totals.delivery));
                    }
                    self.out.thin_rule();
                    self.out.print(format!("TOTAL: {}", quote.totals.total));
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to price cart");
                    self.out.error("Cart could not be priced");
                }
            }
        }

        self.out.blank();
        Transition::After(REDRAW_PAUSE, Screen::MainMenu)
    }

    fn membership_menu(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("SELECT MEMBERSHIP");
        self.out.blank();
        self.out.print("1. Bronze (5% discount)");
        self.out.print("2. Silver (10% discount)");
        self.out.print("3. Gold (15% discount + Free delivery)");
        self.out.print("0. Cancel");
        self.out.blank();
        Transition::ask("Select: ", Continuation::MembershipChoice)
    }

    pub(super) fn membership_choice(&mut self, input: &str) -> Transition {
        // Anything other than a listed tier is ignored, including cancel.
        if let Some(tier) = MembershipTier::from_menu_choice(input.trim()) {
            let Some(username) = self.state.session().current_username().map(str::to_owned)
            else {
                return Transition::Show(Screen::AuthMenu);
            };
            let outcome = self.state.auth().set_membership(&username, tier);
            match outcome {
                Ok(()) => self.notice(&format!("Membership set to {tier}!"), Style::Success),
                Err(err) => {
                    tracing::error!(error = %err, "failed to set membership");
                    self.notice("Membership could not be changed", Style::Error);
                }
            }
        }
        Transition::After(NOTICE_PAUSE, Screen::MainMenu)
    }

    fn membership_packages(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("MEMBERSHIP PACKAGES");
        for tier in MembershipTier::ALL {
            self.out.blank();
            self.out.info(tier.to_string().to_uppercase());
            self.out.print(format!("  Discount: {}%", tier.discount_percent()));
            self.out.print(format!(
                "  Free Delivery: {}",
                if tier.free_delivery() { "Yes" } else { "No" }
            ));
        }
        self.out.blank();
        Transition::After(REDRAW_PAUSE, Screen::MainMenu)
    }

    fn checkout(&mut self) -> Transition {
        if self.state.session().cart_len() == 0 {
            self.notice("Your cart is empty", Style::Error);
            return Transition::After(NOTICE_PAUSE, Screen::MainMenu);
        }

        let quoted = self.state.cart().quote();
        let quote = match quoted {
            Ok(quote) => quote,
            Err(err) => {
                tracing::error!(error = %err, "failed to price cart");
                self.notice("Cart could not be priced", Style::Error);
                return Transition::After(NOTICE_PAUSE, Screen::MainMenu);
            }
        };

        self.out.blank();
        self.out.banner("CHECKOUT");
        self.out.blank();
        self.out.print(format!("Total Amount: {}", quote.totals.total));
        self.out.blank();
        Transition::ask("Confirm checkout? (yes/no): ", Continuation::CheckoutConfirm)
    }

    pub(super) fn confirm_checkout(&mut self, input: &str) -> Transition {
        if !input.eq_ignore_ascii_case("yes") {
            self.notice("Order cancelled", Style::Info);
            return Transition::After(RECEIPT_PAUSE, Screen::MainMenu);
        }

        let outcome = self.state.cart().checkout();
        match outcome {
            Ok(receipt) => {
                self.out.blank();
                self.out.success("ORDER COMPLETED SUCCESSFULLY!");
                self.out.info(format!("Total purchases: {}", receipt.total_purchases));
                self.out.blank();
            }
            Err(CartError::EmptyCart) => self.notice("Your cart is empty", Style::Error),
            Err(CartError::LoginRequired) => self.notice("Please login first", Style::Error),
            Err(err) => {
                tracing::error!(error = %err, "checkout failed");
                self.notice("Checkout failed", Style::Error);
            }
        }
        Transition::After(RECEIPT_PAUSE, Screen::MainMenu)
    }

    fn logout(&mut self) -> Transition {
        self.state.session_mut().sign_out();
        tracing::info!("logged out");
        self.notice("Logged out successfully", Style::Success);
        Transition::After(NOTICE_PAUSE, Screen::AuthMenu)
    }
}
