//! Admin status, product creation, and customer promotion.

use tech_house_core::Price;

use super::{Continuation, Flow, NOTICE_PAUSE, RECEIPT_PAUSE, Screen, Transition};
use crate::services::auth::{AdminEligibility, AuthError, PROMOTION_PURCHASES};
use crate::terminal::Style;

impl Flow<'_> {
    pub(super) fn admin_status(&mut self) -> Transition {
        let Some(account) = self.state.current_account() else {
            return Transition::Show(Screen::MainMenu);
        };

        self.out.blank();
        self.out.banner("ADMIN STATUS");
        self.out.blank();

        if account.is_admin() {
            self.out.success("You are already an admin!");
        } else {
            self.out.print(format!("Role: {}", account.role));
            self.out.print(format!(
                "Purchases: {}/{PROMOTION_PURCHASES}",
                account.total_purchases
            ));
            self.out.blank();

            let username = account.username.clone();
            match self.state.auth().admin_eligibility(&username) {
                Ok(AdminEligibility::Eligible) => {
                    self.out.success("Eligible for admin promotion");
                    self.out.info("Ask current admin to use option 10!");
                }
                Ok(AdminEligibility::NeedsPurchases(missing)) => {
                    self.out.info(format!("Need {missing} more purchases to be eligible"));
                }
                Ok(AdminEligibility::AlreadyAdmin) => {
                    self.out.success("You are already an admin!");
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to read admin eligibility");
                    self.out.error("Admin status unavailable");
                }
            }
        }

        self.out.blank();
        Transition::After(NOTICE_PAUSE, Screen::MainMenu)
    }

    // =========================================================================
    // Add Product
    // =========================================================================

    pub(super) fn add_product(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("[ADMIN] ADD PRODUCT");
        self.out.blank();
        Transition::ask("Name: ", Continuation::NewProductName)
    }

    pub(super) fn new_product_name(input: &str) -> Transition {
        Transition::ask(
            "Price: ",
            Continuation::NewProductPrice {
                name: input.trim().to_owned(),
            },
        )
    }

    pub(super) fn new_product_price(&mut self, name: String, input: &str) -> Transition {
        let currency = self.state.config().currency;
        let price = match Price::parse_units(input.trim(), currency) {
            Ok(price) if !name.is_empty() => price,
            _ => {
                self.notice("Invalid input", Style::Error);
                return Transition::After(NOTICE_PAUSE, Screen::MainMenu);
            }
        };

        self.out.blank();
        for (index, category) in self.state.catalog().categories().iter().enumerate() {
            self.out.print(format!("{}. {category}", index + 1));
        }
        self.out.blank();
        Transition::ask(
            "Select category: ",
            Continuation::NewProductCategory { name, price },
        )
    }

    pub(super) fn new_product_category(
        &mut self,
        name: &str,
        price: Price,
        input: &str,
    ) -> Transition {
        let category = input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| {
                self.state
                    .catalog()
                    .categories()
                    .get(index)
                    .map(|category| (*category).to_owned())
            });

        // Out-of-range or non-numeric choices drop the product without a message.
        let Some(category) = category else {
            return Transition::Show(Screen::MainMenu);
        };

        let added = self.state.catalog_mut().add(name, price, &category);
        match added {
            Ok(id) => {
                tracing::info!(product_id = %id, %category, "product added");
                self.notice(&format!("Added with ID: {id}"), Style::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "product rejected");
                self.notice("Invalid input", Style::Error);
            }
        }
        Transition::After(RECEIPT_PAUSE, Screen::MainMenu)
    }

    // =========================================================================
    // Promote User
    // =========================================================================

    pub(super) fn promote_menu(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("[ADMIN] MAKE USER ADMIN");
        self.out.blank();
        self.out.print("Users:");

        let auth = self.state.auth();
        for account in auth.promotion_candidates() {
            self.out.print(format!(
                "- {} (Role: {}, Purchases: {})",
                account.username, account.role, account.total_purchases
            ));
        }

        self.out.blank();
        Transition::ask("Username: ", Continuation::PromoteUsername)
    }

    pub(super) fn promote_username(input: &str) -> Transition {
        Transition::ask(
            "Admin password: ",
            Continuation::PromoteAdminPassword {
                username: input.trim().to_owned(),
            },
        )
    }

    pub(super) fn promote_admin_password(&mut self, username: &str, password: &str) -> Transition {
        let outcome = self.state.auth().promote(username, password);
        match outcome {
            Ok(()) => self.notice(
                &format!("Successfully promoted {username} to admin"),
                Style::Success,
            ),
            Err(err) => {
                let message = match err {
                    AuthError::InvalidAdminPassword => "Invalid admin password".to_owned(),
                    AuthError::UserNotFound => "User not found".to_owned(),
                    AuthError::AlreadyAdmin => "User is already an admin".to_owned(),
                    AuthError::NotEnoughPurchases { required, actual } => format!(
                        "User needs at least {required} purchases (currently has {actual})"
                    ),
                    other => {
                        tracing::error!(error = %other, "promotion failed");
                        "Promotion failed".to_owned()
                    }
                };
                self.notice(&message, Style::Error);
            }
        }
        Transition::After(RECEIPT_PAUSE, Screen::MainMenu)
    }
}
