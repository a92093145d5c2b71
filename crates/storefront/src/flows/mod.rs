//! Menu flows driven by the prompt loop.
//!
//! Each flow is a set of steps over [`AppState`] that print to the
//! [`Transcript`] and finish with a [`Transition`]: ask the next question,
//! show a screen now, show a screen after a pause, or end the session.
//!
//! # Flows
//!
//! - [`auth`] - Login, registration, guest entry
//! - [`shop`] - Browsing, search, cart, membership, checkout, logout
//! - [`admin`] - Admin status, adding products, promoting customers

mod admin;
mod auth;
mod shop;

use std::time::Duration;

use tech_house_core::Price;

use crate::state::AppState;
use crate::terminal::{Style, Transcript};

/// Pause before redrawing a menu after a listing.
pub const REDRAW_PAUSE: Duration = Duration::from_millis(100);
/// Pause at startup and between the welcome banner and the first menu.
pub const STARTUP_PAUSE: Duration = Duration::from_millis(500);
/// Pause after a short notice.
pub const NOTICE_PAUSE: Duration = Duration::from_millis(1000);
/// Pause after an authentication outcome.
pub const AUTH_PAUSE: Duration = Duration::from_millis(1500);
/// Pause after an order or an admin action.
pub const RECEIPT_PAUSE: Duration = Duration::from_millis(2000);

/// Screens a transition can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome banner shown once per session.
    Welcome,
    /// Login / register / guest / exit.
    AuthMenu,
    /// Shopping menu.
    MainMenu,
}

/// What to do with the next submitted line.
///
/// Values captured by earlier steps (a username, a product name) travel
/// inside the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    AuthChoice,
    LoginUsername,
    LoginPassword { username: String },
    RegisterUsername,
    RegisterPassword { username: String },
    MainChoice,
    SearchKeyword,
    AddProductId,
    MembershipChoice,
    CheckoutConfirm,
    NewProductName,
    NewProductPrice { name: String },
    NewProductCategory { name: String, price: Price },
    PromoteUsername,
    PromoteAdminPassword { username: String },
}

/// A pending request for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Text shown before the cursor.
    pub text: &'static str,
    /// Step that receives the submitted line.
    pub next: Continuation,
}

/// Outcome of a flow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Suspend until the user submits a line.
    Ask(Prompt),
    /// Render a screen immediately.
    Show(Screen),
    /// Render a screen once the pause has elapsed.
    After(Duration, Screen),
    /// End the session.
    Finish,
}

impl Transition {
    const fn ask(text: &'static str, next: Continuation) -> Self {
        Self::Ask(Prompt { text, next })
    }
}

/// The flows, borrowing application state and the transcript for one step.
pub struct Flow<'a> {
    state: &'a mut AppState,
    out: &'a mut Transcript,
}

impl<'a> Flow<'a> {
    #[must_use]
    pub const fn new(state: &'a mut AppState, out: &'a mut Transcript) -> Self {
        Self { state, out }
    }

    /// Render a screen.
    pub fn show(&mut self, screen: Screen) -> Transition {
        match screen {
            Screen::Welcome => self.welcome(),
            Screen::AuthMenu => self.auth_menu(),
            Screen::MainMenu => self.main_menu(),
        }
    }

    /// Run the step waiting on `input`.
    pub fn resume(&mut self, next: Continuation, input: &str) -> Transition {
        match next {
            Continuation::AuthChoice => self.auth_choice(input),
            Continuation::LoginUsername => Self::login_username(input),
            Continuation::LoginPassword { username } => self.login_password(&username, input),
            Continuation::RegisterUsername => self.register_username(input),
            Continuation::RegisterPassword { username } => {
                self.register_password(&username, input)
            }
            Continuation::MainChoice => self.main_choice(input),
            Continuation::SearchKeyword => self.search(input),
            Continuation::AddProductId => self.add_to_cart(input),
            Continuation::MembershipChoice => self.membership_choice(input),
            Continuation::CheckoutConfirm => self.confirm_checkout(input),
            Continuation::NewProductName => Self::new_product_name(input),
            Continuation::NewProductPrice { name } => self.new_product_price(name, input),
            Continuation::NewProductCategory { name, price } => {
                self.new_product_category(&name, price, input)
            }
            Continuation::PromoteUsername => Self::promote_username(input),
            Continuation::PromoteAdminPassword { username } => {
                self.promote_admin_password(&username, input)
            }
        }
    }

    fn welcome(&mut self) -> Transition {
        self.out.banner("WELCOME TO TECH HOUSE - Home Appliance Store");
        self.out.blank();
        Transition::After(STARTUP_PAUSE, Screen::AuthMenu)
    }

    fn farewell(&mut self) -> Transition {
        self.out.blank();
        self.out.banner("THANK YOU FOR VISITING TECH HOUSE!");
        self.out.blank();
        self.out.info("Run tech-house again to start a new session");
        Transition::Finish
    }

    /// `text` framed by blank lines, the way every notice is printed.
    fn notice(&mut self, text: &str, style: Style) {
        self.out.blank();
        self.out.push(text, style);
        self.out.blank();
    }
}
