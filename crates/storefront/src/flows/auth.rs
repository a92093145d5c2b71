//! Login, registration, and guest entry.

use super::{AUTH_PAUSE, Continuation, Flow, NOTICE_PAUSE, Screen, Transition};
use crate::services::auth::AuthError;
use crate::terminal::Style;

impl Flow<'_> {
    pub(super) fn auth_menu(&mut self) -> Transition {
        self.out.banner("TECH HOUSE");
        self.out.blank();
        self.out.print("1. Login");
        self.out.print("2. Register");
        self.out.print("3. Continue as guest");
        self.out.print("0. Exit");
        self.out.blank();
        Transition::ask("Select: ", Continuation::AuthChoice)
    }

    pub(super) fn auth_choice(&mut self, input: &str) -> Transition {
        match input.trim() {
            "1" => {
                self.out.banner("LOGIN");
                self.out.blank();
                Transition::ask("Username: ", Continuation::LoginUsername)
            }
            "2" => {
                self.out.banner("REGISTER");
                self.out.blank();
                Transition::ask("Username: ", Continuation::RegisterUsername)
            }
            "3" => {
                tracing::info!("guest session started");
                Transition::Show(Screen::MainMenu)
            }
            "0" => self.farewell(),
            _ => {
                self.out.error("Invalid choice");
                self.out.blank();
                Transition::Show(Screen::AuthMenu)
            }
        }
    }

    pub(super) fn login_username(input: &str) -> Transition {
        Transition::ask(
            "Password: ",
            Continuation::LoginPassword {
                username: input.trim().to_owned(),
            },
        )
    }

    pub(super) fn login_password(&mut self, username: &str, password: &str) -> Transition {
        let outcome = self.state.auth().login(username, password);
        match outcome {
            Ok(username) => {
                self.state.session_mut().sign_in(username);
                self.notice("Login successful!", Style::Success);
                Transition::After(NOTICE_PAUSE, Screen::MainMenu)
            }
            Err(_) => {
                self.notice("Invalid username or password", Style::Error);
                Transition::After(AUTH_PAUSE, Screen::AuthMenu)
            }
        }
    }

    pub(super) fn register_username(&mut self, input: &str) -> Transition {
        let username = input.trim();
        if username.is_empty() {
            self.notice("Username and password cannot be empty", Style::Error);
            return Transition::After(AUTH_PAUSE, Screen::AuthMenu);
        }
        if self.state.auth().is_registered(username) {
            self.notice("Username already exists", Style::Error);
            return Transition::After(AUTH_PAUSE, Screen::AuthMenu);
        }
        Transition::ask(
            "Password: ",
            Continuation::RegisterPassword {
                username: username.to_owned(),
            },
        )
    }

    pub(super) fn register_password(&mut self, username: &str, password: &str) -> Transition {
        let outcome = self.state.auth().register(username, password);
        match outcome {
            Ok(()) => self.notice("Registration successful!", Style::Success),
            Err(AuthError::EmptyCredentials) => {
                self.notice("Username and password cannot be empty", Style::Error);
            }
            Err(AuthError::UserAlreadyExists) => {
                self.notice("Username already exists", Style::Error);
            }
            Err(err) => {
                tracing::error!(error = %err, "registration failed");
                self.notice("Registration failed", Style::Error);
            }
        }
        Transition::After(AUTH_PAUSE, Screen::AuthMenu)
    }
}
