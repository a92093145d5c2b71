//! Integration tests for Tech House.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tech-house-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Login, registration, guest entry
//! - `shopping_flow` - Listing, search, cart, membership, checkout
//! - `admin_flow` - Admin status, product creation, promotion
//! - `driver` - The async driver over scripted input
//!
//! Every test drives a real [`Terminal`] through [`ScriptedSession`]; pauses
//! are resumed immediately instead of slept through.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tech_house_storefront::config::StorefrontConfig;
use tech_house_storefront::state::AppState;
use tech_house_storefront::terminal::{SessionError, Status, Terminal, Transcript, driver};

/// A session fed one line at a time, with pauses skipped.
pub struct ScriptedSession {
    terminal: Terminal,
}

impl ScriptedSession {
    /// A session with the default configuration, already at the auth menu.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// A session with `config`, already at the auth menu.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let mut terminal = Terminal::new(AppState::new(config.without_pauses()));
        terminal.settle();
        Self { terminal }
    }

    /// Submit each line, settling pauses after every one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if a line arrives after the session finished.
    pub fn run<'a, I>(&mut self, lines: I) -> Result<&mut Self, SessionError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.terminal.submit(line)?;
            self.terminal.settle();
        }
        Ok(self)
    }

    /// Submit one line without settling, leaving any pause pending.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no prompt is pending.
    pub fn submit(&mut self, line: &str) -> Result<Status, SessionError> {
        self.terminal.submit(line)?;
        Ok(self.terminal.status())
    }

    /// Resume through any pending pause.
    pub fn settle(&mut self) {
        self.terminal.settle();
    }

    /// Feed a whole script, ignoring lines after exit.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the protocol is misused.
    pub fn script(&mut self, script: &str) -> Result<&mut Self, SessionError> {
        driver::run_script(&mut self.terminal, script.lines())?;
        Ok(self)
    }

    /// Log in as `username`, landing on the main menu.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session already finished.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&mut Self, SessionError> {
        self.run(["1", username, password])
    }

    /// Register `username` and log in with it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session already finished.
    pub fn register_and_login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<&mut Self, SessionError> {
        self.run(["2", username, password])?;
        self.login(username, password)
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        self.terminal.state()
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        self.terminal.transcript()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.terminal.status()
    }

    /// Returns `true` if any line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript().contains(needle)
    }

    /// Number of lines exactly equal to `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.transcript()
            .lines()
            .iter()
            .filter(|line| line.text == text)
            .count()
    }

    /// Forget everything shown so far so later assertions only see new lines.
    pub fn clear_transcript(&mut self) {
        self.terminal.transcript_mut().clear();
    }
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}
