//! Integration tests for login, registration, and guest entry.

#![allow(clippy::unwrap_used)]

use secrecy::SecretString;

use tech_house_core::Role;
use tech_house_storefront::config::StorefrontConfig;
use tech_house_storefront::flows::{AUTH_PAUSE, NOTICE_PAUSE};
use tech_house_storefront::terminal::Status;
use tech_house_integration_tests::ScriptedSession;

// ============================================================================
// Menu
// ============================================================================

#[test]
fn test_session_opens_with_welcome_and_auth_menu() {
    let session = ScriptedSession::new();
    assert!(session.saw("WELCOME TO TECH HOUSE - Home Appliance Store"));
    for option in ["1. Login", "2. Register", "3. Continue as guest", "0. Exit"] {
        assert!(session.saw(option), "missing {option}");
    }
    assert_eq!(session.status(), Status::Prompt("Select: "));
}

#[test]
fn test_invalid_choice_redisplays_menu_without_pause() {
    let mut session = ScriptedSession::new();
    let status = session.submit("login").unwrap();
    assert_eq!(status, Status::Prompt("Select: "));
    assert_eq!(session.count("Invalid choice"), 1);
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_login_success_sets_current_account() {
    let mut session = ScriptedSession::new();
    session.run(["1", "admin"]).unwrap();
    let status = session.submit("admin123").unwrap();

    assert_eq!(status, Status::Paused(NOTICE_PAUSE));
    assert!(session.saw("Login successful!"));
    assert_eq!(
        session.state().session().current_username(),
        Some("admin")
    );
}

#[test]
fn test_wrong_password_leaves_session_unset() {
    let mut session = ScriptedSession::new();
    session.run(["1", "admin"]).unwrap();
    let status = session.submit("Admin123").unwrap();

    assert_eq!(status, Status::Paused(AUTH_PAUSE));
    assert!(session.saw("Invalid username or password"));
    assert!(session.state().session().current_username().is_none());
}

#[test]
fn test_unknown_user_can_retry() {
    let mut session = ScriptedSession::new();
    session.login("ghost", "nope").unwrap();
    session.login("ghost", "nope").unwrap();
    session.login("admin", "admin123").unwrap();

    assert_eq!(session.count("Invalid username or password"), 2);
    assert!(session.saw("Logged in: admin"));
}

#[test]
fn test_password_is_compared_exactly() {
    let mut session = ScriptedSession::new();
    session.login("admin", " admin123").unwrap();
    assert!(session.saw("Invalid username or password"));
    assert!(!session.state().session().is_authenticated());
}

#[test]
fn test_admin_password_comes_from_config() {
    let config = StorefrontConfig {
        admin_password: SecretString::from("hunter2"),
        ..StorefrontConfig::default()
    };
    let mut session = ScriptedSession::with_config(config);
    session.login("admin", "admin123").unwrap();
    assert!(!session.state().session().is_authenticated());

    session.login("admin", "hunter2").unwrap();
    assert!(session.saw("Logged in: admin"));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_creates_customer_without_logging_in() {
    let mut session = ScriptedSession::new();
    session.run(["2", "aziz", "secret"]).unwrap();

    assert!(session.saw("Registration successful!"));
    let account = session.state().accounts().get("aziz").unwrap();
    assert_eq!(account.role, Role::Customer);
    assert_eq!(account.membership, None);
    assert_eq!(account.total_purchases, 0);
    assert!(!session.state().session().is_authenticated());
    assert_eq!(session.status(), Status::Prompt("Select: "));
}

#[test]
fn test_register_existing_username_changes_nothing() {
    let mut session = ScriptedSession::new();
    session.run(["2"]).unwrap();
    let status = session.submit("admin").unwrap();

    assert_eq!(status, Status::Paused(AUTH_PAUSE));
    assert!(session.saw("Username already exists"));
    assert_eq!(session.state().accounts().len(), 1);

    // The seeded password still works.
    session.settle();
    session.login("admin", "admin123").unwrap();
    assert!(session.saw("Logged in: admin"));
}

#[test]
fn test_register_empty_username_is_rejected() {
    let mut session = ScriptedSession::new();
    session.run(["2", "   "]).unwrap();
    assert!(session.saw("Username and password cannot be empty"));
    assert_eq!(session.state().accounts().len(), 1);
}

#[test]
fn test_register_empty_password_is_rejected() {
    let mut session = ScriptedSession::new();
    session.run(["2", "bob", ""]).unwrap();
    assert!(session.saw("Username and password cannot be empty"));
    assert!(session.state().accounts().get("bob").is_none());
}

#[test]
fn test_register_then_login() {
    let mut session = ScriptedSession::new();
    session.register_and_login("malika", "pw").unwrap();
    assert!(session.saw("Logged in: malika"));
    assert!(session.saw("5. Set membership"));
    assert!(!session.saw("9. [ADMIN] Add product"));
}

// ============================================================================
// Guest & Exit
// ============================================================================

#[test]
fn test_guest_goes_straight_to_main_menu() {
    let mut session = ScriptedSession::new();
    let status = session.submit("3").unwrap();
    assert_eq!(status, Status::Prompt("Select: "));
    assert!(session.saw("Guest Mode"));
    assert!(session.saw("Cart: 0 items"));
}

#[test]
fn test_exit_from_auth_menu_ends_session() {
    let mut session = ScriptedSession::new();
    session.run(["0"]).unwrap();
    assert!(session.terminal().is_finished());
    assert!(session.saw("THANK YOU FOR VISITING TECH HOUSE!"));
    assert!(session.run(["1"]).is_err());
}
