//! Integration tests for the async driver and scripted sessions.

#![allow(clippy::unwrap_used)]

use tokio::io::BufReader;

use tech_house_core::CurrencyCode;
use tech_house_storefront::config::StorefrontConfig;
use tech_house_storefront::state::AppState;
use tech_house_storefront::terminal::{ConsoleRenderer, Style, Terminal, driver};
use tech_house_integration_tests::ScriptedSession;

const FULL_SESSION: &str = "\
2
dilnoza
pw
1
dilnoza
pw
5
3
4
1
3
6
yes
99
0
";

#[tokio::test]
async fn test_full_session_over_driver() {
    colored::control::set_override(false);
    let mut terminal = Terminal::new(AppState::new(StorefrontConfig::default().without_pauses()));
    let mut renderer = ConsoleRenderer::replay(Vec::new(), true);

    driver::run(
        &mut terminal,
        BufReader::new(FULL_SESSION.as_bytes()),
        &mut renderer,
        false,
    )
    .await
    .unwrap();

    assert!(terminal.is_finished());
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    let expected_in_order = [
        "Registration successful!",
        "Login successful!",
        "Membership set to Gold!",
        "Mixer added to cart!",
        "TOTAL: 382,500 UZS",
        "Total Amount: 382,500 UZS",
        "ORDER COMPLETED SUCCESSFULLY!",
        "Logged out successfully",
        "THANK YOU FOR VISITING TECH HOUSE!",
    ];
    let mut cursor = 0;
    for needle in expected_in_order {
        let found = text[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("{needle} missing or out of order"));
        cursor += found + needle.len();
    }
}

#[test]
fn test_script_matches_line_by_line_run() {
    let mut scripted = ScriptedSession::new();
    scripted.script(FULL_SESSION).unwrap();

    let mut stepped = ScriptedSession::new();
    stepped.run(FULL_SESSION.lines()).unwrap();

    assert_eq!(scripted.transcript().lines(), stepped.transcript().lines());
    assert!(scripted.terminal().is_finished());
}

#[test]
fn test_transcript_serializes_styles() {
    let mut session = ScriptedSession::new();
    session.run(["9"]).unwrap();

    let error = session
        .transcript()
        .lines()
        .iter()
        .find(|line| line.style == Style::Error)
        .unwrap();
    let json = serde_json::to_value(error).unwrap();
    assert_eq!(json["text"], "Invalid choice");
    assert_eq!(json["style"], "error");
}

#[test]
fn test_currency_from_config() {
    let config = StorefrontConfig::from_lookup(|key| match key {
        "TECH_HOUSE_CURRENCY" => Some("EUR".to_owned()),
        "TECH_HOUSE_DELIVERY_FEE" => Some("15".to_owned()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.currency, CurrencyCode::EUR);

    let mut session = ScriptedSession::with_config(config);
    session.run(["3", "4", "3", "3"]).unwrap();
    assert!(session.saw("Delivery: 15 EUR"));
    assert!(session.saw("TOTAL: 350,015 EUR"));
}
