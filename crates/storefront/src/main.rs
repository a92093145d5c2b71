//! Tech House - terminal storefront for home appliances.
//!
//! Runs one interactive session on stdin/stdout. All state lives for the
//! life of the process.
//!
//! # Architecture
//!
//! - `terminal::Terminal` holds the session and its single pending prompt
//! - `flows` render screens and handle each submitted line
//! - `terminal::driver` reads stdin with tokio and sleeps through pauses
//!
//! Configuration comes from `TECH_HOUSE_*` environment variables and an
//! optional `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tokio::io::BufReader;

use tech_house_storefront::config::{LogFormat, StorefrontConfig};
use tech_house_storefront::error::AppError;
use tech_house_storefront::state::AppState;
use tech_house_storefront::telemetry;
use tech_house_storefront::terminal::{ConsoleRenderer, Terminal, driver};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "session failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            telemetry::init(LogFormat::default(), telemetry::DEFAULT_FILTER);
            return Err(err.into());
        }
    };
    telemetry::init(config.log_format, telemetry::DEFAULT_FILTER);

    tracing::info!(
        currency = %config.currency,
        delivery_fee = %config.delivery_fee,
        pauses = config.pauses,
        "starting session"
    );

    let pauses = config.pauses;
    let mut terminal = Terminal::new(AppState::new(config));
    let mut renderer = ConsoleRenderer::interactive(std::io::stdout());
    let input = BufReader::new(tokio::io::stdin());

    driver::run(&mut terminal, input, &mut renderer, pauses).await
}
