//! Replay a scripted session.
//!
//! The script holds one submitted line per file line. Pauses are skipped and
//! the transcript is written as the session runs.
//!
//! # Usage
//!
//! ```bash
//! th-cli replay session.txt --echo
//! ```

use std::io::Write;
use std::path::Path;

use tokio::io::BufReader;

use tech_house_storefront::config::StorefrontConfig;
use tech_house_storefront::state::AppState;
use tech_house_storefront::terminal::{ConsoleRenderer, Terminal, driver};

use super::CommandError;

/// Replay the script at `path`, writing the transcript to `out`.
///
/// # Errors
///
/// Returns `CommandError::Io` if the script cannot be read or the output
/// cannot be written.
pub async fn from_file<W: Write>(
    config: StorefrontConfig,
    path: &Path,
    echo: bool,
    out: W,
) -> Result<Terminal, CommandError> {
    let script = tokio::fs::read_to_string(path).await?;
    tracing::info!(path = %path.display(), lines = script.lines().count(), "replaying script");
    run(config, &script, echo, out).await
}

/// Replay `script`, writing the transcript to `out`.
///
/// # Errors
///
/// Returns `CommandError::App` if writing the transcript fails.
pub async fn run<W: Write>(
    config: StorefrontConfig,
    script: &str,
    echo: bool,
    out: W,
) -> Result<Terminal, CommandError> {
    let mut terminal = Terminal::new(AppState::new(config.without_pauses()));
    let mut renderer = ConsoleRenderer::replay(out, echo);
    let input = BufReader::new(script.as_bytes());

    driver::run(&mut terminal, input, &mut renderer, false).await?;
    Ok(terminal)
}
