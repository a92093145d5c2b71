//! Async driver connecting a [`Terminal`] to line input and a console.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use super::{ConsoleRenderer, SessionError, Status, Terminal};
use crate::error::AppError;

/// Run a session until the user exits or the input ends.
///
/// Pauses are slept through when `pauses` is set and skipped otherwise. New
/// transcript lines are flushed to the renderer before every wait.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing output fails.
pub async fn run<R, W>(
    terminal: &mut Terminal,
    input: R,
    renderer: &mut ConsoleRenderer<W>,
    pauses: bool,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut input = input;
    let mut buf = Vec::new();

    loop {
        renderer.render(terminal.transcript_mut().drain_new())?;

        match terminal.status() {
            Status::Finished => {
                info!("session finished");
                break;
            }
            Status::Paused(delay) => {
                if pauses {
                    tokio::time::sleep(delay).await;
                }
                terminal.resume()?;
            }
            Status::Prompt(text) => {
                renderer.prompt(text)?;
                let Some(line) = next_line(&mut input, &mut buf).await? else {
                    info!("input closed");
                    break;
                };
                debug!(len = line.len(), "line read");
                terminal.submit(&line)?;
            }
        }
    }

    Ok(())
}

/// Read one line, decoding invalid UTF-8 lossily so a stray byte becomes
/// an ordinary rejected choice. Returns `None` at end of input.
async fn next_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Feed `lines` to a session without pausing.
///
/// Input left over after the user exits is ignored.
///
/// # Errors
///
/// Returns `SessionError` only if the protocol is misused, which settling
/// before every submit rules out.
pub fn run_script<'a, I>(terminal: &mut Terminal, lines: I) -> Result<(), SessionError>
where
    I: IntoIterator<Item = &'a str>,
{
    for line in lines {
        terminal.settle();
        if terminal.is_finished() {
            break;
        }
        terminal.submit(line)?;
    }
    terminal.settle();
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tokio::io::BufReader;

    use super::*;
    use crate::config::StorefrontConfig;
    use crate::state::AppState;

    fn terminal() -> Terminal {
        Terminal::new(AppState::new(StorefrontConfig::default().without_pauses()))
    }

    #[tokio::test]
    async fn test_run_until_exit() {
        colored::control::set_override(false);
        let mut terminal = terminal();
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        let input = BufReader::new("3\n1\n0\nleftover\n".as_bytes());

        run(&mut terminal, input, &mut renderer, false).await.unwrap();

        assert!(terminal.is_finished());
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("WELCOME TO TECH HOUSE - Home Appliance Store"));
        assert!(text.contains("Select: 3"));
        assert!(text.contains("AVAILABLE PRODUCTS"));
        assert!(text.contains("THANK YOU FOR VISITING TECH HOUSE!"));
        assert!(!text.contains("leftover"));
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut terminal = terminal();
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        let input = BufReader::new("3\n".as_bytes());

        run(&mut terminal, input, &mut renderer, false).await.unwrap();

        assert!(!terminal.is_finished());
        assert_eq!(terminal.status(), Status::Prompt("Select: "));
    }

    #[tokio::test]
    async fn test_run_survives_invalid_utf8() {
        let mut terminal = terminal();
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        let input = BufReader::new(&b"3\n\xfc\n0\n"[..]);

        run(&mut terminal, input, &mut renderer, false).await.unwrap();

        assert!(terminal.is_finished());
        assert!(terminal.transcript().contains("Invalid choice or feature not available"));
    }

    #[tokio::test]
    async fn test_run_strips_crlf() {
        let mut terminal = terminal();
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        let input = BufReader::new("3\r\n0\r\n".as_bytes());

        run(&mut terminal, input, &mut renderer, false).await.unwrap();

        assert!(terminal.is_finished());
        assert!(terminal.transcript().contains("Guest Mode"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_sleeps_through_pauses() {
        let mut terminal = terminal();
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        let input = BufReader::new("0\n".as_bytes());
        let started = tokio::time::Instant::now();

        run(&mut terminal, input, &mut renderer, true).await.unwrap();

        // Startup pause plus the welcome pause.
        assert!(started.elapsed() >= std::time::Duration::from_millis(1000));
    }

    #[test]
    fn test_run_script_ignores_input_after_exit() {
        let mut terminal = terminal();
        run_script(&mut terminal, ["0", "1", "admin"]).unwrap();
        assert!(terminal.is_finished());
        assert!(!terminal.transcript().contains("Username: 1"));
    }
}
