//! Console rendering of transcript lines.

use std::io::{self, Write};

use colored::Colorize;

use super::{Line, Style};

/// Writes transcript lines to a console, coloured by style.
///
/// Interactive sessions write each prompt and leave `Input` lines out because
/// the console already shows what the user typed. Replays never write prompts
/// and show `Input` lines only when asked to.
pub struct ConsoleRenderer<W> {
    out: W,
    prompts: bool,
    echo_input: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer for a live console: prompts are written without a newline
    /// and input echo lines are skipped.
    pub const fn interactive(out: W) -> Self {
        Self {
            out,
            prompts: true,
            echo_input: false,
        }
    }

    /// Renderer for scripted sessions. With `echo_input` each submitted line
    /// is shown after its prompt.
    pub const fn replay(out: W, echo_input: bool) -> Self {
        Self {
            out,
            prompts: false,
            echo_input,
        }
    }

    /// Write each line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn render(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            match line.style {
                Style::Plain => writeln!(self.out, "{}", line.text)?,
                Style::Info => writeln!(self.out, "{}", line.text.cyan())?,
                Style::Success => writeln!(self.out, "{}", line.text.green())?,
                Style::Error => writeln!(self.out, "{}", line.text.red())?,
                Style::Input if self.echo_input => {
                    writeln!(self.out, "{}", line.text.yellow())?;
                }
                Style::Input => {}
            }
        }
        self.out.flush()
    }

    /// Show a pending prompt. Replays skip it.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        if !self.prompts {
            return Ok(());
        }
        write!(self.out, "{}", text.bold())?;
        self.out.flush()
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn lines() -> Vec<Line> {
        vec![
            Line {
                text: "MAIN MENU".to_owned(),
                style: Style::Plain,
            },
            Line {
                text: "Select: 1".to_owned(),
                style: Style::Input,
            },
            Line {
                text: "Invalid choice".to_owned(),
                style: Style::Error,
            },
        ]
    }

    #[test]
    fn test_interactive_skips_input_echo() {
        colored::control::set_override(false);
        let mut renderer = ConsoleRenderer::interactive(Vec::new());
        renderer.render(&lines()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "MAIN MENU\nInvalid choice\n");
    }

    #[test]
    fn test_replay_renders_input_echo_and_no_prompt() {
        colored::control::set_override(false);
        let mut renderer = ConsoleRenderer::replay(Vec::new(), true);
        renderer.render(&lines()).unwrap();
        renderer.prompt("Select: ").unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "MAIN MENU\nSelect: 1\nInvalid choice\n");
    }

    #[test]
    fn test_quiet_replay_hides_input() {
        colored::control::set_override(false);
        let mut renderer = ConsoleRenderer::replay(Vec::new(), false);
        renderer.render(&lines()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "MAIN MENU\nInvalid choice\n");
    }

    #[test]
    fn test_interactive_writes_prompt_without_newline() {
        colored::control::set_override(false);
        let mut renderer = ConsoleRenderer::interactive(Vec::new());
        renderer.prompt("Select: ").unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Select: ");
    }
}
