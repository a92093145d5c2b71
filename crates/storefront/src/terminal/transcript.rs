//! Append-only line transcript the flows write to.
//!
//! The transcript never renders anything itself. The driver drains the lines
//! added since its last flush and hands them to a renderer.

use serde::Serialize;

/// Width of the `=` and `-` rules that frame every screen.
pub const RULE_WIDTH: usize = 70;

/// Presentation hint for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Plain,
    Info,
    Success,
    Error,
    /// A prompt together with the value the user submitted.
    Input,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub text: String,
    pub style: Style,
}

/// Ordered record of everything shown during a session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<Line>,
    flushed: usize,
}

impl Transcript {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            flushed: 0,
        }
    }

    /// Append a line with the given style.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(Line {
            text: text.into(),
            style,
        });
    }

    pub fn print(&mut self, text: impl Into<String>) {
        self.push(text, Style::Plain);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, Style::Info);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(text, Style::Success);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, Style::Error);
    }

    pub fn blank(&mut self) {
        self.print("");
    }

    /// A full-width `=` rule.
    pub fn rule(&mut self) {
        self.print("=".repeat(RULE_WIDTH));
    }

    /// A full-width `-` rule.
    pub fn thin_rule(&mut self) {
        self.print("-".repeat(RULE_WIDTH));
    }

    /// A title framed by `=` rules.
    pub fn banner(&mut self, title: &str) {
        self.rule();
        self.print(title);
        self.rule();
    }

    /// Record a submitted prompt as `<prompt><value>`.
    pub fn echo(&mut self, prompt: &str, value: &str) {
        self.push(format!("{prompt}{value}"), Style::Input);
    }

    /// Drop every line, including ones not yet flushed.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.flushed = 0;
    }

    /// Every line currently in the transcript.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines added since the previous call.
    pub fn drain_new(&mut self) -> &[Line] {
        let start = self.flushed;
        self.flushed = self.lines.len();
        self.lines.get(start..).unwrap_or_default()
    }

    /// Returns `true` if any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }

    /// The whole transcript as newline-separated text.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_new_returns_each_line_once() {
        let mut transcript = Transcript::new();
        transcript.print("one");
        transcript.error("two");
        assert_eq!(transcript.drain_new().len(), 2);
        assert!(transcript.drain_new().is_empty());
        transcript.success("three");
        let fresh = transcript.drain_new();
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].style, Style::Success);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut transcript = Transcript::new();
        transcript.print("old");
        let _ = transcript.drain_new();
        transcript.clear();
        transcript.print("new");
        assert_eq!(transcript.drain_new().len(), 1);
        assert_eq!(transcript.text(), "new");
    }

    #[test]
    fn test_banner_and_echo() {
        let mut transcript = Transcript::new();
        transcript.banner("LOGIN");
        transcript.echo("Username: ", "admin");
        assert_eq!(transcript.lines().len(), 4);
        assert_eq!(transcript.lines()[0].text.len(), RULE_WIDTH);
        assert!(transcript.contains("Username: admin"));
        assert_eq!(transcript.lines()[3].style, Style::Input);
    }
}
