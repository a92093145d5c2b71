//! The prompt loop: transcript, suspend/resume engine, console output, and
//! the async driver.

pub mod driver;
mod render;
mod session;
mod transcript;

pub use render::ConsoleRenderer;
pub use session::{Phase, SessionError, Status, Terminal};
pub use transcript::{Line, RULE_WIDTH, Style, Transcript};
