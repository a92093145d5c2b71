//! Suspend/resume engine behind the prompt loop.
//!
//! A [`Terminal`] is always in exactly one [`Phase`]. Input is accepted only
//! while a prompt is pending, and a scheduled pause must be resumed before the
//! next prompt exists, so two prompts can never be live at once.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument};

use super::Transcript;
use crate::flows::{Flow, Prompt, STARTUP_PAUSE, Screen, Transition};
use crate::state::AppState;

/// Misuse of the suspend/resume protocol.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A line was submitted while no prompt was pending.
    #[error("no prompt is waiting for input")]
    NotAwaitingInput,

    /// `resume` was called while no pause was scheduled.
    #[error("no pause is scheduled")]
    NotPaused,

    /// The session has already ended.
    #[error("session has finished")]
    Finished,
}

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// One prompt is pending; the next submitted line goes to its continuation.
    Awaiting(Prompt),
    /// A screen is scheduled to be shown after `delay`.
    Paused { delay: Duration, then: Screen },
    /// The user exited.
    Finished,
}

/// Borrow-free summary of [`Phase`] for drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Waiting for a line after showing this prompt text.
    Prompt(&'static str),
    /// Waiting for [`Terminal::resume`] after this delay.
    Paused(Duration),
    /// Nothing more will happen.
    Finished,
}

/// One interactive session: application state, its transcript, and the
/// current phase.
#[derive(Debug)]
pub struct Terminal {
    state: AppState,
    transcript: Transcript,
    phase: Phase,
}

impl Terminal {
    /// Start a session. The transcript starts empty and the welcome screen is
    /// scheduled after the startup pause.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            transcript: Transcript::new(),
            phase: Phase::Paused {
                delay: STARTUP_PAUSE,
                then: Screen::Welcome,
            },
        }
    }

    /// Submit one line to the pending prompt.
    ///
    /// The prompt and the line are echoed into the transcript before the
    /// continuation runs.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingInput` while paused and
    /// `SessionError::Finished` after exit. State is untouched in both cases.
    #[instrument(skip_all)]
    pub fn submit(&mut self, line: &str) -> Result<(), SessionError> {
        let prompt = match std::mem::replace(&mut self.phase, Phase::Finished) {
            Phase::Awaiting(prompt) => prompt,
            other => {
                let err = if matches!(other, Phase::Finished) {
                    SessionError::Finished
                } else {
                    SessionError::NotAwaitingInput
                };
                self.phase = other;
                return Err(err);
            }
        };

        debug!(continuation = ?prompt.next, "input submitted");
        self.transcript.echo(prompt.text, line);

        let transition = Flow::new(&mut self.state, &mut self.transcript).resume(prompt.next, line);
        self.apply(transition);
        Ok(())
    }

    /// Perform the scheduled transition.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotPaused` while a prompt is pending and
    /// `SessionError::Finished` after exit.
    pub fn resume(&mut self) -> Result<(), SessionError> {
        let screen = match self.phase {
            Phase::Paused { then, .. } => then,
            Phase::Awaiting(_) => return Err(SessionError::NotPaused),
            Phase::Finished => return Err(SessionError::Finished),
        };

        debug!(?screen, "resuming");
        let transition = Flow::new(&mut self.state, &mut self.transcript).show(screen);
        self.apply(transition);
        Ok(())
    }

    /// Follow immediate transitions until the session suspends or ends.
    fn apply(&mut self, mut transition: Transition) {
        loop {
            self.phase = match transition {
                Transition::Show(screen) => {
                    transition = Flow::new(&mut self.state, &mut self.transcript).show(screen);
                    continue;
                }
                Transition::Ask(prompt) => Phase::Awaiting(prompt),
                Transition::After(delay, then) => Phase::Paused { delay, then },
                Transition::Finish => Phase::Finished,
            };
            return;
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match &self.phase {
            Phase::Awaiting(prompt) => Status::Prompt(prompt.text),
            Phase::Paused { delay, .. } => Status::Paused(*delay),
            Phase::Finished => Status::Finished,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub const fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Resume through every pause until a prompt is pending or the session
    /// ends. Used when pauses are not observed in real time.
    pub fn settle(&mut self) {
        while matches!(self.phase, Phase::Paused { .. }) {
            if self.resume().is_err() {
                break;
            }
        }
    }
}
