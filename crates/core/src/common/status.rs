//! Machine status register.
//!
//! The status is the only thing a host needs to branch on after `load`,
//! `run` or `step`. It forms a small state machine:
//! 1. **WAITING:** Freshly constructed or reset; accepts `load`.
//! 2. **READY:** A non-empty program is loaded; accepts `run`.
//! 3. **RUNNING:** The fetch–evaluate–advance loop is active.
//! 4. **HALTED / ERRORED:** Terminal; only `reset` leaves these states.

use std::fmt;

use serde::Serialize;

/// Current lifecycle state of a [`Gvm`](crate::Gvm).
#[must_use = "hosts must branch on the returned status to detect rejection or failure"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// No program loaded.
    #[default]
    Waiting,
    /// Program loaded and ready to run.
    Ready,
    /// Executing instructions.
    Running,
    /// Stopped normally, by `HALT` or by running off the end of the program.
    Halted,
    /// Stopped because loading or evaluation hit a fault.
    Errored,
}

impl Status {
    /// Returns `true` for `Halted` and `Errored`.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Halted | Self::Errored)
    }

    /// Upper-case name used in dumps and CLI output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Ready => "READY",
            Self::Running => "RUNNING",
            Self::Halted => "HALTED",
            Self::Errored => "ERRORED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
