//! Output channel for the `OUTPUT` instruction.
//!
//! The engine never writes to the terminal directly; it hands each emitted
//! value to an [`OutputSink`]. This module provides:
//! 1. **Console:** [`ConsoleSink`] writes one value per line to stdout or stderr.
//! 2. **Capture:** [`BufferSink`] (and `Vec<i64>`) collect values for hosts and tests.

use std::io::{self, Write};

/// Receiver for values emitted by `OUTPUT`.
pub trait OutputSink {
    /// Accepts one emitted accumulator value.
    fn emit(&mut self, value: i64);
}

impl OutputSink for Vec<i64> {
    fn emit(&mut self, value: i64) {
        self.push(value);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, value: i64) {
        (**self).emit(value);
    }
}

/// Writes each value on its own line to stdout, or stderr when configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    to_stderr: bool,
}

impl ConsoleSink {
    /// Sink writing to stdout.
    pub const fn stdout() -> Self {
        Self { to_stderr: false }
    }

    /// Sink writing to stderr.
    pub const fn stderr() -> Self {
        Self { to_stderr: true }
    }

    /// Returns `true` if values go to stderr.
    pub const fn is_stderr(&self) -> bool {
        self.to_stderr
    }
}

impl OutputSink for ConsoleSink {
    fn emit(&mut self, value: i64) {
        let result = if self.to_stderr {
            writeln!(io::stderr().lock(), "{value}")
        } else {
            let mut out = io::stdout().lock();
            writeln!(out, "{value}").and_then(|()| out.flush())
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, value, "failed to write OUTPUT value");
        }
    }
}

/// Collects emitted values in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSink {
    values: Vec<i64>,
}

impl BufferSink {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Values emitted so far.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Removes and returns the collected values.
    pub fn take(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.values)
    }
}

impl OutputSink for BufferSink {
    fn emit(&mut self, value: i64) {
        self.values.push(value);
    }
}
