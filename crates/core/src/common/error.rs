//! Error and fault definitions.
//!
//! The machine reports problems on two tiers:
//! 1. **Environment errors:** [`GvmError`] is returned as `Err` when the host
//!    environment fails (unreadable program file, bad configuration). The
//!    machine state is left untouched.
//! 2. **Program faults:** [`Fault`] records why a program drove the machine
//!    into `ERRORED`. Faults never propagate as `Err`; they sit next to the
//!    status for diagnostics until the next `reset`.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::isa::opcode::Operation;

/// Environment-level failure surfaced to the host.
#[derive(Debug, Error)]
pub enum GvmError {
    /// A program, memory or configuration file could not be read.
    #[error("unable to open file '{}': {source}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A JSON configuration or memory file could not be parsed.
    #[error("invalid JSON in '{}': {source}", path.display())]
    Json {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl GvmError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reason a program moved the machine into `ERRORED`.
///
/// Indices and arguments are kept as the signed operand the instruction
/// carried, so negative offsets are reported verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fault {
    /// A source line did not decode to a known instruction.
    #[error("line {line}: undecodable instruction '{text}'")]
    Undecodable {
        /// 1-based source line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// An `UNKNOWN` instruction reached the evaluator.
    #[error("unknown instruction at position {position}")]
    UnknownInstruction {
        /// Cursor position of the instruction.
        position: usize,
    },

    /// A memory operand fell outside `[0, len)`.
    #[error("{operation}: memory index {index} out of bounds (len {len})")]
    MemoryOutOfBounds {
        /// Operation that made the access.
        operation: Operation,
        /// Requested index.
        index: i64,
        /// Memory length at the time of access.
        len: usize,
    },

    /// An `INSERT` targeted a position outside `[0, len]`.
    #[error("INSERT: insertion point {index} out of bounds (len {len})")]
    InvalidInsertion {
        /// Requested insertion point.
        index: i64,
        /// Memory length at the time of access.
        len: usize,
    },

    /// `DIVCONST 0` or `DIVMEM` on a zero cell.
    #[error("{operation}: division by zero")]
    DivisionByZero {
        /// The dividing operation.
        operation: Operation,
    },

    /// A jump instruction carried a distance of zero.
    #[error("{operation}: zero jump distance")]
    ZeroJump {
        /// The jump operation.
        operation: Operation,
    },

    /// The cursor was asked to advance by zero positions.
    #[error("cursor advanced by zero positions")]
    ZeroStep,

    /// `CHECKMEM` found less memory than required.
    #[error("CHECKMEM: memory holds {len} cells, {required} required")]
    InsufficientMemory {
        /// Minimum length demanded by the instruction.
        required: i64,
        /// Actual memory length.
        len: usize,
    },
}
