//! Program Loader.
//!
//! This module turns GVM program text into decoded instructions. It performs:
//! 1. **File reading:** Reads program source from disk, reporting unreadable
//!    files as a [`GvmError`] rather than a machine state.
//! 2. **Line filtering:** Skips blank lines and `#` comment lines.
//! 3. **Decoding:** Splits each remaining line into a mnemonic and an optional
//!    signed argument. Anything malformed decodes to `UNKNOWN` so the caller
//!    decides how to react.
//!
//! Source format, one instruction per line:
//!
//! ```text
//! # comment
//! AT 0
//! ADDCONST -3   # trailing comments are ignored
//! OUTPUT
//! HALT
//! ```

use std::fs;
use std::path::Path;

use crate::common::{Fault, GvmError};
use crate::isa::{Instruction, Operation};

/// Character that starts a comment.
pub const COMMENT_CHAR: char = '#';

/// A decoded source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramLine<'a> {
    /// 1-based line number in the source text.
    pub number: usize,
    /// Source text of the line, trimmed.
    pub text: &'a str,
    /// Decoded instruction; `UNKNOWN` when the line is malformed.
    pub instruction: Instruction,
}

/// Reads a program file from disk.
///
/// # Errors
///
/// Returns [`GvmError::Io`] if the file cannot be opened or is not UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, GvmError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| GvmError::io(path, e))
}

/// Returns `true` for lines the loader skips entirely.
pub fn is_ignored(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_CHAR)
}

/// Decodes a single non-comment line.
///
/// The argument defaults to 0 when omitted. An unrecognized mnemonic, a
/// non-integer argument or any extra token yields [`Instruction::unknown`].
pub fn decode_instruction(line: &str) -> Instruction {
    let code = line.split(COMMENT_CHAR).next().unwrap_or_default();
    let mut tokens = code.split_whitespace();

    let Some(operation) = tokens.next().and_then(Operation::from_mnemonic) else {
        return Instruction::unknown();
    };

    let argument = match tokens.next() {
        None => 0,
        Some(token) => match token.parse::<i64>() {
            Ok(value) => value,
            Err(_) => return Instruction::unknown(),
        },
    };

    if tokens.next().is_some() {
        return Instruction::unknown();
    }

    Instruction::new(operation, argument)
}

/// Decodes every instruction-bearing line of `source`, in order.
///
/// Blank and comment lines are skipped; malformed lines are yielded with an
/// `UNKNOWN` instruction.
pub fn decode_lines(source: &str) -> impl Iterator<Item = ProgramLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_ignored(line))
        .map(|(idx, line)| ProgramLine {
            number: idx + 1,
            text: line.trim(),
            instruction: decode_instruction(line),
        })
}

/// Decodes a whole program, stopping at the first malformed line.
///
/// # Errors
///
/// Returns [`Fault::Undecodable`] naming the first line that did not decode.
pub fn decode_program(source: &str) -> Result<Vec<Instruction>, Fault> {
    let mut program = Vec::new();
    for line in decode_lines(source) {
        if line.instruction.is_unknown() {
            return Err(Fault::Undecodable {
                line: line.number,
                text: line.text.to_owned(),
            });
        }
        program.push(line.instruction);
    }
    Ok(program)
}
