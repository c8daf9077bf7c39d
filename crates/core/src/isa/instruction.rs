//! Decoded instruction representation.

use serde::Serialize;

use super::opcode::Operation;

/// One decoded GVM instruction: an operation and its single signed argument.
///
/// The argument is a constant, a memory index or a jump distance depending on
/// the operation; operations that ignore it carry 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Instruction {
    /// Operation tag.
    pub operation: Operation,
    /// Operand.
    pub argument: i64,
}

impl Instruction {
    /// Creates an instruction.
    #[inline]
    pub const fn new(operation: Operation, argument: i64) -> Self {
        Self {
            operation,
            argument,
        }
    }

    /// Creates an instruction whose argument defaults to 0.
    #[inline]
    pub const fn bare(operation: Operation) -> Self {
        Self::new(operation, 0)
    }

    /// The placeholder produced for an undecodable line.
    #[inline]
    pub const fn unknown() -> Self {
        Self::bare(Operation::Unknown)
    }

    /// Returns `true` if this is the undecodable placeholder.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.operation == Operation::Unknown
    }
}
