//! Instruction builders.

use gvm_core::{Instruction, Operation};

/// Shorthand for `Instruction::new`.
pub const fn inst(operation: Operation, argument: i64) -> Instruction {
    Instruction::new(operation, argument)
}

/// Builds a program from `(operation, argument)` pairs.
pub fn program(pairs: &[(Operation, i64)]) -> Vec<Instruction> {
    pairs.iter().map(|&(op, arg)| inst(op, arg)).collect()
}
