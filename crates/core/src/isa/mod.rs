//! GVM instruction set.
//!
//! This module contains:
//! 1. **Operations:** The closed opcode catalog and mnemonic lookup.
//! 2. **Instructions:** The decoded `(operation, argument)` pair.
//! 3. **Disassembly:** Source-form rendering for dumps and tracing.

/// Instruction disassembler for dumps, tracing and diagnostics.
pub mod disasm;

/// Decoded instruction structure.
pub mod instruction;

/// Operation catalog and mnemonic lookup.
pub mod opcode;

pub use instruction::Instruction;
pub use opcode::{OpClass, Operation};
