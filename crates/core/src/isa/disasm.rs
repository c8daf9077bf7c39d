//! Instruction disassembler.
//!
//! Renders decoded instructions back to source form for dumps, trace events
//! and test diagnostics. The output of [`disassemble`] re-decodes to the same
//! instruction for every known operation.

use std::fmt;

use super::instruction::Instruction;

/// Formats an instruction as `MNEMONIC argument`.
pub fn disassemble(inst: &Instruction) -> String {
    inst.to_string()
}

/// Formats a whole program, one instruction per line.
pub fn disassemble_program(program: &[Instruction]) -> String {
    let mut out = String::new();
    for inst in program {
        out.push_str(&disassemble(inst));
        out.push('\n');
    }
    out
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation.mnemonic(), self.argument)
    }
}
