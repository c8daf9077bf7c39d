use gvm_core::Instruction;
use gvm_core::Operation::{AddConst, CheckMem, Halt, JumpRel};
use gvm_core::isa::disasm::{disassemble, disassemble_program};
use gvm_core::sim::loader::decode_instruction;

use crate::common::builder::{inst, program};

#[test]
fn test_disassemble_single() {
    assert_eq!(disassemble(&inst(AddConst, -3)), "ADDCONST -3");
    assert_eq!(disassemble(&Instruction::bare(Halt)), "HALT 0");
    assert_eq!(disassemble(&Instruction::unknown()), "UNKNOWN_INSTRUCTION 0");
}

#[test]
fn test_disassemble_program() {
    let text = disassemble_program(&program(&[(CheckMem, 2), (JumpRel, -1), (Halt, 0)]));
    assert_eq!(text, "CHECKMEM 2\nJUMPREL -1\nHALT 0\n");
    assert_eq!(disassemble_program(&[]), "");
}

#[test]
fn test_disassembly_decodes_back() {
    for op in gvm_core::Operation::ALL {
        let expected = inst(op, -17);
        assert_eq!(decode_instruction(&disassemble(&expected)), expected, "{op}");
    }
}
