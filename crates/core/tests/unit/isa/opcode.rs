use std::collections::HashSet;

use gvm_core::Operation;
use gvm_core::isa::OpClass;
use rstest::rstest;

#[rstest]
#[case("CLEAR", Operation::Clear)]
#[case("AT", Operation::At)]
#[case("SET", Operation::Set)]
#[case("INSERT", Operation::Insert)]
#[case("ERASE", Operation::Erase)]
#[case("ADDCONST", Operation::AddConst)]
#[case("SUBCONST", Operation::SubConst)]
#[case("MULCONST", Operation::MulConst)]
#[case("DIVCONST", Operation::DivConst)]
#[case("ADDMEM", Operation::AddMem)]
#[case("SUBMEM", Operation::SubMem)]
#[case("MULMEM", Operation::MulMem)]
#[case("DIVMEM", Operation::DivMem)]
#[case("JUMPREL", Operation::JumpRel)]
#[case("JUMPZERO", Operation::JumpZero)]
#[case("JUMPNZERO", Operation::JumpNZero)]
#[case("NOOP", Operation::Noop)]
#[case("HALT", Operation::Halt)]
#[case("OUTPUT", Operation::Output)]
#[case("CHECKMEM", Operation::CheckMem)]
fn test_mnemonic_lookup(#[case] mnemonic: &str, #[case] op: Operation) {
    assert_eq!(Operation::from_mnemonic(mnemonic), Some(op));
    assert_eq!(op.mnemonic(), mnemonic);
    assert_eq!(op.to_string(), mnemonic);
}

#[rstest]
#[case("halt")]
#[case("Halt")]
#[case("")]
#[case("JUMP")]
#[case("UNKNOWN_INSTRUCTION")]
fn test_unrecognized_mnemonics(#[case] mnemonic: &str) {
    assert_eq!(Operation::from_mnemonic(mnemonic), None);
}

#[test]
fn test_catalog_is_complete_and_distinct() {
    let names: HashSet<_> = Operation::ALL.iter().map(|op| op.mnemonic()).collect();
    assert_eq!(names.len(), 20);
    assert!(!Operation::ALL.contains(&Operation::Unknown));
    assert_eq!(Operation::Unknown.mnemonic(), "UNKNOWN_INSTRUCTION");
}

#[test]
fn test_classes() {
    assert_eq!(Operation::Erase.class(), OpClass::Transfer);
    assert_eq!(Operation::DivConst.class(), OpClass::ConstArith);
    assert_eq!(Operation::SubMem.class(), OpClass::MemArith);
    assert_eq!(Operation::JumpNZero.class(), OpClass::Control);
    assert_eq!(Operation::CheckMem.class(), OpClass::System);
    assert_eq!(Operation::Unknown.class(), OpClass::System);

    let jumps: Vec<_> = Operation::ALL.into_iter().filter(|op| op.is_jump()).collect();
    assert_eq!(
        jumps,
        [Operation::JumpRel, Operation::JumpZero, Operation::JumpNZero]
    );
}

#[test]
fn test_operation_serializes_as_mnemonic() {
    assert_eq!(
        serde_json::to_string(&Operation::JumpNZero).unwrap(),
        "\"JUMPNZERO\""
    );
    assert_eq!(
        serde_json::to_string(&Operation::Unknown).unwrap(),
        "\"UNKNOWN_INSTRUCTION\""
    );
}
