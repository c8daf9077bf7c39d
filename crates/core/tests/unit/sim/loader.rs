use std::io::Write;

use gvm_core::Operation::{AddConst, At, CheckMem, Clear, Halt, JumpNZero, Output};
use gvm_core::sim::loader::{decode_instruction, decode_lines, decode_program, is_ignored, read_source};
use gvm_core::{Fault, GvmError, Instruction};
use rstest::rstest;
use tempfile::NamedTempFile;

use crate::common::builder::{inst, program};

#[rstest]
#[case("CLEAR", inst(Clear, 0))]
#[case("AT 3", inst(At, 3))]
#[case("ADDCONST -12", inst(AddConst, -12))]
#[case("  JUMPNZERO   -2  ", inst(JumpNZero, -2))]
#[case("\tCHECKMEM\t4", inst(CheckMem, 4))]
#[case("OUTPUT # show it", inst(Output, 0))]
#[case("AT 1#no space", inst(At, 1))]
#[case("ADDCONST +5", inst(AddConst, 5))]
fn test_decode_valid_lines(#[case] line: &str, #[case] expected: Instruction) {
    assert_eq!(decode_instruction(line), expected);
}

#[rstest]
#[case("FROB 1")]
#[case("halt")]
#[case("AT x")]
#[case("AT 1.5")]
#[case("AT 1 2")]
#[case("ADDCONST 99999999999999999999")]
fn test_decode_malformed_lines(#[case] line: &str) {
    assert_eq!(decode_instruction(line), Instruction::unknown());
}

#[rstest]
#[case("", true)]
#[case("   \t", true)]
#[case("# comment", true)]
#[case("   # indented", true)]
#[case("HALT", false)]
#[case(" HALT # trailing", false)]
fn test_is_ignored(#[case] line: &str, #[case] ignored: bool) {
    assert_eq!(is_ignored(line), ignored);
}

#[test]
fn test_decode_lines_keeps_source_line_numbers() {
    let source = "# header\n\nAT 0\n  OUTPUT  \nBOGUS\n";
    let lines: Vec<_> = decode_lines(source).collect();

    assert_eq!(lines.len(), 3);
    assert_eq!((lines[0].number, lines[0].text), (3, "AT 0"));
    assert_eq!((lines[1].number, lines[1].text), (4, "OUTPUT"));
    assert_eq!(lines[2].number, 5);
    assert!(lines[2].instruction.is_unknown());
}

#[test]
fn test_decode_program_handles_crlf() {
    let decoded = decode_program("AT 0\r\nOUTPUT\r\n\r\nHALT\r\n").unwrap();
    assert_eq!(decoded, program(&[(At, 0), (Output, 0), (Halt, 0)]));
}

#[test]
fn test_decode_program_stops_at_first_bad_line() {
    let err = decode_program("CLEAR\n\nADDCONST one\nNOPE\n").unwrap_err();
    assert_eq!(
        err,
        Fault::Undecodable {
            line: 3,
            text: "ADDCONST one".to_owned(),
        }
    );
    assert_eq!(err.to_string(), "line 3: undecodable instruction 'ADDCONST one'");
}

#[test]
fn test_decode_empty_source() {
    assert_eq!(decode_program(""), Ok(Vec::new()));
    assert_eq!(decode_program("# only\n# comments\n"), Ok(Vec::new()));
}

#[test]
fn test_read_source_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"HALT\n").unwrap();
    assert_eq!(read_source(file.path()).unwrap(), "HALT\n");
}

#[test]
fn test_read_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(dir.path().join("absent.gvm")).unwrap_err();
    assert!(matches!(err, GvmError::Io { .. }));
}
