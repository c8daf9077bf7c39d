//! GVM operation set.
//!
//! The set is closed: every operation the evaluator understands is a variant
//! of [`Operation`], and dispatch is an exhaustive `match`. Unrecognized
//! mnemonics decode to [`Operation::Unknown`] rather than failing the decoder.

use std::fmt;

use serde::Serialize;

/// Mnemonic printed for [`Operation::Unknown`].
pub const UNKNOWN_MNEMONIC: &str = "UNKNOWN_INSTRUCTION";

/// Every GVM operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    /// `accumulator = 0`.
    Clear,
    /// `accumulator = memory[arg]`.
    At,
    /// `memory[arg] = accumulator`.
    Set,
    /// Insert the accumulator at `arg`, shifting later cells right.
    Insert,
    /// Remove the cell at `arg`, shifting later cells left.
    Erase,
    /// `accumulator += arg`.
    AddConst,
    /// `accumulator -= arg`.
    SubConst,
    /// `accumulator *= arg`.
    MulConst,
    /// `accumulator /= arg`.
    DivConst,
    /// `accumulator += memory[arg]`.
    AddMem,
    /// `accumulator -= memory[arg]`.
    SubMem,
    /// `accumulator *= memory[arg]`.
    MulMem,
    /// `accumulator /= memory[arg]`.
    DivMem,
    /// Unconditional relative jump by `arg`.
    JumpRel,
    /// Relative jump by `arg` when the accumulator is zero.
    JumpZero,
    /// Relative jump by `arg` when the accumulator is non-zero.
    JumpNZero,
    /// No effect.
    Noop,
    /// Stop with `HALTED`.
    Halt,
    /// Emit the accumulator on the output channel.
    Output,
    /// Require at least `arg` memory cells.
    CheckMem,
    /// Unrecognized mnemonic; always faults when evaluated.
    #[serde(rename = "UNKNOWN_INSTRUCTION")]
    Unknown,
}

/// Coarse grouping used by execution statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpClass {
    /// Accumulator/memory transfer and memory reshaping (`CLEAR`, `AT`, `SET`, `INSERT`, `ERASE`).
    Transfer,
    /// Arithmetic against an immediate.
    ConstArith,
    /// Arithmetic against a memory cell.
    MemArith,
    /// Relative jumps.
    Control,
    /// `NOOP`, `HALT`, `OUTPUT`, `CHECKMEM` and `UNKNOWN`.
    System,
}

impl Operation {
    /// All decodable operations, in catalog order. `Unknown` is excluded.
    pub const ALL: [Self; 20] = [
        Self::Clear,
        Self::At,
        Self::Set,
        Self::Insert,
        Self::Erase,
        Self::AddConst,
        Self::SubConst,
        Self::MulConst,
        Self::DivConst,
        Self::AddMem,
        Self::SubMem,
        Self::MulMem,
        Self::DivMem,
        Self::JumpRel,
        Self::JumpZero,
        Self::JumpNZero,
        Self::Noop,
        Self::Halt,
        Self::Output,
        Self::CheckMem,
    ];

    /// Looks up an operation by its exact upper-case mnemonic.
    ///
    /// Returns `None` for anything not in the catalog, including the
    /// `UNKNOWN_INSTRUCTION` placeholder itself.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == mnemonic)
    }

    /// Source mnemonic for this operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Clear => "CLEAR",
            Self::At => "AT",
            Self::Set => "SET",
            Self::Insert => "INSERT",
            Self::Erase => "ERASE",
            Self::AddConst => "ADDCONST",
            Self::SubConst => "SUBCONST",
            Self::MulConst => "MULCONST",
            Self::DivConst => "DIVCONST",
            Self::AddMem => "ADDMEM",
            Self::SubMem => "SUBMEM",
            Self::MulMem => "MULMEM",
            Self::DivMem => "DIVMEM",
            Self::JumpRel => "JUMPREL",
            Self::JumpZero => "JUMPZERO",
            Self::JumpNZero => "JUMPNZERO",
            Self::Noop => "NOOP",
            Self::Halt => "HALT",
            Self::Output => "OUTPUT",
            Self::CheckMem => "CHECKMEM",
            Self::Unknown => UNKNOWN_MNEMONIC,
        }
    }

    /// Statistics class of this operation.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Clear | Self::At | Self::Set | Self::Insert | Self::Erase => OpClass::Transfer,
            Self::AddConst | Self::SubConst | Self::MulConst | Self::DivConst => {
                OpClass::ConstArith
            }
            Self::AddMem | Self::SubMem | Self::MulMem | Self::DivMem => OpClass::MemArith,
            Self::JumpRel | Self::JumpZero | Self::JumpNZero => OpClass::Control,
            Self::Noop | Self::Halt | Self::Output | Self::CheckMem | Self::Unknown => {
                OpClass::System
            }
        }
    }

    /// Returns `true` for the relative jump family.
    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::JumpRel | Self::JumpZero | Self::JumpNZero)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
