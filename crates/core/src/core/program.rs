//! Instruction sequence and cursor.
//!
//! The program is a contiguous, immutable list of instructions with an index
//! cursor. The cursor moves by signed relative distances:
//! 1. **Forward:** Stops at the past-the-end position if the distance overshoots.
//! 2. **Backward:** Clamps at the first instruction; overshooting is not an error.
//! 3. **Zero:** Rejected with [`Fault::ZeroStep`].

use crate::common::Fault;
use crate::isa::Instruction;

/// Where the cursor landed after [`Program::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The cursor addresses an instruction.
    InBounds,
    /// The cursor is past the last instruction.
    PastEnd,
}

/// Loaded instruction sequence with its cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    cursor: usize,
}

impl Program {
    /// Creates a program with the cursor on the first instruction.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            cursor: 0,
        }
    }

    /// Number of instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if no instructions are loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Borrows the instructions.
    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Current cursor position; equals `len()` when past the end.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Instruction under the cursor, or `None` past the end.
    #[inline]
    pub fn current(&self) -> Option<Instruction> {
        self.instructions.get(self.cursor).copied()
    }

    /// Returns `true` if the cursor is past the last instruction.
    #[inline]
    pub fn is_past_end(&self) -> bool {
        self.cursor >= self.instructions.len()
    }

    /// Moves the cursor back to the first instruction.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Drops every instruction and rewinds.
    pub fn clear(&mut self) {
        self.instructions.clear();
        self.cursor = 0;
    }

    /// Moves the cursor by `distance` positions.
    ///
    /// # Errors
    ///
    /// [`Fault::ZeroStep`] if `distance` is 0; the cursor does not move.
    pub fn advance(&mut self, distance: i64) -> Result<Advance, Fault> {
        if distance == 0 {
            return Err(Fault::ZeroStep);
        }

        let magnitude = usize::try_from(distance.unsigned_abs()).unwrap_or(usize::MAX);
        let end = self.instructions.len();
        self.cursor = if distance > 0 {
            self.cursor.saturating_add(magnitude).min(end)
        } else {
            self.cursor.saturating_sub(magnitude)
        };

        Ok(if self.cursor >= end {
            Advance::PastEnd
        } else {
            Advance::InBounds
        })
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}
