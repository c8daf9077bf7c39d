//! GVM data memory.
//!
//! This module implements the machine's resizable array of signed cells. It performs:
//! 1. **Bounds validation:** A single predicate decides whether an operand
//!    addresses an existing cell (`[0, len)`); insertion uses `[0, len]`.
//! 2. **Access:** Reads, writes, insertion and erasure, each reporting a
//!    [`Fault`] instead of panicking on a bad operand.

use crate::common::Fault;
use crate::isa::Operation;

/// Resizable data memory indexed from 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    cells: Vec<i64>,
}

impl DataMemory {
    /// Creates an empty memory.
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if memory holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrows the cells.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    /// Replaces the whole contents.
    pub fn replace(&mut self, cells: Vec<i64>) {
        self.cells = cells;
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the cell index for `location` if it addresses an existing cell.
    #[inline]
    pub fn validate(&self, location: i64) -> Option<usize> {
        usize::try_from(location)
            .ok()
            .filter(|&idx| idx < self.cells.len())
    }

    /// Returns `true` if `location` is in `[0, len)`.
    #[inline]
    pub fn is_valid(&self, location: i64) -> bool {
        self.validate(location).is_some()
    }

    fn checked(&self, operation: Operation, location: i64) -> Result<usize, Fault> {
        self.validate(location).ok_or(Fault::MemoryOutOfBounds {
            operation,
            index: location,
            len: self.cells.len(),
        })
    }

    /// Reads `memory[location]` on behalf of `operation`.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if `location` is outside `[0, len)`.
    pub fn read(&self, operation: Operation, location: i64) -> Result<i64, Fault> {
        self.checked(operation, location).map(|idx| self.cells[idx])
    }

    /// Writes `value` to `memory[location]`.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if `location` is outside `[0, len)`.
    pub fn write(&mut self, location: i64, value: i64) -> Result<(), Fault> {
        let idx = self.checked(Operation::Set, location)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Inserts `value` before `location`, shifting later cells right.
    /// Inserting at `len` appends.
    ///
    /// # Errors
    ///
    /// [`Fault::InvalidInsertion`] if `location` is outside `[0, len]`.
    pub fn insert(&mut self, location: i64, value: i64) -> Result<(), Fault> {
        let len = self.cells.len();
        let idx = usize::try_from(location)
            .ok()
            .filter(|&idx| idx <= len)
            .ok_or(Fault::InvalidInsertion {
                index: location,
                len,
            })?;
        self.cells.insert(idx, value);
        Ok(())
    }

    /// Removes the cell at `location`, shifting later cells left.
    ///
    /// # Errors
    ///
    /// [`Fault::MemoryOutOfBounds`] if `location` is outside `[0, len)`.
    pub fn erase(&mut self, location: i64) -> Result<i64, Fault> {
        let idx = self.checked(Operation::Erase, location)?;
        Ok(self.cells.remove(idx))
    }

    /// Copies the cells out.
    pub fn to_vec(&self) -> Vec<i64> {
        self.cells.clone()
    }
}

impl From<Vec<i64>> for DataMemory {
    fn from(cells: Vec<i64>) -> Self {
        Self { cells }
    }
}
