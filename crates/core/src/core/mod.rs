//! GVM execution engine.
//!
//! This module contains the machine and the pieces it owns:
//! 1. **Machine:** Lifecycle, fetch–evaluate–advance loop and inspection.
//! 2. **Evaluation:** Dispatch over the operation set.
//! 3. **Memory:** Bounds-checked resizable data memory.
//! 4. **Program:** Instruction sequence and relative-jump cursor.
//! 5. **Output:** The channel `OUTPUT` writes to.

mod execute;

/// Machine state, lifecycle and inspection.
pub mod machine;

/// Bounds-checked data memory.
pub mod memory;

/// `OUTPUT` sinks.
pub mod output;

/// Instruction sequence and cursor.
pub mod program;

pub use machine::{Gvm, MachineSnapshot};
pub use memory::DataMemory;
pub use output::{BufferSink, ConsoleSink, OutputSink};
pub use program::{Advance, Program};
