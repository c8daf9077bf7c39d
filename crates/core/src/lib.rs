//! GVM accumulator virtual machine library.
//!
//! This crate implements a small accumulator machine that executes textual
//! GVM programs against a resizable array of signed integer cells:
//! 1. **ISA:** The closed operation set, decoded instructions and disassembly.
//! 2. **Loader:** Program text and file decoding.
//! 3. **Core:** The machine, its memory, cursor, evaluator and output channel.
//! 4. **Support:** Configuration and execution statistics.
//!
//! ```
//! use gvm_core::{BufferSink, Config, Gvm, Status};
//!
//! let mut vm = Gvm::with_output(Config::default(), BufferSink::new());
//! assert_eq!(vm.load_source("AT 0\nOUTPUT\nHALT\n", vec![42]), Status::Ready);
//! assert_eq!(vm.run(), Status::Halted);
//! assert_eq!(vm.output().values(), &[42]);
//! assert_eq!(vm.accumulator(), 42);
//! ```

/// Common types (status register, errors and faults).
pub mod common;
/// Engine configuration (defaults and JSON loading).
pub mod config;
/// Execution engine (machine, evaluator, memory, program, output).
pub mod core;
/// Instruction set (operations, instructions, disassembly).
pub mod isa;
/// Program loading.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Environment errors and program faults.
pub use crate::common::{Fault, GvmError, Status};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The machine and its output sinks.
pub use crate::core::{BufferSink, ConsoleSink, Gvm, MachineSnapshot, OutputSink};
/// Decoded instruction and operation tag.
pub use crate::isa::{Instruction, Operation};
