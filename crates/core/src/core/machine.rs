//! The GVM machine.
//!
//! [`Gvm`] owns every piece of machine state: the loaded program and its
//! cursor, data memory, the accumulator, the status register, the last fault
//! and the execution statistics. All state is instance-scoped, so any number
//! of machines can coexist.
//!
//! Lifecycle:
//! 1. **Load:** `WAITING` → `READY` (or `WAITING` for an empty program,
//!    `ERRORED` for an undecodable one).
//! 2. **Run/Step:** `READY` → `RUNNING` → `HALTED` or `ERRORED`.
//! 3. **Reset:** any state → `WAITING`.
//!
//! Calling `load` or `run` in the wrong state is not an error: the call does
//! nothing and returns the current status.

use std::fmt::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::common::{Fault, GvmError, Status};
use crate::config::Config;
use crate::core::execute::Flow;
use crate::core::memory::DataMemory;
use crate::core::output::{ConsoleSink, OutputSink};
use crate::core::program::{Advance, Program};
use crate::isa::Instruction;
use crate::sim::loader;
use crate::stats::ExecStats;

/// Serializable view of a machine at one point in time.
#[derive(Clone, Debug, Serialize)]
pub struct MachineSnapshot {
    /// Status register.
    pub status: Status,
    /// Accumulator value.
    pub accumulator: i64,
    /// Copy of data memory.
    pub memory: Vec<i64>,
    /// Cursor position within the program.
    pub cursor: usize,
    /// Number of loaded instructions.
    pub program_len: usize,
    /// Why the machine errored, if it did.
    pub fault: Option<Fault>,
    /// Execution statistics.
    pub stats: ExecStats,
}

/// Accumulator virtual machine.
///
/// Generic over the sink that receives `OUTPUT` values; the default writes
/// to the console.
pub struct Gvm<O: OutputSink = ConsoleSink> {
    pub(crate) status: Status,
    pub(crate) accumulator: i64,
    pub(crate) memory: DataMemory,
    pub(crate) program: Program,
    pub(crate) fault: Option<Fault>,
    pub(crate) stats: ExecStats,
    pub(crate) config: Config,
    pub(crate) output: O,
}

impl Gvm<ConsoleSink> {
    /// Creates a machine with the default configuration, writing `OUTPUT`
    /// values to stdout.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a console machine; `config.output.to_stderr` picks the stream.
    pub fn with_config(config: Config) -> Self {
        let sink = if config.output.to_stderr {
            ConsoleSink::stderr()
        } else {
            ConsoleSink::stdout()
        };
        Self::with_output(config, sink)
    }
}

impl Default for Gvm<ConsoleSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputSink> Gvm<O> {
    /// Creates a machine in `WAITING` that emits `OUTPUT` values to `output`.
    pub fn with_output(config: Config, output: O) -> Self {
        Self {
            status: Status::Waiting,
            accumulator: 0,
            memory: DataMemory::new(),
            program: Program::default(),
            fault: None,
            stats: ExecStats::default(),
            config,
            output,
        }
    }

    /// Loads a program file and the initial data memory.
    ///
    /// Returns the resulting status: `READY` on success, `WAITING` if the
    /// file holds no instructions, `ERRORED` if a line does not decode. On a
    /// machine that is not `WAITING` the call is a no-op and the file is not
    /// opened.
    ///
    /// # Errors
    ///
    /// [`GvmError::Io`] if the file cannot be read. The machine is unchanged.
    pub fn load(
        &mut self,
        path: impl AsRef<Path>,
        initial_memory: Vec<i64>,
    ) -> Result<Status, GvmError> {
        if self.status != Status::Waiting {
            tracing::debug!(status = %self.status, "load rejected");
            return Ok(self.status);
        }
        let source = loader::read_source(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "program file read");
        Ok(self.load_source(&source, initial_memory))
    }

    /// Decodes `source` and loads it with the initial data memory.
    ///
    /// Same guards and transitions as [`Gvm::load`].
    pub fn load_source(&mut self, source: &str, initial_memory: Vec<i64>) -> Status {
        if self.status != Status::Waiting {
            tracing::debug!(status = %self.status, "load rejected");
            return self.status;
        }
        match loader::decode_program(source) {
            Ok(program) => self.install(program, initial_memory),
            Err(fault) => self.reject_program(fault),
        }
    }

    /// Loads already-decoded instructions with the initial data memory.
    ///
    /// Any [`Operation::Unknown`](crate::isa::Operation::Unknown) in the
    /// sequence puts the machine in `ERRORED`.
    pub fn load_instructions(
        &mut self,
        instructions: Vec<Instruction>,
        initial_memory: Vec<i64>,
    ) -> Status {
        if self.status != Status::Waiting {
            tracing::debug!(status = %self.status, "load rejected");
            return self.status;
        }
        if let Some(position) = instructions.iter().position(Instruction::is_unknown) {
            return self.reject_program(Fault::UnknownInstruction { position });
        }
        self.install(instructions, initial_memory)
    }

    fn install(&mut self, instructions: Vec<Instruction>, initial_memory: Vec<i64>) -> Status {
        self.program = Program::new(instructions);
        self.memory.replace(initial_memory);
        self.status = if self.program.is_empty() {
            Status::Waiting
        } else {
            Status::Ready
        };
        tracing::debug!(
            instructions = self.program.len(),
            memory = self.memory.len(),
            status = %self.status,
            "program loaded"
        );
        self.status
    }

    fn reject_program(&mut self, fault: Fault) -> Status {
        self.program.clear();
        self.raise(fault);
        self.status
    }

    /// Runs a `READY` machine until it halts or errors.
    ///
    /// There is no step limit: a program that loops forever never returns.
    /// Hosts that need a bound drive the machine with [`Gvm::step`] instead.
    /// On any other status the call is a no-op.
    pub fn run(&mut self) -> Status {
        if self.status != Status::Ready {
            tracing::debug!(status = %self.status, "run rejected");
            return self.status;
        }
        self.begin();
        while self.status == Status::Running {
            self.cycle();
        }
        tracing::debug!(
            status = %self.status,
            instructions = self.stats.instructions,
            "run finished"
        );
        self.status
    }

    /// Executes exactly one instruction.
    ///
    /// A `READY` machine enters `RUNNING` at the first instruction. A
    /// `RUNNING` machine evaluates the instruction under the cursor. Every
    /// other status is returned unchanged.
    pub fn step(&mut self) -> Status {
        match self.status {
            Status::Ready => self.begin(),
            Status::Running => {}
            other => return other,
        }
        self.cycle();
        self.status
    }

    fn begin(&mut self) {
        self.program.rewind();
        self.status = Status::Running;
    }

    /// One fetch–evaluate–advance iteration.
    fn cycle(&mut self) {
        let Some(inst) = self.program.current() else {
            self.status = Status::Halted;
            return;
        };

        if self.config.general.trace_instructions {
            tracing::trace!(
                position = self.program.cursor(),
                instruction = %inst,
                accumulator = self.accumulator,
                "evaluate"
            );
        }
        if self.config.general.collect_stats {
            self.stats.record(inst.operation);
        }

        match self.evaluate(inst) {
            Ok(Flow::Halt) => self.status = Status::Halted,
            Ok(Flow::Next(distance)) => match self.program.advance(distance) {
                Ok(Advance::InBounds) => {}
                Ok(Advance::PastEnd) => self.status = Status::Halted,
                Err(fault) => self.raise(fault),
            },
            Err(fault) => self.raise(fault),
        }
    }

    pub(crate) fn raise(&mut self, fault: Fault) {
        tracing::warn!(position = self.program.cursor(), %fault, "machine errored");
        self.fault = Some(fault);
        self.status = Status::Errored;
    }

    /// Discards program, memory, accumulator, fault and statistics and
    /// returns to `WAITING`.
    pub fn reset(&mut self) -> Status {
        self.accumulator = 0;
        self.memory.clear();
        self.program.clear();
        self.fault = None;
        self.stats = ExecStats::default();
        self.status = Status::Waiting;
        tracing::debug!("machine reset");
        self.status
    }

    /// Current status.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Current accumulator value.
    #[inline]
    pub const fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// Snapshot of data memory.
    pub fn data_mem(&self) -> Vec<i64> {
        self.memory.to_vec()
    }

    /// Borrowed view of data memory.
    pub fn memory(&self) -> &[i64] {
        self.memory.as_slice()
    }

    /// Loaded instructions.
    pub fn instructions(&self) -> &[Instruction] {
        self.program.instructions()
    }

    /// Cursor position.
    pub const fn cursor(&self) -> usize {
        self.program.cursor()
    }

    /// The fault that moved the machine to `ERRORED`, if any.
    pub const fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Execution statistics since construction or the last reset.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Output sink.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Mutable output sink.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Consumes the machine and returns its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Serializable snapshot of the current state.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            status: self.status,
            accumulator: self.accumulator,
            memory: self.data_mem(),
            cursor: self.program.cursor(),
            program_len: self.program.len(),
            fault: self.fault.clone(),
            stats: self.stats.clone(),
        }
    }

    /// Renders status, accumulator and optionally memory and instructions.
    pub fn render(&self, print_data: bool, print_instructions: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Status: {}", self.status);
        let _ = writeln!(out, "Accumulator: {}", self.accumulator);
        if let Some(fault) = &self.fault {
            let _ = writeln!(out, "Fault: {fault}");
        }
        if print_data {
            let _ = writeln!(out, "*** Data Memory ***");
            for (i, value) in self.memory.as_slice().iter().enumerate() {
                let _ = writeln!(out, "Location {i}: {value}");
            }
        }
        if print_instructions {
            let _ = writeln!(out, "*** Instruction Memory ***");
            for (i, inst) in self.program.instructions().iter().enumerate() {
                let _ = writeln!(out, "Instruction {i}: {inst}");
            }
        }
        out
    }

    /// Prints [`Gvm::render`] to stdout.
    pub fn dump(&self, print_data: bool, print_instructions: bool) {
        print!("{}", self.render(print_data, print_instructions));
    }
}

impl<O: OutputSink> fmt::Debug for Gvm<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gvm")
            .field("status", &self.status)
            .field("accumulator", &self.accumulator)
            .field("memory", &self.memory)
            .field("program", &self.program)
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}
