//! Execution statistics collection and reporting.
//!
//! This module tracks per-machine counters. It provides:
//! 1. **Throughput:** Instructions evaluated and wall-clock time since the last reset.
//! 2. **Instruction mix:** Counts by [`OpClass`].
//! 3. **Control flow:** Jumps evaluated and jumps taken.
//! 4. **Channel activity:** Values emitted by `OUTPUT`.

use std::time::Instant;

use serde::Serialize;

use crate::isa::{OpClass, Operation};

/// Execution statistics for one machine.
#[derive(Clone, Debug, Serialize)]
pub struct ExecStats {
    #[serde(skip)]
    start_time: Instant,
    /// Instructions evaluated, including the one that faulted or halted.
    pub instructions: u64,

    /// Count of transfer instructions (`CLEAR`, `AT`, `SET`, `INSERT`, `ERASE`).
    pub inst_transfer: u64,
    /// Count of constant arithmetic instructions.
    pub inst_const_arith: u64,
    /// Count of memory arithmetic instructions.
    pub inst_mem_arith: u64,
    /// Count of jump instructions.
    pub inst_control: u64,
    /// Count of `NOOP`, `HALT`, `OUTPUT`, `CHECKMEM` and `UNKNOWN`.
    pub inst_system: u64,

    /// Jumps whose condition held, moving the cursor by their argument.
    pub jumps_taken: u64,
    /// Values written to the output channel.
    pub outputs: u64,
}

impl Default for ExecStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            inst_transfer: 0,
            inst_const_arith: 0,
            inst_mem_arith: 0,
            inst_control: 0,
            inst_system: 0,
            jumps_taken: 0,
            outputs: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"control"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

impl ExecStats {
    /// Records one evaluated instruction.
    pub const fn record(&mut self, operation: Operation) {
        self.instructions += 1;
        match operation.class() {
            OpClass::Transfer => self.inst_transfer += 1,
            OpClass::ConstArith => self.inst_const_arith += 1,
            OpClass::MemArith => self.inst_mem_arith += 1,
            OpClass::Control => self.inst_control += 1,
            OpClass::System => self.inst_system += 1,
        }
    }

    /// Records a jump that moved the cursor by its argument.
    #[inline]
    pub const fn record_jump_taken(&mut self) {
        self.jumps_taken += 1;
    }

    /// Records a value written by `OUTPUT`.
    #[inline]
    pub const fn record_output(&mut self) {
        self.outputs += 1;
    }

    /// Renders the requested sections as text.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an
    /// empty slice renders everything.
    pub fn render_sections(&self, sections: &[String]) -> String {
        use std::fmt::Write;

        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "GVM EXECUTION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "host_seconds             {seconds:.4} s");
            let _ = writeln!(out, "vm_insts                 {}", self.instructions);
            let _ = writeln!(out, "vm_outputs               {}", self.outputs);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            for (name, count) in [
                ("op.transfer", self.inst_transfer),
                ("op.const_arith", self.inst_const_arith),
                ("op.mem_arith", self.inst_mem_arith),
                ("op.control", self.inst_control),
                ("op.system", self.inst_system),
            ] {
                let _ = writeln!(out, "  {name:<20} {count} ({:.2}%)", pct(count));
            }
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("control") {
            let taken_rate = if self.inst_control > 0 {
                (self.jumps_taken as f64 / self.inst_control as f64) * 100.0
            } else {
                0.0
            };
            let _ = writeln!(out, "CONTROL FLOW");
            let _ = writeln!(out, "  jumps.evaluated        {}", self.inst_control);
            let _ = writeln!(out, "  jumps.taken            {}", self.jumps_taken);
            let _ = writeln!(out, "  jumps.taken_rate       {taken_rate:.2}%");
        }
        let _ = writeln!(out, "==========================================================");
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
