//! Instruction evaluation.
//!
//! Central dispatch over the closed [`Operation`] set. Every handler either
//! yields a [`Flow`] telling the cycle loop how to move the cursor, or a
//! [`Fault`] that stops the machine without moving it.
//!
//! Arithmetic is two's-complement wrapping on `i64`; division truncates
//! toward zero and only faults on a zero divisor.

use crate::common::Fault;
use crate::core::machine::Gvm;
use crate::core::output::OutputSink;
use crate::isa::{Instruction, Operation};

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance the cursor by this signed distance.
    Next(i64),
    /// Stop with `HALTED`.
    Halt,
}

/// Step taken by every non-jump instruction.
const NEXT: Flow = Flow::Next(1);

#[derive(Debug, Clone, Copy)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy)]
enum JumpCond {
    Always,
    Zero,
    NonZero,
}

impl<O: OutputSink> Gvm<O> {
    /// Evaluates one instruction against the accumulator and memory.
    pub(crate) fn evaluate(&mut self, inst: Instruction) -> Result<Flow, Fault> {
        let op = inst.operation;
        let arg = inst.argument;

        match op {
            Operation::Clear => self.accumulator = 0,
            Operation::At => self.accumulator = self.memory.read(op, arg)?,
            Operation::Set => self.memory.write(arg, self.accumulator)?,
            Operation::Insert => self.memory.insert(arg, self.accumulator)?,
            Operation::Erase => {
                let _ = self.memory.erase(arg)?;
            }

            Operation::AddConst => self.handle_const(op, ArithOp::Add, arg)?,
            Operation::SubConst => self.handle_const(op, ArithOp::Sub, arg)?,
            Operation::MulConst => self.handle_const(op, ArithOp::Mul, arg)?,
            Operation::DivConst => self.handle_const(op, ArithOp::Div, arg)?,

            Operation::AddMem => self.handle_mem(op, ArithOp::Add, arg)?,
            Operation::SubMem => self.handle_mem(op, ArithOp::Sub, arg)?,
            Operation::MulMem => self.handle_mem(op, ArithOp::Mul, arg)?,
            Operation::DivMem => self.handle_mem(op, ArithOp::Div, arg)?,

            Operation::JumpRel => return self.handle_jump(op, JumpCond::Always, arg),
            Operation::JumpZero => return self.handle_jump(op, JumpCond::Zero, arg),
            Operation::JumpNZero => return self.handle_jump(op, JumpCond::NonZero, arg),

            Operation::Noop => {}
            Operation::Halt => return Ok(Flow::Halt),
            Operation::Output => {
                self.output.emit(self.accumulator);
                if self.config.general.collect_stats {
                    self.stats.record_output();
                }
            }
            Operation::CheckMem => {
                let len = self.memory.len();
                if i64::try_from(len).is_ok_and(|l| l < arg) {
                    return Err(Fault::InsufficientMemory { required: arg, len });
                }
            }
            Operation::Unknown => {
                return Err(Fault::UnknownInstruction {
                    position: self.program.cursor(),
                });
            }
        }

        Ok(NEXT)
    }

    fn handle_const(&mut self, operation: Operation, kind: ArithOp, constant: i64) -> Result<(), Fault> {
        self.accumulator = combine(operation, kind, self.accumulator, constant)?;
        Ok(())
    }

    fn handle_mem(&mut self, operation: Operation, kind: ArithOp, location: i64) -> Result<(), Fault> {
        let operand = self.memory.read(operation, location)?;
        self.accumulator = combine(operation, kind, self.accumulator, operand)?;
        Ok(())
    }

    fn handle_jump(&mut self, operation: Operation, cond: JumpCond, distance: i64) -> Result<Flow, Fault> {
        if distance == 0 {
            return Err(Fault::ZeroJump { operation });
        }
        let taken = match cond {
            JumpCond::Always => true,
            JumpCond::Zero => self.accumulator == 0,
            JumpCond::NonZero => self.accumulator != 0,
        };
        if !taken {
            return Ok(NEXT);
        }
        if self.config.general.collect_stats {
            self.stats.record_jump_taken();
        }
        Ok(Flow::Next(distance))
    }
}

fn combine(operation: Operation, kind: ArithOp, lhs: i64, rhs: i64) -> Result<i64, Fault> {
    Ok(match kind {
        ArithOp::Add => lhs.wrapping_add(rhs),
        ArithOp::Sub => lhs.wrapping_sub(rhs),
        ArithOp::Mul => lhs.wrapping_mul(rhs),
        ArithOp::Div => {
            if rhs == 0 {
                return Err(Fault::DivisionByZero { operation });
            }
            lhs.wrapping_div(rhs)
        }
    })
}
