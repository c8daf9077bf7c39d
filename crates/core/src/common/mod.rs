//! Common types shared across the machine.
//!
//! This module provides:
//! 1. **Status:** The lifecycle state register reported by every mutating call.
//! 2. **Error Handling:** Environment errors and program fault definitions.

/// Error and fault definitions.
pub mod error;

/// Machine status register.
pub mod status;

pub use error::{Fault, GvmError};
pub use status::Status;
