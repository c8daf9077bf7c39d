//! Shared test infrastructure.

/// Instruction and program builders.
pub mod builder;


/// Mock trait implementations.
pub mod mocks;
