//! Program loading.
//!
//! Provides utilities for reading GVM program text and decoding it into the
//! instruction sequence the engine executes.

pub mod loader;
