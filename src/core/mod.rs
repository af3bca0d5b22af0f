// src/core/mod.rs

//! Core types shared by the guards and the measurement generator

// Declare modules within core
pub mod error;

// Re-export public types for convenient access via `qguard::core::TypeName`
pub use error::{GuardError, QubitRole};

pub mod constants;
pub use constants::qguard_constants::{FAILURE_EXIT_CODE, MAX_QUBITS}; // Re-export
