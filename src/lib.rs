// src/lib.rs

//! `qguard` - Precondition guards and measurement randomness for a quantum
//! register simulator.
//!
//! The host engine owns registers, circuit state and QASM output. This crate
//! only answers two questions for it: "may I use this index, size or handle?"
//! and "give me a uniform draw for this measurement".

pub mod core;
pub mod rng;
pub mod validation;
pub mod boundary;
pub mod diagnostics;

// Re-export the most common types for easier top-level use
pub use crate::core::{GuardError, QubitRole, FAILURE_EXIT_CODE, MAX_QUBITS};
pub use rng::{MeasurementRng, SeedSource};
pub use boundary::{GuardBoundary, ProcessExit, Terminator, ValidationMode};
pub use diagnostics::print_info;
pub use validation::{
    IndexPolicy,
    validate_control_target,
    validate_target,
    validate_num_qubits,
    validate_memory_allocation_size,
    validate_register_allocation,
    raise_qasm_buffer_overflow,
};

// Example 1: Guarding a controlled gate
// The engine checks its operands before touching the state vector, and
// recovers from a bad pair instead of losing the whole process.
/// ```
/// use qguard::{validate_num_qubits, validate_control_target, GuardError, QubitRole};
///
/// validate_num_qubits(5)?;
/// validate_control_target(1, 3, 5)?;
///
/// match validate_control_target(2, 2, 5) {
///     Err(GuardError::DegenerateControlTarget { qubit }) => assert_eq!(qubit, 2),
///     other => panic!("expected a degenerate pair, got {:?}", other),
/// }
/// match validate_control_target(0, 7, 5) {
///     Err(GuardError::QubitIndexOutOfRange { role, .. }) => assert_eq!(role, QubitRole::Target),
///     other => panic!("expected an out-of-range target, got {:?}", other),
/// }
/// # Ok::<(), GuardError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Reproducible measurements
// Two generators reseeded from the same key array yield the same draws.
/// ```
/// use qguard::MeasurementRng;
///
/// let mut first = MeasurementRng::new();
/// let mut second = MeasurementRng::new();
/// first.reseed(&[42], 1)?;
/// second.reseed(&[42], 1)?;
///
/// for _ in 0..2 {
///     let draw = first.draw();
///     assert!((0.0..1.0).contains(&draw));
///     assert_eq!(draw, second.draw());
/// }
/// # Ok::<(), qguard::GuardError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
