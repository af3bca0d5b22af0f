// src/validation/mod.rs

//! Precondition checks the simulation engine runs before touching a register.
//!
//! Every guard is a pure function returning `Result<(), GuardError>`. Whether a
//! failure is recoverable or fatal is decided by the caller, typically through
//! [`crate::boundary::GuardBoundary`].

use crate::core::{GuardError, QubitRole, MAX_QUBITS};
use crate::diagnostics;

/// How qubit indices are checked against the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Only the upper bound is checked. Negative indices pass, matching the
    /// legacy C guards.
    Faithful,
    /// Negative indices are rejected with `GuardError::NegativeQubitIndex`.
    #[default]
    Strict,
}

// --- Helper Functions ---

/// Logs a failure and hands it back as an `Err`.
fn fail(err: GuardError) -> Result<(), GuardError> {
    diagnostics::guard_failed(&err);
    Err(err)
}

/// Checks a single index against the register size under `policy`.
fn check_index(
    policy: IndexPolicy,
    role: QubitRole,
    index: i32,
    num_qubits: i32,
) -> Result<(), GuardError> {
    if policy == IndexPolicy::Strict && index < 0 {
        return fail(GuardError::NegativeQubitIndex { role, index });
    }
    if index >= num_qubits {
        return fail(GuardError::QubitIndexOutOfRange { role, index, num_qubits });
    }
    Ok(())
}

// --- Public Validation Functions ---

/// Checks the qubit pair of a controlled gate, under `IndexPolicy::Strict`.
/// See [`validate_control_target_with`].
pub fn validate_control_target(
    control: i32,
    target: i32,
    num_qubits: i32,
) -> Result<(), GuardError> {
    validate_control_target_with(IndexPolicy::Strict, control, target, num_qubits)
}

/// Checks the qubit pair of a controlled gate.
///
/// # Arguments
/// * `policy` - Whether negative indices are rejected.
/// * `control` - Index of the control qubit.
/// * `target` - Index of the target qubit.
/// * `num_qubits` - Size of the register both indices refer to.
///
/// # Returns
/// * `Ok(())` if both indices are in range and distinct.
/// * `Err(GuardError::QubitIndexOutOfRange)` if either index is `>= num_qubits`
///   (control is checked first).
/// * `Err(GuardError::DegenerateControlTarget)` if they are equal.
/// * `Err(GuardError::NegativeQubitIndex)` under `IndexPolicy::Strict` only.
pub fn validate_control_target_with(
    policy: IndexPolicy,
    control: i32,
    target: i32,
    num_qubits: i32,
) -> Result<(), GuardError> {
    check_index(policy, QubitRole::Control, control, num_qubits)?;
    check_index(policy, QubitRole::Target, target, num_qubits)?;
    if control == target {
        return fail(GuardError::DegenerateControlTarget { qubit: control });
    }
    Ok(())
}

/// Checks the target of a single-qubit gate, under `IndexPolicy::Strict`.
pub fn validate_target(target: i32, num_qubits: i32) -> Result<(), GuardError> {
    validate_target_with(IndexPolicy::Strict, target, num_qubits)
}

/// Checks the target of a single-qubit gate.
///
/// # Returns
/// * `Ok(())` if `target < num_qubits` (and non-negative under `Strict`).
/// * `Err(GuardError)` naming the violated bound otherwise.
pub fn validate_target_with(
    policy: IndexPolicy,
    target: i32,
    num_qubits: i32,
) -> Result<(), GuardError> {
    check_index(policy, QubitRole::Target, target, num_qubits)
}

/// Checks a requested register size against `1..=MAX_QUBITS`.
pub fn validate_num_qubits(num_qubits: i32) -> Result<(), GuardError> {
    diagnostics::qubit_count_checked(num_qubits);
    if num_qubits <= 0 || num_qubits > MAX_QUBITS {
        return fail(GuardError::InvalidQubitCount { requested: num_qubits, max: MAX_QUBITS });
    }
    Ok(())
}

/// Checks that an allocation requests at least one element.
pub fn validate_memory_allocation_size(num_values: i64) -> Result<(), GuardError> {
    if num_values <= 0 {
        return fail(GuardError::NonPositiveAllocation { requested: num_values });
    }
    Ok(())
}

/// Checks that a register handle was actually produced by the allocator.
///
/// The register is opaque here, so any handle type is accepted. `num_qubits`
/// is only reported in the trace and in the error; it is not validated.
///
/// # Returns
/// * `Ok(())` if `register` is `Some`.
/// * `Err(GuardError::NullRegister)` if it is `None`.
pub fn validate_register_allocation<R: ?Sized>(
    register: Option<&R>,
    num_qubits: i32,
) -> Result<(), GuardError> {
    diagnostics::register_checked(num_qubits);
    match register {
        Some(_) => Ok(()),
        None => fail(GuardError::NullRegister { num_qubits }),
    }
}

/// Builds the error for a QASM buffer overflow the caller has already detected.
///
/// There is no condition to check; the call itself is the failure. Use
/// [`crate::boundary::GuardBoundary::raise_qasm_buffer_overflow`] to terminate.
pub fn raise_qasm_buffer_overflow() -> GuardError {
    let err = GuardError::QasmBufferOverflow;
    diagnostics::guard_failed(&err);
    err
}
