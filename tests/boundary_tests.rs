// tests/boundary_tests.rs

use qguard::{GuardBoundary, GuardError, IndexPolicy, Terminator, ValidationMode};

/// Unwinds with the exit status instead of ending the test process.
struct PanicExit;

impl Terminator for PanicExit {
    fn terminate(&self, code: i32) -> ! {
        panic!("terminated with status {}", code)
    }
}

fn aborting(silent: bool) -> GuardBoundary {
    GuardBoundary::new()
        .with_mode(ValidationMode::Abort { silent })
        .with_terminator(PanicExit)
}

#[test]
fn test_recoverable_boundary_returns_typed_errors() -> Result<(), GuardError> {
    let boundary = GuardBoundary::new();
    boundary.validate_num_qubits(5)?;
    boundary.validate_control_target(1, 3, 5)?;
    boundary.validate_target(4, 5)?;
    boundary.validate_memory_allocation_size(1024)?;
    boundary.validate_register_allocation(Some(&[0u8; 1]), 1)?;

    assert_eq!(
        boundary.validate_control_target(2, 2, 5),
        Err(GuardError::DegenerateControlTarget { qubit: 2 })
    );
    assert!(boundary.validate_target(-1, 5).is_err());
    Ok(())
}

#[test]
fn test_abort_boundary_passes_valid_input() -> Result<(), GuardError> {
    let boundary = aborting(true);
    boundary.validate_num_qubits(50)?;
    boundary.validate_control_target(0, 1, 2)?;
    Ok(())
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_abort_on_zero_qubits() {
    let _ = aborting(true).validate_num_qubits(0);
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_abort_on_degenerate_pair() {
    let _ = aborting(false).validate_control_target(2, 2, 5);
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_abort_on_null_register() {
    let _ = aborting(true).validate_register_allocation::<u8>(None, 3);
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_abort_on_negative_allocation() {
    let _ = aborting(true).validate_memory_allocation_size(-5);
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_qasm_overflow_terminates_even_when_recoverable() {
    GuardBoundary::new().with_terminator(PanicExit).raise_qasm_buffer_overflow();
}

#[test]
#[should_panic(expected = "terminated with status 1")]
fn test_check_wraps_rng_failures() {
    let mut rng = qguard::MeasurementRng::new();
    let _ = aborting(true).check(rng.reseed(&[], 0));
}

#[test]
fn test_faithful_boundary_skips_negative_check() -> Result<(), GuardError> {
    let boundary = GuardBoundary::faithful().with_terminator(PanicExit);
    boundary.validate_target(-7, 3)?;
    boundary.validate_control_target(-1, 2, 3)?;
    Ok(())
}

#[test]
fn test_index_policy_can_be_tightened_on_faithful_preset() {
    let boundary = GuardBoundary::faithful()
        .with_mode(ValidationMode::Recoverable)
        .with_index_policy(IndexPolicy::Strict);
    assert!(boundary.validate_target(-7, 3).is_err());
}
