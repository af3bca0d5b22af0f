//! Error handling logic

use std::fmt;
use thiserror::Error;

use super::constants::qguard_constants::FAILURE_EXIT_CODE;

/// Which index of a gate application a guard was checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QubitRole {
    /// The controlling qubit of a two-qubit gate.
    Control,
    /// The qubit a gate acts upon.
    Target,
}

impl fmt::Display for QubitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitRole::Control => write!(f, "control"),
            QubitRole::Target => write!(f, "target"),
        }
    }
}

/// Violated preconditions reported by the guards.
/// Each variant carries the offending values so a host can log or present them.
/// At the fatal boundary every variant collapses to the same exit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)] // Eq useful for testing error variants
pub enum GuardError {
    /// A qubit index is not below the register size.
    #[error("{role} qubit {index} is out of range for a register of {num_qubits} qubits")]
    QubitIndexOutOfRange {
        /// Which index was checked
        role: QubitRole,
        /// The index that was supplied
        index: i32,
        /// Register size it was checked against
        num_qubits: i32,
    },

    /// A qubit index is negative. Only reported under `IndexPolicy::Strict`.
    #[error("{role} qubit {index} is negative")]
    NegativeQubitIndex {
        /// Which index was checked
        role: QubitRole,
        /// The index that was supplied
        index: i32,
    },

    /// Control and target refer to the same qubit.
    #[error("control and target are both qubit {qubit}")]
    DegenerateControlTarget {
        /// The shared index
        qubit: i32,
    },

    /// Requested register size is non-positive or above the supported maximum.
    #[error("invalid number of qubits {requested}: must be in 1..={max}")]
    InvalidQubitCount {
        /// The requested count
        requested: i32,
        /// Largest supported count
        max: i32,
    },

    /// A memory allocation asked for zero or fewer elements.
    #[error("invalid allocation size {requested}: must be positive")]
    NonPositiveAllocation {
        /// The requested element count
        requested: i64,
    },

    /// The register handle is absent.
    #[error("register of {num_qubits} qubits was not allocated")]
    NullRegister {
        /// Size the caller believed the register had
        num_qubits: i32,
    },

    /// The caller detected an overflow of the QASM output buffer.
    #[error("QASM output buffer overflow")]
    QasmBufferOverflow,

    /// Reseeding was attempted with an empty key array.
    #[error("cannot reseed from an empty key array")]
    EmptySeedKeys,
}

impl GuardError {
    /// Process exit status for this failure. Always `1`; the host engine
    /// does not distinguish guards by status.
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }

    /// Stable, machine-friendly tag naming the violated precondition.
    pub fn kind(&self) -> &'static str {
        match self {
            GuardError::QubitIndexOutOfRange { .. } => "qubit_index_out_of_range",
            GuardError::NegativeQubitIndex { .. } => "negative_qubit_index",
            GuardError::DegenerateControlTarget { .. } => "degenerate_control_target",
            GuardError::InvalidQubitCount { .. } => "invalid_qubit_count",
            GuardError::NonPositiveAllocation { .. } => "non_positive_allocation",
            GuardError::NullRegister { .. } => "null_register",
            GuardError::QasmBufferOverflow => "qasm_buffer_overflow",
            GuardError::EmptySeedKeys => "empty_seed_keys",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_values() {
        let err =
            GuardError::QubitIndexOutOfRange { role: QubitRole::Target, index: 7, num_qubits: 5 };
        assert_eq!(err.to_string(), "target qubit 7 is out of range for a register of 5 qubits");

        let err = GuardError::InvalidQubitCount { requested: 51, max: 50 };
        assert_eq!(err.to_string(), "invalid number of qubits 51: must be in 1..=50");
    }

    #[test]
    fn test_every_variant_exits_with_status_one() {
        let all = [
            GuardError::QubitIndexOutOfRange { role: QubitRole::Control, index: 3, num_qubits: 2 },
            GuardError::NegativeQubitIndex { role: QubitRole::Target, index: -1 },
            GuardError::DegenerateControlTarget { qubit: 0 },
            GuardError::InvalidQubitCount { requested: 0, max: 50 },
            GuardError::NonPositiveAllocation { requested: -5 },
            GuardError::NullRegister { num_qubits: 4 },
            GuardError::QasmBufferOverflow,
            GuardError::EmptySeedKeys,
        ];
        for err in &all {
            assert_eq!(err.exit_code(), 1, "{} should exit with 1", err.kind());
        }
        // Kinds are distinct even though exit codes are not.
        let mut kinds: Vec<_> = all.iter().map(GuardError::kind).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), all.len());
    }
}
