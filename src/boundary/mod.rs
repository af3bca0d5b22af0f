// src/boundary/mod.rs

//! The outer boundary that decides what a guard failure means.
//!
//! Guards in [`crate::validation`] only report. A `GuardBoundary` either hands
//! the report back (`ValidationMode::Recoverable`) or ends the process with
//! exit status 1 (`ValidationMode::Abort`), matching engines that cannot
//! sensibly continue past a violated precondition.

use crate::core::{GuardError, FAILURE_EXIT_CODE};
use crate::validation::{self, IndexPolicy};

/// What a boundary does with a failed guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Failures are returned to the caller as `Err`.
    #[default]
    Recoverable,
    /// Any failure terminates the process with status 1.
    /// When `silent` is `false` the error is written to stderr first.
    Abort {
        /// Suppress the stderr message.
        silent: bool,
    },
}

/// Ends the process. Injected so the fatal path can be exercised in tests.
pub trait Terminator: Send + Sync {
    /// Never returns.
    fn terminate(&self, code: i32) -> !;
}

/// Terminates through `std::process::exit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// Applies a `ValidationMode` and `IndexPolicy` to every guard.
///
/// # Example
/// ```
/// use qguard::boundary::{GuardBoundary, ValidationMode};
/// use qguard::validation::IndexPolicy;
///
/// let boundary = GuardBoundary::new()
///     .with_mode(ValidationMode::Recoverable)
///     .with_index_policy(IndexPolicy::Faithful);
///
/// assert!(boundary.validate_control_target(1, 3, 5).is_ok());
/// assert!(boundary.validate_control_target(2, 2, 5).is_err());
/// ```
pub struct GuardBoundary {
    mode: ValidationMode,
    index_policy: IndexPolicy,
    terminator: Box<dyn Terminator>,
}

impl Default for GuardBoundary {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            index_policy: IndexPolicy::default(),
            terminator: Box::new(ProcessExit),
        }
    }
}

impl std::fmt::Debug for GuardBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuardBoundary")
            .field("mode", &self.mode)
            .field("index_policy", &self.index_policy)
            .finish_non_exhaustive()
    }
}

impl GuardBoundary {
    /// Creates a recoverable, strict boundary that exits the process when it
    /// is switched to abort mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Silent abort and no lower bound on indices, matching the legacy C guards.
    pub fn faithful() -> Self {
        Self::new()
            .with_mode(ValidationMode::Abort { silent: true })
            .with_index_policy(IndexPolicy::Faithful)
    }

    /// Sets the failure mode.
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets how qubit indices are bounded below.
    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }

    /// Replaces the process terminator.
    pub fn with_terminator(mut self, terminator: impl Terminator + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// The configured failure mode.
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The configured index policy.
    pub fn index_policy(&self) -> IndexPolicy {
        self.index_policy
    }

    /// Passes `result` through in recoverable mode; terminates on `Err` in
    /// abort mode.
    pub fn check<T>(&self, result: Result<T, GuardError>) -> Result<T, GuardError> {
        match (result, self.mode) {
            (Err(err), ValidationMode::Abort { silent }) => self.abort(&err, silent),
            (result, _) => result,
        }
    }

    /// Applies the mode to [`validation::validate_control_target_with`] under
    /// this boundary's index policy.
    pub fn validate_control_target(
        &self,
        control: i32,
        target: i32,
        num_qubits: i32,
    ) -> Result<(), GuardError> {
        self.check(validation::validate_control_target_with(
            self.index_policy,
            control,
            target,
            num_qubits,
        ))
    }

    /// Applies the mode to [`validation::validate_target_with`] under this
    /// boundary's index policy.
    pub fn validate_target(&self, target: i32, num_qubits: i32) -> Result<(), GuardError> {
        self.check(validation::validate_target_with(self.index_policy, target, num_qubits))
    }

    /// Applies the mode to [`validation::validate_num_qubits`].
    pub fn validate_num_qubits(&self, num_qubits: i32) -> Result<(), GuardError> {
        self.check(validation::validate_num_qubits(num_qubits))
    }

    /// Applies the mode to [`validation::validate_memory_allocation_size`].
    pub fn validate_memory_allocation_size(&self, num_values: i64) -> Result<(), GuardError> {
        self.check(validation::validate_memory_allocation_size(num_values))
    }

    /// Applies the mode to [`validation::validate_register_allocation`].
    pub fn validate_register_allocation<R: ?Sized>(
        &self,
        register: Option<&R>,
        num_qubits: i32,
    ) -> Result<(), GuardError> {
        self.check(validation::validate_register_allocation(register, num_qubits))
    }

    /// Terminates unconditionally, whatever the mode. The caller has already
    /// detected the overflow and has no state to return to.
    pub fn raise_qasm_buffer_overflow(&self) -> ! {
        let err = validation::raise_qasm_buffer_overflow();
        let silent = matches!(self.mode, ValidationMode::Abort { silent: true });
        self.abort(&err, silent)
    }

    fn abort(&self, err: &GuardError, silent: bool) -> ! {
        if !silent {
            eprintln!("qguard: {}", err);
        }
        self.terminator.terminate(FAILURE_EXIT_CODE)
    }
}
