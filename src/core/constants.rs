//! Limits and codes fixed by the host simulation engine.

/// Constants shared across guards and the failure boundary
pub mod qguard_constants {
    /// Largest register the engine will allocate. State vectors of 2^50
    /// amplitudes are already far beyond addressable memory.
    pub const MAX_QUBITS: i32 = 50;
    /// Process exit status used for every guard failure.
    pub const FAILURE_EXIT_CODE: i32 = 1;
}
