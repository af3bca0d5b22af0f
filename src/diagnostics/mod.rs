// src/diagnostics/mod.rs

//! Structured trace events for guards and the measurement generator.
//!
//! Events go through `tracing`. Without an installed subscriber they are
//! discarded, which keeps the library silent by default.

use tracing::{debug, info, warn};

use crate::core::GuardError;
use crate::rng::SeedSource;

/// Name of the backend reported by [`print_info`].
pub const BACKEND_NAME: &str = "qguard";

/// Announces which backend the host engine is running against.
pub fn print_info() {
    info!(
        backend = BACKEND_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "using guarded simulation backend"
    );
}

pub(crate) fn guard_failed(err: &GuardError) {
    warn!(kind = err.kind(), exit_code = err.exit_code(), "precondition violated: {}", err);
}

pub(crate) fn rng_seeded(seed: u64, source: SeedSource) {
    debug!(seed, %source, "measurement generator seeded");
}

pub(crate) fn rng_reseeded(seed: u64, key_length: usize) {
    debug!(seed, key_length, "measurement generator reseeded from key array");
}

pub(crate) fn register_checked(num_qubits: i32) {
    debug!(num_qubits, "checking register allocation");
}

pub(crate) fn qubit_count_checked(num_qubits: i32) {
    debug!(num_qubits, "checking number of qubits");
}
