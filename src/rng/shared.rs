// src/rng/shared.rs

//! Process-wide generator for callers that cannot thread a `MeasurementRng`
//! through their call graph.
//!
//! The generator lives behind a `Mutex`, so the first-draw seeding happens
//! exactly once even when several threads draw concurrently.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::MeasurementRng;
use crate::core::GuardError;

static SHARED: Mutex<MeasurementRng> = Mutex::new(MeasurementRng::new());

fn lock() -> MutexGuard<'static, MeasurementRng> {
    // No draw leaves the generator half-updated; a poisoned lock is still usable.
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Draws from the process-wide generator, seeding it from the clock on the
/// first call.
pub fn draw() -> f64 {
    lock().draw()
}

/// Reseeds the process-wide generator from `keys[0]`.
/// See [`MeasurementRng::reseed`].
pub fn reseed(keys: &[u64], key_length: usize) -> Result<(), GuardError> {
    lock().reseed(keys, key_length)
}

/// The seed currently driving the process-wide generator, if any.
pub fn seed() -> Option<u64> {
    lock().seed()
}
