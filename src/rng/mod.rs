// src/rng/mod.rs

//! Uniform randomness for measurement outcomes.
//!
//! `MeasurementRng` is owned by the caller and passed by `&mut` wherever a
//! draw is needed, so there is no hidden global state to race on. Callers that
//! need a zero-argument entry point can use [`shared`], which wraps one
//! generator behind a mutex.
//!
//! The generator is **not** cryptographically secure.

pub mod shared;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::core::GuardError;
use crate::diagnostics;

/// Where a generator takes its seed from when it is first used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Wall-clock time at the first draw.
    #[default]
    Clock,
    /// A fixed value, for reproducible runs.
    Fixed(u64),
}

impl SeedSource {
    /// Resolves the source into a concrete seed value.
    fn resolve(self) -> u64 {
        match self {
            SeedSource::Fixed(seed) => seed,
            // Nanosecond resolution: runs started in the same second diverge.
            SeedSource::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64),
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Clock => write!(f, "clock"),
            SeedSource::Fixed(seed) => write!(f, "fixed({})", seed),
        }
    }
}

/// A lazily seeded pseudo-random source over `[0, 1)`.
///
/// The generator is seeded exactly once from its `SeedSource` on the first
/// draw, unless `reseed` establishes a seed first. `reseed` may be called any
/// number of times and always takes effect immediately.
#[derive(Debug)]
pub struct MeasurementRng {
    source: SeedSource,
    /// Active seed and the generator it produced. `None` until first use.
    state: Option<(u64, StdRng)>,
}

impl Default for MeasurementRng {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementRng {
    /// Creates a generator that seeds itself from the clock on first draw.
    pub const fn new() -> Self {
        Self::with_source(SeedSource::Clock)
    }

    /// Creates a generator that seeds itself from `source` on first draw.
    pub const fn with_source(source: SeedSource) -> Self {
        Self { source, state: None }
    }

    /// Creates a generator that is seeded immediately with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let source = SeedSource::Fixed(seed);
        diagnostics::rng_seeded(seed, source);
        let mut rng = Self::with_source(source);
        rng.establish(seed);
        rng
    }

    /// Returns `true` once a seed has been established.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// The seed currently driving the sequence, if one has been established.
    pub fn seed(&self) -> Option<u64> {
        self.state.as_ref().map(|(seed, _)| *seed)
    }

    /// Draws a uniformly distributed value in `[0, 1)`.
    ///
    /// The first call on an uninitialized generator seeds it from its source.
    pub fn draw(&mut self) -> f64 {
        self.seeded().random::<f64>()
    }

    /// Reseeds the generator from a key array.
    ///
    /// Only `keys[0]` determines the new sequence. `key_length` documents the
    /// caller's intended key length and is recorded in the trace, nothing more.
    ///
    /// # Arguments
    /// * `keys` - Seed keys; must not be empty.
    /// * `key_length` - The caller's notion of the key length.
    ///
    /// # Returns
    /// * `Ok(())` once subsequent draws follow the new seed.
    /// * `Err(GuardError::EmptySeedKeys)` if `keys` is empty. The current
    ///   sequence is left untouched.
    pub fn reseed(&mut self, keys: &[u64], key_length: usize) -> Result<(), GuardError> {
        let Some(&seed) = keys.first() else {
            let err = GuardError::EmptySeedKeys;
            diagnostics::guard_failed(&err);
            return Err(err);
        };
        diagnostics::rng_reseeded(seed, key_length);
        self.establish(seed);
        Ok(())
    }

    /// Resolves a binary measurement: draws once and returns `0` when the draw
    /// falls below `prob_zero`, otherwise `1`.
    ///
    /// `prob_zero` is clamped to `[0, 1]`, so `0.0` always yields `1` and
    /// `1.0` always yields `0`.
    pub fn sample_outcome(&mut self, prob_zero: f64) -> u8 {
        let threshold = prob_zero.clamp(0.0, 1.0);
        if self.draw() < threshold { 0 } else { 1 }
    }

    fn seeded(&mut self) -> &mut StdRng {
        let source = self.source;
        let (_, rng) = self.state.get_or_insert_with(|| {
            let seed = source.resolve();
            diagnostics::rng_seeded(seed, source);
            (seed, StdRng::seed_from_u64(seed))
        });
        rng
    }

    fn establish(&mut self, seed: u64) {
        self.state = Some((seed, StdRng::seed_from_u64(seed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_seeding_happens_on_first_draw() {
        let mut rng = MeasurementRng::new();
        assert!(!rng.is_initialized());
        assert_eq!(rng.seed(), None);

        let _ = rng.draw();
        assert!(rng.is_initialized());
        let seed = rng.seed();
        assert!(seed.is_some());

        // Further draws never reseed.
        for _ in 0..10 {
            let _ = rng.draw();
        }
        assert_eq!(rng.seed(), seed);
    }

    #[test]
    fn test_fixed_source_matches_from_seed() {
        let mut lazy = MeasurementRng::with_source(SeedSource::Fixed(7));
        let mut eager = MeasurementRng::from_seed(7);
        for _ in 0..5 {
            assert_eq!(lazy.draw(), eager.draw());
        }
    }

    #[test]
    fn test_empty_keys_leave_sequence_untouched() {
        let mut rng = MeasurementRng::from_seed(3);
        let mut reference = MeasurementRng::from_seed(3);
        assert_eq!(rng.reseed(&[], 0), Err(GuardError::EmptySeedKeys));
        assert_eq!(rng.seed(), Some(3));
        assert_eq!(rng.draw(), reference.draw());
    }

    #[test]
    fn test_reseed_before_first_draw_skips_clock_seeding() {
        let mut rng = MeasurementRng::new();
        rng.reseed(&[99], 1).expect("non-empty keys");
        assert_eq!(rng.seed(), Some(99));
    }

    #[test]
    fn test_sample_outcome_extremes() {
        let mut rng = MeasurementRng::from_seed(11);
        for _ in 0..100 {
            assert_eq!(rng.sample_outcome(1.0), 0);
            assert_eq!(rng.sample_outcome(0.0), 1);
            assert_eq!(rng.sample_outcome(2.5), 0); // clamped to 1.0
            assert_eq!(rng.sample_outcome(-0.5), 1); // clamped to 0.0
        }
    }

    #[test]
    fn test_seed_source_display() {
        assert_eq!(SeedSource::Clock.to_string(), "clock");
        assert_eq!(SeedSource::Fixed(42).to_string(), "fixed(42)");
    }
}
