//! # Configuration
//!
//! Parameters of a single simplex run. Every engine instance owns its configuration, there is no
//! global state.
use crate::data::number_types::traits::Scalar;

/// Default bound on the number of pivots of a single run.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Parameters of a simplex run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplexConfig<F> {
    /// Maximum number of pivots. When another pivot would be needed after this many, the run
    /// terminates as `CycleDetected`.
    pub max_iterations: usize,
    /// Values within this distance from zero are treated as zero when selecting pivots.
    pub tolerance: F,
}

impl<F: Scalar> SimplexConfig<F> {
    /// Replace the iteration bound.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        debug_assert!(!tolerance.is_negative_beyond(&F::zero()));

        self.tolerance = tolerance;
        self
    }
}

impl<F: Scalar> Default for SimplexConfig<F> {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: F::default_tolerance(),
        }
    }
}
