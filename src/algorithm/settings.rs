//! # Solver configuration
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

/// Pivots allowed per phase when no limit is configured.
pub const DEFAULT_ITERATION_LIMIT: usize = 50_000;

/// Everything that can be tuned about a solve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Settings<F> {
    /// Used for every comparison against zero and for rounding the reported values.
    pub tolerance: Tolerance<F>,
    /// Maximum number of pivots in a single phase before giving up.
    ///
    /// Bland's rule guarantees termination, but the number of bases can be astronomical; this
    /// turns a run that doesn't end into an error.
    pub iteration_limit: usize,
}

impl<F: Scalar> Default for Settings<F> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            iteration_limit: DEFAULT_ITERATION_LIMIT,
        }
    }
}

impl<F> Settings<F> {
    /// Replace the tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance<F>) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the iteration limit.
    pub fn with_iteration_limit(mut self, iteration_limit: usize) -> Self {
        self.iteration_limit = iteration_limit;
        self
    }
}
