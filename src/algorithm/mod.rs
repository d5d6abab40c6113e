//! # Algorithms
use std::error::Error;
use std::fmt;

use crate::algorithm::settings::Settings;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::trace::Trace;
use crate::data::linear_program::{Problem, ShapeError};
use crate::data::linear_program::solution::{
    is_farkas_certificate, is_feasible, is_optimality_certificate, is_unbounded_ray,
    objective_value,
};
use crate::data::number_types::tolerance::Tolerance;
use crate::data::number_types::traits::Scalar;

pub mod settings;
pub mod two_phase;

/// A problem formulation that can be solved.
pub trait Solve<F> {
    /// Solve with the default settings and without observing the pivots.
    fn solve(&self) -> Result<OptimizationResult<F>, SolveError>;

    /// Solve with the given settings, reporting every pivot to `trace`.
    fn solve_with<T: Trace<F>>(
        &self,
        settings: &Settings<F>,
        trace: &mut T,
    ) -> Result<OptimizationResult<F>, SolveError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// Each variant carries the vectors that prove it. All values are rounded to the precision of the
/// tolerance that was used to compute them.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// An optimal solution.
    FiniteOptimum {
        /// Value of the objective function at `x`.
        value: F,
        /// The optimal solution, one value per variable.
        x: Vec<F>,
        /// Dual multipliers `y`, one per constraint, with `y^T A >= c` and `y^T b = value`.
        certificate: Vec<F>,
    },
    /// The objective function can be made arbitrarily large.
    Unbounded {
        /// A feasible solution.
        x: Vec<F>,
        /// Direction `d` with `A d <= 0` and `c^T d > 0`.
        ray: Vec<F>,
    },
    /// There is no feasible solution.
    Infeasible {
        /// Farkas multipliers `y >= 0`, one per constraint, with `y^T A >= 0` and `y^T b < 0`.
        certificate: Vec<F>,
    },
}

impl<F: Scalar> OptimizationResult<F> {
    /// Check this result against the problem it claims to solve.
    ///
    /// The check is independent of the algorithm: it only uses the problem data and the vectors in
    /// the result.
    ///
    /// # Arguments
    ///
    /// * `problem`: The problem that was solved.
    /// * `tolerance`: Used for all comparisons. Because reported values are rounded, this should be
    /// somewhat looser than the tolerance used while solving.
    pub fn is_certified_for(&self, problem: &Problem<F>, tolerance: &Tolerance<F>) -> bool {
        match self {
            OptimizationResult::FiniteOptimum { value, x, certificate } => {
                is_feasible(problem, x, tolerance)
                    && tolerance.is_equal(objective_value(problem, x), *value)
                    && is_optimality_certificate(problem, certificate, *value, tolerance)
            },
            OptimizationResult::Unbounded { x, ray } => {
                is_feasible(problem, x, tolerance) && is_unbounded_ray(problem, ray, tolerance)
            },
            OptimizationResult::Infeasible { certificate } => {
                is_farkas_certificate(problem, certificate, tolerance)
            },
        }
    }
}

/// A solve that could not reach one of the three outcomes.
///
/// There are no partial results: when one of these is returned, nothing is known about the
/// problem.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveError {
    /// The problem data is inconsistent with its declared dimensions.
    Shape(ShapeError),
    /// More pivots were needed than the configured limit allows.
    ///
    /// With Bland's rule this signals either an unreasonably large problem or a defect, never
    /// normal cycling.
    IterationLimit {
        /// Phase in which the limit was hit.
        phase: Phase,
        /// The configured limit.
        limit: usize,
    },
    /// Rounding errors led the tableau into a state that is mathematically impossible.
    NumericDegeneracy {
        /// Phase in which it was detected.
        phase: Phase,
        /// What went wrong, for the end user.
        description: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::Shape(error) => error.fmt(f),
            SolveError::IterationLimit { phase, limit } => write!(
                f, "no termination within {} pivots in {}", limit, phase,
            ),
            SolveError::NumericDegeneracy { phase, description } => write!(
                f, "numerical breakdown in {}: {}", phase, description,
            ),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Shape(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ShapeError> for SolveError {
    fn from(error: ShapeError) -> Self {
        SolveError::Shape(error)
    }
}
