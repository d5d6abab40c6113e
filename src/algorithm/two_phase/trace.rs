//! # Observing the algorithm
//!
//! A `Trace` gets to see the tableau after every pivot. It can't influence the algorithm: it only
//! gets shared references.
use enum_map::EnumMap;
use log::{debug, log_enabled, trace, Level};

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::traits::Scalar;

/// Why a pivot was made.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PivotKind {
    /// Improving the objective while staying primal feasible.
    Primal,
    /// Restoring primal feasibility while staying dual feasible.
    Dual,
    /// Replacing an artificial variable that stayed basic at zero level after the first phase.
    ArtificialRemoval,
}

/// A pivot that just happened.
pub struct PivotEvent<'a, F> {
    /// Phase the pivot belongs to.
    pub phase: Phase,
    /// Which rule selected the pivot.
    pub kind: PivotKind,
    /// Constraint row that was pivoted on.
    pub row: usize,
    /// Column that entered the basis.
    pub column: usize,
    /// The tableau after the pivot.
    pub tableau: &'a Tableau<F>,
}

/// Observer of the pivots made while solving.
pub trait Trace<F> {
    /// Called after every pivot.
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>);
}

/// Observe nothing.
impl<F> Trace<F> for () {
    fn after_pivot(&mut self, _event: &PivotEvent<'_, F>) {
    }
}

impl<F, T: Trace<F> + ?Sized> Trace<F> for &mut T {
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>) {
        (**self).after_pivot(event)
    }
}

/// Report to two observers, in order.
impl<F, A: Trace<F>, B: Trace<F>> Trace<F> for (A, B) {
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>) {
        self.0.after_pivot(event);
        self.1.after_pivot(event);
    }
}

/// Write every pivot to the `log` facade.
///
/// The pivot itself is logged at debug level, the complete tableau at trace level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogTrace;

impl<F: Scalar> Trace<F> for LogTrace {
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>) {
        debug!(
            "{}: {:?} pivot on row {}, column {}, objective {}",
            event.phase, event.kind, event.row, event.column, event.tableau.objective_function_value(),
        );
        if log_enabled!(Level::Trace) {
            trace!("{}", event.tableau);
        }
    }
}

/// Count the pivots made in each phase.
#[derive(Clone, Debug, Default)]
pub struct PivotCounter {
    counts: EnumMap<Phase, usize>,
}

impl PivotCounter {
    /// Number of pivots made in a phase.
    pub fn get(&self, phase: Phase) -> usize {
        self.counts[phase]
    }

    /// Number of pivots made in all phases together.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl<F> Trace<F> for PivotCounter {
    fn after_pivot(&mut self, event: &PivotEvent<'_, F>) {
        self.counts[event.phase] += 1;
    }
}
