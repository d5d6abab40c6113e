//! # Tableau kinds
//!
//! A tableau either has artificial variables, and is in the first phase of the two-phase
//! algorithm, or it doesn't.

/// Whether the tableau carries a block of artificial columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// One artificial variable per constraint, placed between the slack block and the right-hand
    /// side.
    Artificial,
    /// Only original and slack variables.
    NonArtificial,
}

impl Kind {
    /// Number of artificial columns for a problem with `nr_constraints` constraints.
    pub fn nr_artificial_columns(self, nr_constraints: usize) -> usize {
        match self {
            Kind::Artificial => nr_constraints,
            Kind::NonArtificial => 0,
        }
    }
}
