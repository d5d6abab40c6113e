//! # Numerical tolerance
//!
//! Repeated elimination leaves values like `1e-17` where an exact computation would give zero and
//! `0.9999999999999998` where it would give one. One epsilon decides all of the following:
//!
//! * whether a reduced cost is negative (`< -ε`),
//! * the sign of an entry in a pivot column or row (`> ε` positive, `< -ε` negative),
//! * whether a column is a unit vector (`|v| ≤ ε` and `|v - 1| ≤ ε`),
//! * whether the auxiliary program found a feasible solution,
//! * how reported values are rounded.
//!
//! Values at exactly `±ε` are treated as zero.
use crate::data::number_types::traits::Scalar;

/// Epsilon used when none is configured.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// A positive epsilon, together with the scale used to round to its precision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    epsilon: F,
    /// `1 / epsilon`, rounded to an integer.
    scale: F,
}

impl<F: Scalar> Tolerance<F> {
    /// Create a new tolerance.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Positive and finite.
    ///
    /// # Return value
    ///
    /// `None` if `epsilon` is not positive or not finite, or so small that its reciprocal
    /// overflows.
    pub fn new(epsilon: F) -> Option<Self> {
        if epsilon.is_finite() && epsilon > F::zero() && epsilon.recip().is_finite() {
            Some(Self::from_positive(epsilon))
        } else {
            None
        }
    }

    fn from_positive(epsilon: F) -> Self {
        debug_assert!(epsilon > F::zero());

        let scale = epsilon.recip().round().max(F::one());
        Self { epsilon, scale }
    }

    /// The epsilon itself.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// Whether `value` should be considered zero.
    pub fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.epsilon
    }

    /// Whether `value` should be considered one.
    pub fn is_one(&self, value: F) -> bool {
        (value - F::one()).abs() <= self.epsilon
    }

    /// Whether `value` is negative by more than epsilon.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.epsilon
    }

    /// Whether `value` is positive by more than epsilon.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.epsilon
    }

    /// Whether two values are equal up to epsilon.
    pub fn is_equal(&self, left: F, right: F) -> bool {
        self.is_zero(left - right)
    }

    /// Round a value to the precision of the epsilon.
    ///
    /// Used on every value that is reported, which makes `4.000000000000001` come out as `4` and
    /// `-0` as `0`.
    pub fn round(&self, value: F) -> F {
        let rounded = (value * self.scale).round() / self.scale;
        if rounded == F::zero() {
            // Also catches negative zero
            F::zero()
        } else {
            rounded
        }
    }
}

impl<F: Scalar> Default for Tolerance<F> {
    fn default() -> Self {
        let epsilon = F::from_f64(DEFAULT_EPSILON).unwrap_or_else(|| F::epsilon().sqrt());
        Self::from_positive(epsilon)
    }
}
