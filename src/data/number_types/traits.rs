//! # Traits
//!
//! The number types the algorithms are defined over. The contracts are "mathematically exact", but
//! the implementations aren't: floating point numbers have a limited precision. The algorithms
//! compensate for that by comparing through a `Tolerance`.
use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{Float, FromPrimitive};

/// A real number type with a finite representation.
///
/// All methods containing algorithmic logic are generic over this trait. It is automatically
/// implemented for all types satisfying the trait's bounds, in practice `f64` and `f32`.
pub trait Scalar:
    Float +
    FromPrimitive +
    FromStr +
    Debug +
    Display +
    Send +
    Sync +
    'static
{
}

impl<T> Scalar for T
where
    T: Float + FromPrimitive + FromStr + Debug + Display + Send + Sync + 'static,
{
}
