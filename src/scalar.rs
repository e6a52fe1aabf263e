//! Numeric abstraction for the real-number representation.

use std::fmt;

use num_traits::{Float, NumCast};

/// Real-number type the evaluator and the viewport mapper are generic over.
///
/// `f64` is the default instantiation for interactive use. `f32` trades
/// depth for bandwidth, and a software float implementing [`Float`] can be
/// dropped in for deep zooms without touching the algorithms.
pub trait Scalar: Float + Send + Sync + fmt::Debug + 'static {
    /// Conversion from pixel-space machine floats.
    ///
    /// Values the target type cannot represent become NaN, which the
    /// finiteness checks downstream reject.
    fn from_f64(value: f64) -> Self;

    /// Lossy view for diagnostics and error payloads.
    fn to_f64_lossy(self) -> f64;
}

impl<T> Scalar for T
where
    T: Float + Send + Sync + fmt::Debug + 'static,
{
    fn from_f64(value: f64) -> Self {
        NumCast::from(value).unwrap_or_else(Self::nan)
    }

    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}
