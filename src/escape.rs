//! Escape-time evaluation for the Mandelbrot recurrence.

use crate::complex::Complex;
use crate::error::Error;
use crate::scalar::Scalar;

/// How many iterations of `z ← z² + c` from `z = 0` run before `|z|`
/// exceeds the escape radius 2, capped at `max_steps`.
///
/// The returned count is the step index at which escape was detected: a
/// coordinate already outside the radius escapes at step 0, and one that
/// never escapes within the budget yields `max_steps` (likely in the set).
/// A budget of 0 returns 0 without iterating.
///
/// Pure and free of shared state; safe to call concurrently for different
/// coordinates, which is where a tiled renderer parallelizes.
pub fn escape_time<T: Scalar>(c: Complex<T>, max_steps: u32) -> Result<u32, Error> {
    if !c.is_finite() {
        // A NaN would sail through every magnitude comparison and report an
        // arbitrary count; reject instead.
        return Err(Error::NonFiniteCoordinate);
    }

    let escape = T::from_f64(4.0);
    let mut z = Complex::zero();
    for step in 0..max_steps {
        z = z.squared_plus(c);
        if z.magnitude_squared() > escape {
            return Ok(step);
        }
    }
    Ok(max_steps)
}
