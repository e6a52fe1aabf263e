use crate::scalar::Scalar;

/// A point in the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T: Scalar> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    pub fn zero() -> Self {
        Complex {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// One step of the Mandelbrot recurrence: `self² + c`, decomposed into
    /// real arithmetic as `(a + bi)² = (a² − b²) + 2abi`.
    pub fn squared_plus(self, c: Self) -> Self {
        let re = self.re * self.re - self.im * self.im + c.re;
        let im = (self.re + self.re) * self.im + c.im;
        Complex { re, im }
    }

    /// `|self|²`. Comparing this against the squared escape radius skips
    /// the square root without changing which step triggers escape.
    pub fn magnitude_squared(self) -> T {
        self.re * self.re + self.im * self.im
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squaring_decomposes_into_real_arithmetic() {
        // (3 + 4i)² = -7 + 24i
        let z = Complex::new(3.0, 4.0);
        let squared = z.squared_plus(Complex::zero());
        assert!((squared.re - (-7.0f64)).abs() < 1e-12);
        assert!((squared.im - 24.0).abs() < 1e-12);
    }

    #[test]
    fn magnitude_squared_of_three_four_is_twenty_five() {
        let z: Complex<f64> = Complex::new(3.0, 4.0);
        assert!((z.magnitude_squared() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Complex::new(1.0f64, -2.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }
}
