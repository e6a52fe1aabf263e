//! Pixel-to-plane coordinate mapping and the zoom-region algebra.

use crate::complex::Complex;
use crate::error::Error;
use crate::scalar::Scalar;
use crate::screen::Size;

/// The rectangle of the complex plane currently mapped onto the raster.
///
/// Invariant: finite and ordered `min < max` on both axes, enforced at
/// construction. Bounds are replaced wholesale on a zoom commit, never
/// mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneBounds<T> {
    min_re: T,
    max_re: T,
    min_im: T,
    max_im: T,
}

impl<T: Scalar> PlaneBounds<T> {
    pub fn new(min_re: T, max_re: T, min_im: T, max_im: T) -> Result<Self, Error> {
        let finite = min_re.is_finite()
            && max_re.is_finite()
            && min_im.is_finite()
            && max_im.is_finite();
        if !finite || min_re >= max_re || min_im >= max_im {
            return Err(Error::InvalidBounds {
                min_re: min_re.to_f64_lossy(),
                max_re: max_re.to_f64_lossy(),
                min_im: min_im.to_f64_lossy(),
                max_im: max_im.to_f64_lossy(),
            });
        }
        Ok(PlaneBounds {
            min_re,
            max_re,
            min_im,
            max_im,
        })
    }

    /// The classic full-set framing: re ∈ [−2, 1], im ∈ [−1.5, 1.5].
    pub fn full_set() -> Self {
        PlaneBounds {
            min_re: T::from_f64(-2.0),
            max_re: T::from_f64(1.0),
            min_im: T::from_f64(-1.5),
            max_im: T::from_f64(1.5),
        }
    }

    pub fn min_re(&self) -> T {
        self.min_re
    }

    pub fn max_re(&self) -> T {
        self.max_re
    }

    pub fn min_im(&self) -> T {
        self.min_im
    }

    pub fn max_im(&self) -> T {
        self.max_im
    }
}

/// A selection rectangle in pixel space, as produced by a drag gesture.
///
/// Coordinates may be fractional. `width` and `height` are signed: a
/// rectangle dragged leftward or upward from its anchor carries a negative
/// extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Flip negative extents so the origin is the top-left corner and both
    /// extents are non-negative.
    pub fn normalized(self) -> PixelRect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Linear rescale of `value` from `[old_lo, old_hi]` onto `[new_lo, new_hi]`.
///
/// This single primitive underlies both coordinate mappings and the zoom
/// algebra; the per-axis maps are instantiations of it, not copies.
pub fn rescale<T: Scalar>(
    value: T,
    old_lo: T,
    old_hi: T,
    new_lo: T,
    new_hi: T,
) -> Result<T, Error> {
    if old_lo == old_hi {
        return Err(Error::DegenerateRange {
            lower: old_lo.to_f64_lossy(),
        });
    }
    Ok(new_lo + ((value - old_lo) / (old_hi - old_lo)) * (new_hi - new_lo))
}

/// Map a pixel coordinate onto the plane rectangle `bounds`.
///
/// Pixel coordinates may be fractional and out of range; points outside the
/// raster simply map outside `bounds`, which selection corners rely on
/// mid-drag.
pub fn pixel_to_plane<T: Scalar>(
    pixel_x: f64,
    pixel_y: f64,
    size: Size,
    bounds: &PlaneBounds<T>,
) -> Result<Complex<T>, Error> {
    let size = size.ensure_nonzero()?;
    let re = rescale(
        T::from_f64(pixel_x),
        T::zero(),
        T::from_f64(f64::from(size.width)),
        bounds.min_re(),
        bounds.max_re(),
    )?;
    let im = rescale(
        T::from_f64(pixel_y),
        T::zero(),
        T::from_f64(f64::from(size.height)),
        bounds.min_im(),
        bounds.max_im(),
    )?;
    Ok(Complex::new(re, im))
}

/// Inverse of [`pixel_to_plane`]: where on the raster a plane coordinate
/// falls. Points outside `bounds` land outside the raster.
pub fn plane_to_pixel<T: Scalar>(
    c: Complex<T>,
    size: Size,
    bounds: &PlaneBounds<T>,
) -> Result<(f64, f64), Error> {
    let size = size.ensure_nonzero()?;
    let pixel_x = rescale(
        c.re,
        bounds.min_re(),
        bounds.max_re(),
        T::zero(),
        T::from_f64(f64::from(size.width)),
    )?;
    let pixel_y = rescale(
        c.im,
        bounds.min_im(),
        bounds.max_im(),
        T::zero(),
        T::from_f64(f64::from(size.height)),
    )?;
    Ok((pixel_x.to_f64_lossy(), pixel_y.to_f64_lossy()))
}

/// New plane bounds for a committed selection rectangle.
///
/// The rectangle is normalized first; a selection with zero extent on
/// either axis is rejected as [`Error::DegenerateZoom`] so the viewport
/// cannot collapse to a point or a line. The literal rectangle is mapped;
/// aspect-locked selection belongs to the UI layer, not here.
pub fn zoom_bounds<T: Scalar>(
    rect: PixelRect,
    size: Size,
    bounds: &PlaneBounds<T>,
) -> Result<PlaneBounds<T>, Error> {
    let rect = rect.normalized();
    if rect.width == 0.0 || rect.height == 0.0 {
        return Err(Error::DegenerateZoom);
    }
    let top_left = pixel_to_plane(rect.x, rect.y, size, bounds)?;
    let bottom_right = pixel_to_plane(rect.x + rect.width, rect.y + rect.height, size, bounds)?;
    PlaneBounds::new(top_left.re, bottom_right.re, top_left.im, bottom_right.im)
}
