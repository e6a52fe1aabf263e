//! Parallel scanline rendering of escape-time frames.
//!
//! Every pixel's evaluation is independent of every other pixel, so a pass
//! is an embarrassingly parallel map over the grid; rows are grouped into
//! bands and spread across the rayon pool.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSliceMut};

use crate::error::Error;
use crate::escape;
use crate::scalar::Scalar;
use crate::screen::Size;
use crate::viewport::{self, PlaneBounds};

/// A completed rendering pass: one iteration count per pixel, row-major.
#[derive(Clone, Debug)]
pub struct Frame {
    size: Size,
    counts: Vec<u32>,
}

impl Frame {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn count_at(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.size.width && y < self.size.height);
        self.counts[y as usize * self.size.width as usize + x as usize]
    }
}

/// Render one full pass over `size` pixels of the plane rectangle `bounds`.
pub fn render<T: Scalar>(
    bounds: PlaneBounds<T>,
    size: Size,
    max_steps: u32,
) -> Result<Frame, Error> {
    let cancel = AtomicBool::new(false);
    match render_cancellable(bounds, size, max_steps, &cancel)? {
        Some(frame) => Ok(frame),
        None => unreachable!("a pass whose cancel flag is never raised runs to completion"),
    }
}

/// Render one pass, checking `cancel` between scanline bands.
///
/// `Ok(None)` means the pass observed the flag and stopped early: its bounds
/// were superseded by a zoom commit and the partial result is discarded.
/// Cancellation is cooperative; a band in flight finishes before the flag is
/// seen. Bounds are taken by value, so a pass can never observe a mid-pass
/// replacement.
pub fn render_cancellable<T: Scalar>(
    bounds: PlaneBounds<T>,
    size: Size,
    max_steps: u32,
    cancel: &AtomicBool,
) -> Result<Option<Frame>, Error> {
    let size = size.ensure_nonzero()?;
    let width = size.width as usize;
    let height = size.height as usize;

    // A handful of bands per worker, rather than one: boundary-heavy rows
    // take far longer than rows of early escapes, and smaller bands keep the
    // fast workers from idling behind them.
    let band_rows = (height / (4 * num_cpus::get())).max(1);

    let mut counts = vec![0u32; size.pixel_count()];
    let superseded = AtomicBool::new(false);

    trace!(
        "begin pass: {}x{} at {} steps, {} rows per band",
        size.width,
        size.height,
        max_steps,
        band_rows
    );

    counts
        .par_chunks_mut(band_rows * width)
        .enumerate()
        .try_for_each(|(band, cells)| -> Result<(), Error> {
            if cancel.load(Ordering::Relaxed) {
                superseded.store(true, Ordering::Relaxed);
                return Ok(());
            }
            if superseded.load(Ordering::Relaxed) {
                return Ok(());
            }

            let first_row = band * band_rows;
            for (offset, cell) in cells.iter_mut().enumerate() {
                let x = (offset % width) as f64;
                let y = (first_row + offset / width) as f64;
                let c = viewport::pixel_to_plane(x, y, size, &bounds)?;
                *cell = escape::escape_time(c, max_steps)?;
            }
            Ok(())
        })?;

    trace!("end pass");

    if superseded.load(Ordering::Relaxed) {
        debug!("pass superseded, discarding");
        return Ok(None);
    }
    Ok(Some(Frame { size, counts }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_bounded_and_corners_of_the_full_set_escape_immediately() {
        let max_steps = 60;
        let frame = render(PlaneBounds::<f64>::full_set(), Size::new(32, 24), max_steps).unwrap();

        assert_eq!(frame.counts().len(), 32 * 24);
        assert!(frame.counts().iter().all(|&count| count <= max_steps));

        // Pixel (0, 0) maps to -2 - 1.5i, magnitude 2.5: escape at step 0.
        assert_eq!(frame.count_at(0, 0), 0);
    }

    #[test]
    fn interior_pixels_exhaust_the_budget() {
        let max_steps = 50;
        let frame = render(PlaneBounds::<f64>::full_set(), Size::new(96, 96), max_steps).unwrap();
        // Pixel (64, 48) maps to the origin, which never escapes.
        assert_eq!(frame.count_at(64, 48), max_steps);
    }

    #[test]
    fn a_raised_flag_discards_the_pass() {
        let cancel = AtomicBool::new(true);
        let outcome = render_cancellable(
            PlaneBounds::<f64>::full_set(),
            Size::new(64, 64),
            100,
            &cancel,
        )
        .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn zero_extent_raster_is_rejected() {
        let result = render(PlaneBounds::<f64>::full_set(), Size::new(0, 64), 10);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidViewport {
                width: 0,
                height: 64
            }
        );
    }

    #[test]
    fn a_pass_is_generic_over_the_scalar_representation() {
        let frame = render(PlaneBounds::<f32>::full_set(), Size::new(16, 12), 25).unwrap();
        assert_eq!(frame.counts().len(), 16 * 12);
        assert!(frame.counts().iter().all(|&count| count <= 25));
        assert_eq!(frame.count_at(0, 0), 0);
    }
}
