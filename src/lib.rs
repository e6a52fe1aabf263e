/*!
Escape-time Mandelbrot core: evaluation, pixel↔plane mapping, and the
drag-to-zoom viewport algebra, generic over the real-number representation.

The crate computes; a display layer consumes. A renderer asks
[`viewport::pixel_to_plane`] for each pixel's plane coordinate, feeds it to
[`escape::escape_time`], and colours the resulting count. On a zoom gesture
it hands the selected pixel rectangle to a [`session::ZoomSession`], which
replaces the plane bounds for subsequent passes.
*/

pub mod colour;
pub mod complex;
pub mod error;
pub mod escape;
pub mod render;
pub mod scalar;
pub mod screen;
pub mod session;
pub mod viewport;

pub use complex::Complex;
pub use error::Error;
pub use escape::escape_time;
pub use render::{render, render_cancellable, Frame};
pub use scalar::Scalar;
pub use screen::Size;
pub use session::ZoomSession;
pub use viewport::{pixel_to_plane, plane_to_pixel, rescale, zoom_bounds, PixelRect, PlaneBounds};

/// Iteration ceiling used by the demo binary. Boundary detail sharpens with
/// higher values at proportional cost.
pub const DEFAULT_MAX_STEPS: u32 = 350;
