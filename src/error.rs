use crate::screen::Size;

/// Failures surfaced by the evaluator, the coordinate mappings, and the
/// zoom algebra.
///
/// Everything here is pure and deterministic, so an error is a signal to
/// reject the input rather than a transient condition; nothing is worth
/// retrying.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// A coordinate mapping was handed a raster with zero pixel extent.
    #[error("viewport has zero pixel extent: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// A rescale whose source interval has collapsed to a point.
    #[error("degenerate source range [{lower}, {lower}] in rescale")]
    DegenerateRange { lower: f64 },

    /// The normalized selection rectangle has zero width or height, e.g. a
    /// click without a drag. Recoverable: discard the gesture.
    #[error("selection rectangle has zero extent")]
    DegenerateZoom,

    /// Plane bounds that are non-finite or not ordered `min < max` per axis.
    #[error("invalid plane bounds: re [{min_re}, {max_re}], im [{min_im}, {max_im}]")]
    InvalidBounds {
        min_re: f64,
        max_re: f64,
        min_im: f64,
        max_im: f64,
    },

    /// A NaN or infinite coordinate reached the escape evaluator.
    #[error("non-finite complex coordinate")]
    NonFiniteCoordinate,
}

impl Error {
    pub(crate) fn invalid_viewport(size: Size) -> Self {
        Error::InvalidViewport {
            width: size.width,
            height: size.height,
        }
    }
}
