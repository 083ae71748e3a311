//! Error type shared by the safe filter API and the C entry points.

use thiserror::Error;

/// Errors reported by the bounds-checked Laplace filter functions.
///
/// The raw `ApplyLaplaceFilter` entry point never produces these; it has no
/// error channel at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaplaceError {
    /// A null buffer pointer was passed to a checked C entry point.
    #[error("null buffer pointer")]
    NullPointer,

    /// Width is below one pixel, or the row stride does not fit in `usize`.
    #[error("invalid width: {0} (must be at least 1 pixel)")]
    InvalidWidth(i64),

    /// The image has fewer than three rows, so no row has both neighbors.
    #[error("image too small: {height} rows (need at least 3)")]
    ImageTooSmall { height: usize },

    /// A buffer does not hold the number of bytes the geometry requires.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// A span lacks a full row of readable input above or below it.
    #[error("span {origin}+{len} lacks {stride} bytes of margin in {input_len}-byte input")]
    MissingMargin {
        origin: usize,
        len: usize,
        stride: usize,
        input_len: usize,
    },

    /// The image array does not have exactly 3 interleaved channels.
    #[error("expected 3 channels, got {0}")]
    ChannelCount(usize),

    /// Worker count below one.
    #[error("invalid thread count: {0}")]
    InvalidThreadCount(i64),

    /// `width * height * 3` does not fit in `usize`.
    #[error("image dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },

    /// Negative height passed across the C boundary.
    #[error("invalid height: {0}")]
    InvalidHeight(i64),
}

/// Status code for success in the C interface.
pub const STATUS_OK: i32 = 0;

impl LaplaceError {
    /// Stable status code handed across the C boundary.
    pub fn code(&self) -> i32 {
        match self {
            Self::NullPointer => 1,
            Self::InvalidWidth(_) => 2,
            Self::ImageTooSmall { .. } => 3,
            Self::BufferSize { .. } => 4,
            Self::MissingMargin { .. } => 5,
            Self::ChannelCount(_) => 6,
            Self::InvalidThreadCount(_) => 7,
            Self::DimensionOverflow { .. } => 8,
            Self::InvalidHeight(_) => 9,
        }
    }
}
