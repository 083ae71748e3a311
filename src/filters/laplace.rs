//! Laplace edge filter over interleaved RGB bytes.
//!
//! Applies the 5-point stencil
//!
//! ```text
//!      0  -1   0
//!     -1   4  -1
//!      0  -1   0
//! ```
//!
//! to every channel byte independently. Neighbors are taken from the same
//! channel: left/right pixels sit 3 bytes away, the rows above and below sit
//! one stride (`width * 3`) away.
//!
//! ## Borders
//!
//! The first and last pixel of every row are skipped, and their output bytes
//! are never written. The whole-image helpers additionally skip the first and
//! last row. No border reflection or extrapolation is performed.
//!
//! ## Buffers
//!
//! Input and output are flat row-major byte buffers with 3 interleaved
//! channels and no row padding.

use ndarray::{Array3, ArrayView3};

use crate::error::LaplaceError;

/// Interleaved channels per pixel.
pub const CHANNELS: usize = 3;

// ============================================================================
// Geometry
// ============================================================================

/// Byte distance between the starts of two consecutive rows.
pub fn row_stride(width: usize) -> Result<usize, LaplaceError> {
    if width == 0 {
        return Err(LaplaceError::InvalidWidth(0));
    }
    width
        .checked_mul(CHANNELS)
        .ok_or(LaplaceError::InvalidWidth(i64::try_from(width).unwrap_or(i64::MAX)))
}

/// Total byte length of a `width` x `height` RGB image.
pub fn image_len(width: usize, height: usize) -> Result<usize, LaplaceError> {
    let stride = row_stride(width)?;
    stride
        .checked_mul(height)
        .ok_or(LaplaceError::DimensionOverflow { width, height })
}

/// Validates whole-image buffers and returns the row stride.
pub(crate) fn check_image(
    input_len: usize,
    output_len: usize,
    width: usize,
    height: usize,
) -> Result<usize, LaplaceError> {
    let stride = row_stride(width)?;
    let expected = image_len(width, height)?;
    for actual in [input_len, output_len] {
        if actual != expected {
            return Err(LaplaceError::BufferSize { expected, actual });
        }
    }
    if height < 3 {
        return Err(LaplaceError::ImageTooSmall { height });
    }
    Ok(stride)
}

/// Returns true when `index` is not part of the first or last pixel of its row.
///
/// `index` is counted from the start of a row-aligned buffer.
#[inline]
pub fn is_interior(index: usize, stride: usize) -> bool {
    index % stride > 2 && (index + CHANNELS) % stride > 2
}

// ============================================================================
// Kernel
// ============================================================================

/// Evaluate the stencil for one sample and clamp the result to 0-255.
#[inline]
pub fn laplace_sample(center: u8, left: u8, right: u8, top: u8, bottom: u8) -> u8 {
    let result = 4 * i32::from(center)
        - i32::from(left)
        - i32::from(right)
        - i32::from(top)
        - i32::from(bottom);
    result.clamp(0, 255) as u8
}

/// Filter a contiguous span of samples.
///
/// Output sample `k` corresponds to input sample `origin + k`. Only interior
/// samples are written; the rest of `output` keeps its previous content.
///
/// # Arguments
/// * `input` - Row-aligned source buffer (index 0 is the first byte of a row)
/// * `output` - Destination for the span, `output.len()` samples long
/// * `width` - Image width in pixels
/// * `origin` - Position of the span inside `input`
///
/// # Errors
/// The span must have a full row of input above and below it. Nothing is
/// written when validation fails.
pub fn laplace_span(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    origin: usize,
) -> Result<(), LaplaceError> {
    let stride = row_stride(width)?;
    let len = output.len();

    let fits = origin >= stride
        && origin
            .checked_add(len)
            .and_then(|end| end.checked_add(stride))
            .is_some_and(|limit| limit <= input.len());
    if !fits {
        return Err(LaplaceError::MissingMargin {
            origin,
            len,
            stride,
            input_len: input.len(),
        });
    }

    for (k, out) in output.iter_mut().enumerate() {
        let i = origin + k;
        if !is_interior(i, stride) {
            continue;
        }
        *out = laplace_sample(
            input[i],
            input[i - CHANNELS],
            input[i + CHANNELS],
            input[i - stride],
            input[i + stride],
        );
    }

    Ok(())
}

// ============================================================================
// Whole images
// ============================================================================

/// Filter a whole RGB image, skipping the first and last row.
///
/// # Arguments
/// * `input` - Flat RGB bytes, `width * height * 3` long
/// * `output` - Destination of the same length; border bytes are left untouched
/// * `width` - Image width in pixels
/// * `height` - Image height in rows (at least 3)
pub fn laplace_rgb_u8(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), LaplaceError> {
    let stride = check_image(input.len(), output.len(), width, height)?;
    let interior = stride..(height - 1) * stride;
    let origin = interior.start;
    laplace_span(input, &mut output[interior], width, origin)
}

/// Filter an `(height, width, 3)` array into a new array.
///
/// Border samples of the result are 0.
pub fn laplace_rgb_array(input: ArrayView3<u8>) -> Result<Array3<u8>, LaplaceError> {
    filter_array(input, laplace_rgb_u8)
}

/// Run a flat-buffer filter over an array view and wrap the result.
pub(crate) fn filter_array<F>(input: ArrayView3<u8>, filter: F) -> Result<Array3<u8>, LaplaceError>
where
    F: FnOnce(&[u8], &mut [u8], usize, usize) -> Result<(), LaplaceError>,
{
    let (height, width, channels) = input.dim();
    if channels != CHANNELS {
        return Err(LaplaceError::ChannelCount(channels));
    }

    // Non-contiguous views (slices, transposes) are copied out in logical order.
    let owned: Vec<u8>;
    let src: &[u8] = match input.as_slice() {
        Some(slice) => slice,
        None => {
            owned = input.iter().copied().collect();
            owned.as_slice()
        }
    };

    let mut output = vec![0u8; src.len()];
    filter(src, &mut output, width, height)?;

    let actual = output.len();
    Array3::from_shape_vec((height, width, CHANNELS), output).map_err(|_| {
        LaplaceError::BufferSize {
            expected: height * width * CHANNELS,
            actual,
        }
    })
}
