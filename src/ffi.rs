//! C ABI exports.
//!
//! `ApplyLaplaceFilter` is the raw kernel a host calls once per worker span.
//! It performs no bounds checks beyond the left/right pixel skip. The
//! `laplace_filter_*` functions are the checked whole-image interface with
//! status codes.

use std::ffi::{c_char, CStr};
use std::slice;

use crate::error::{LaplaceError, STATUS_OK};
use crate::filters::laplace::{image_len, is_interior, laplace_rgb_u8, laplace_sample, CHANNELS};
use crate::filters::parallel::{laplace_rgb_parallel, ParallelOptions};

/// Filter `end` samples starting at `input`, writing interior samples to `output`.
///
/// `input` and `output` must point at the first byte of a row. Samples in the
/// first or last pixel of each row are not written.
///
/// Returns immediately when either pointer is null, `width < 1` or `end < 1`.
///
/// # Safety
/// * `output` must be valid for writes of `end` bytes.
/// * `input` must be valid for reads from `input - width*3` up to
///   `input + end + width*3`. Interior samples of the first and last row read
///   one full row outside `[0, end)`.
/// * The two regions must not overlap.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn ApplyLaplaceFilter(
    input: *const u8,
    output: *mut u8,
    width: i32,
    end: i32,
) {
    if input.is_null() || output.is_null() || width <= 0 || end <= 0 {
        return;
    }
    let Some(stride) = (width as usize).checked_mul(CHANNELS) else {
        return;
    };

    for i in 0..end as usize {
        if !is_interior(i, stride) {
            continue;
        }
        let p = input.add(i);
        let value = laplace_sample(
            p.read(),
            p.sub(CHANNELS).read(),
            p.add(CHANNELS).read(),
            p.sub(stride).read(),
            p.add(stride).read(),
        );
        output.add(i).write(value);
    }
}

/// Filter a whole `width` x `height` RGB image, skipping its border.
///
/// Uses the parallel sweep when `threads > 1` (snapped to 1, 2, 4, ... 64).
/// Returns `0` on success or a non-zero status code; on failure `output` is
/// unchanged. See [`laplace_filter_error_message`].
///
/// # Safety
/// `input` and `output` must each be valid for `width * height * 3` bytes and
/// must not overlap.
#[no_mangle]
pub unsafe extern "C" fn laplace_filter_rgb(
    input: *const u8,
    output: *mut u8,
    width: i32,
    height: i32,
    threads: i32,
) -> i32 {
    match filter_rgb_checked(input, output, width, height, threads) {
        Ok(()) => STATUS_OK,
        Err(err) => err.code(),
    }
}

unsafe fn filter_rgb_checked(
    input: *const u8,
    output: *mut u8,
    width: i32,
    height: i32,
    threads: i32,
) -> Result<(), LaplaceError> {
    if input.is_null() || output.is_null() {
        return Err(LaplaceError::NullPointer);
    }
    let width = usize::try_from(width).map_err(|_| LaplaceError::InvalidWidth(width.into()))?;
    let height = usize::try_from(height).map_err(|_| LaplaceError::InvalidHeight(height.into()))?;
    let threads = usize::try_from(threads)
        .ok()
        .filter(|&t| t > 0)
        .ok_or(LaplaceError::InvalidThreadCount(threads.into()))?;

    let len = image_len(width, height)?;
    let input = slice::from_raw_parts(input, len);
    let output = slice::from_raw_parts_mut(output, len);

    if threads == 1 {
        laplace_rgb_u8(input, output, width, height)
    } else {
        laplace_rgb_parallel(input, output, width, height, &ParallelOptions::with_threads(threads))
    }
}

/// Static description of a status code returned by [`laplace_filter_rgb`].
///
/// The pointer refers to a NUL-terminated string with static lifetime; the
/// caller must not free it.
#[no_mangle]
pub extern "C" fn laplace_filter_error_message(code: i32) -> *const c_char {
    let message: &'static CStr = match code {
        0 => c"ok",
        1 => c"null buffer pointer",
        2 => c"invalid width",
        3 => c"image too small (need at least 3 rows)",
        4 => c"buffer size mismatch",
        5 => c"span lacks a row of margin",
        6 => c"expected 3 channels",
        7 => c"invalid thread count",
        8 => c"image dimensions overflow",
        9 => c"invalid height",
        _ => c"unknown status code",
    };
    message.as_ptr()
}
