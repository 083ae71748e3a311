//! Parallel Laplace sweep using rayon.
//!
//! Each output sample depends only on the input, so the interior rows can be
//! split into disjoint spans and filtered concurrently. The result is
//! byte-identical to [`laplace_rgb_u8`](crate::filters::laplace::laplace_rgb_u8).

use log::{debug, warn};
use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::error::LaplaceError;
use crate::filters::laplace::{check_image, filter_array, laplace_span};
use crate::filters::partition::{closest_thread_count, plan_rows};

/// Options for the parallel sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Number of spans the image is split into. Snapped to one of
    /// [`ALLOWED_THREAD_COUNTS`](crate::filters::partition::ALLOWED_THREAD_COUNTS)
    /// when built through [`with_threads`](Self::with_threads) or `Default`;
    /// any value of at least 1 is accepted when set directly.
    pub threads: usize,
}

impl ParallelOptions {
    /// Options for `requested` workers, snapped to the nearest allowed count.
    pub fn with_threads(requested: usize) -> Self {
        let threads = closest_thread_count(requested);
        if threads != requested {
            warn!("laplace: {requested} threads not supported, using {threads}");
        }
        Self { threads }
    }
}

impl Default for ParallelOptions {
    /// Sized to the current rayon pool.
    fn default() -> Self {
        Self {
            threads: closest_thread_count(rayon::current_num_threads()),
        }
    }
}

/// Filter a whole RGB image with the rows split across workers.
///
/// # Arguments
/// * `input` - Flat RGB bytes, `width * height * 3` long
/// * `output` - Destination of the same length; border bytes are left untouched
/// * `width` - Image width in pixels
/// * `height` - Image height in rows (at least 3)
/// * `options` - Worker count
pub fn laplace_rgb_parallel(
    input: &[u8],
    output: &mut [u8],
    width: usize,
    height: usize,
    options: &ParallelOptions,
) -> Result<(), LaplaceError> {
    let stride = check_image(input.len(), output.len(), width, height)?;
    let plan = plan_rows(width, height, options.threads)?;
    debug!(
        "laplace: {}x{} image, {} interior rows over {} spans",
        width,
        height,
        height - 2,
        plan.len()
    );

    let mut jobs = Vec::with_capacity(plan.len());
    let mut rest = &mut output[stride..];
    for span in &plan {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(span.len);
        jobs.push((span.origin, chunk));
        rest = tail;
    }

    jobs.into_par_iter()
        .try_for_each(|(origin, chunk)| laplace_span(input, chunk, width, origin))
}

/// Filter an `(height, width, 3)` array into a new array, in parallel.
///
/// Border samples of the result are 0.
pub fn laplace_rgb_array_parallel(
    input: ArrayView3<u8>,
    options: &ParallelOptions,
) -> Result<Array3<u8>, LaplaceError> {
    filter_array(input, |src, dst, width, height| {
        laplace_rgb_parallel(src, dst, width, height, options)
    })
}
