//! Splitting an image into per-worker row spans.
//!
//! The interior rows (everything but the first and last row) are divided
//! evenly between workers; the last worker also takes the remainder.

use crate::error::LaplaceError;
use crate::filters::laplace::row_stride;

/// Worker counts a host may choose from.
pub const ALLOWED_THREAD_COUNTS: [usize; 7] = [1, 2, 4, 8, 16, 32, 64];

/// Snap a requested worker count to the nearest allowed value.
///
/// Ties go to the smaller count.
pub fn closest_thread_count(requested: usize) -> usize {
    ALLOWED_THREAD_COUNTS
        .iter()
        .copied()
        .min_by_key(|&n| n.abs_diff(requested))
        .unwrap_or(1)
}

/// A contiguous byte range of the image handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first sample inside the image buffer.
    pub origin: usize,
    /// Number of samples in the span.
    pub len: usize,
}

impl Span {
    pub fn end(&self) -> usize {
        self.origin + self.len
    }
}

/// Build the partition plan for `threads` workers.
///
/// # Arguments
/// * `width` - Image width in pixels
/// * `height` - Image height in rows (at least 3)
/// * `threads` - Number of workers (at least 1)
///
/// # Returns
/// One span per worker, in buffer order. Spans are adjacent and together
/// cover rows `1..height-1`. Workers may receive empty spans when there are
/// more workers than interior rows.
pub fn plan_rows(width: usize, height: usize, threads: usize) -> Result<Vec<Span>, LaplaceError> {
    let stride = row_stride(width)?;
    if height < 3 {
        return Err(LaplaceError::ImageTooSmall { height });
    }
    if threads == 0 {
        return Err(LaplaceError::InvalidThreadCount(0));
    }

    let interior_rows = height - 2;
    let rows_per_worker = interior_rows / threads;
    let remainder = interior_rows % threads;

    let spans = (0..threads)
        .map(|t| {
            let rows = if t == threads - 1 {
                rows_per_worker + remainder
            } else {
                rows_per_worker
            };
            Span {
                origin: stride + t * rows_per_worker * stride,
                len: rows * stride,
            }
        })
        .collect();

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_to_allowed_counts() {
        assert_eq!(closest_thread_count(0), 1);
        assert_eq!(closest_thread_count(1), 1);
        assert_eq!(closest_thread_count(3), 2);
        assert_eq!(closest_thread_count(5), 4);
        assert_eq!(closest_thread_count(7), 8);
        assert_eq!(closest_thread_count(48), 32);
        assert_eq!(closest_thread_count(100), 64);
    }

    #[test]
    fn test_plan_covers_interior_rows_once() {
        let (width, height) = (10, 23);
        let stride = width * 3;

        for &threads in ALLOWED_THREAD_COUNTS.iter() {
            let plan = plan_rows(width, height, threads).unwrap();
            assert_eq!(plan.len(), threads);
            assert_eq!(plan[0].origin, stride);
            for pair in plan.windows(2) {
                assert_eq!(pair[0].end(), pair[1].origin);
            }
            assert_eq!(plan[threads - 1].end(), (height - 1) * stride);
            assert!(plan.iter().all(|span| span.len % stride == 0));
        }
    }

    #[test]
    fn test_last_worker_takes_remainder() {
        // 7 interior rows over 2 workers: 3 + 4
        let plan = plan_rows(4, 9, 2).unwrap();
        assert_eq!(plan, vec![Span { origin: 12, len: 36 }, Span { origin: 48, len: 48 }]);
    }

    #[test]
    fn test_more_workers_than_rows() {
        let plan = plan_rows(4, 4, 8).unwrap();
        assert!(plan[..7].iter().all(|span| span.len == 0));
        assert_eq!(plan[7], Span { origin: 12, len: 24 });
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(plan_rows(4, 2, 1), Err(LaplaceError::ImageTooSmall { height: 2 }));
        assert_eq!(plan_rows(4, 5, 0), Err(LaplaceError::InvalidThreadCount(0)));
        assert_eq!(plan_rows(0, 5, 1), Err(LaplaceError::InvalidWidth(0)));
    }
}
