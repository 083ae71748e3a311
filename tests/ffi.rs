//! Drives the exported C symbols the way a host application does: one call
//! per worker span, each span starting one row into the image.

use laplace_filter::ffi::{laplace_filter_error_message, laplace_filter_rgb, ApplyLaplaceFilter};
use laplace_filter::filters::partition::{plan_rows, ALLOWED_THREAD_COUNTS};
use laplace_filter::{laplace_rgb_u8, LaplaceError};
use std::ffi::CStr;

fn test_image(width: usize, height: usize) -> Vec<u8> {
    (0..width * height * 3)
        .map(|i| ((i * 71) ^ (i >> 3)) as u8)
        .collect()
}

#[test]
fn raw_spans_match_safe_sweep() {
    let (width, height) = (13, 11);
    let input = test_image(width, height);

    let mut expected = vec![0u8; input.len()];
    laplace_rgb_u8(&input, &mut expected, width, height).unwrap();

    for &threads in ALLOWED_THREAD_COUNTS.iter() {
        let mut output = vec![0u8; input.len()];
        for span in plan_rows(width, height, threads).unwrap() {
            unsafe {
                ApplyLaplaceFilter(
                    input.as_ptr().add(span.origin),
                    output.as_mut_ptr().add(span.origin),
                    width as i32,
                    span.len as i32,
                );
            }
        }
        assert_eq!(output, expected, "threads = {threads}");
    }
}

#[test]
fn raw_span_clamps_both_ways() {
    // 3x3 image: bright center on black, then dark center on white
    let stride = 9;
    let mut bright = vec![0u8; 27];
    bright[12..15].copy_from_slice(&[255, 255, 255]);
    let mut dark = vec![255u8; 27];
    dark[12..15].copy_from_slice(&[0, 0, 0]);

    for (input, expected) in [(bright, 255u8), (dark, 0u8)] {
        let mut output = vec![77u8; 27];
        unsafe {
            ApplyLaplaceFilter(
                input.as_ptr().add(stride),
                output.as_mut_ptr().add(stride),
                3,
                stride as i32,
            );
        }
        assert_eq!(&output[12..15], &[expected; 3]);
        assert!(output[..12].iter().chain(&output[15..]).all(|&v| v == 77));
    }
}

#[test]
fn checked_entry_matches_safe_sweep() {
    let (width, height) = (20, 15);
    let input = test_image(width, height);

    let mut expected = vec![0u8; input.len()];
    laplace_rgb_u8(&input, &mut expected, width, height).unwrap();

    for threads in [1, 3, 8, 64] {
        let mut output = vec![0u8; input.len()];
        let status = unsafe {
            laplace_filter_rgb(
                input.as_ptr(),
                output.as_mut_ptr(),
                width as i32,
                height as i32,
                threads,
            )
        };
        assert_eq!(status, 0);
        assert_eq!(output, expected, "threads = {threads}");
    }
}

#[test]
fn checked_entry_reports_status() {
    let input = vec![0u8; 12];
    let mut output = vec![5u8; 12];

    let status = unsafe { laplace_filter_rgb(input.as_ptr(), output.as_mut_ptr(), 2, 2, 1) };
    assert_eq!(status, LaplaceError::ImageTooSmall { height: 2 }.code());
    assert!(output.iter().all(|&v| v == 5));

    let message = unsafe { CStr::from_ptr(laplace_filter_error_message(status)) };
    assert!(message.to_str().unwrap().contains("too small"));
}
