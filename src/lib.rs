//! Laplace Filter
//!
//! Edge detection over interleaved RGB byte buffers, callable from Rust,
//! from any language with a C FFI, from Python via PyO3 and from JavaScript
//! via WASM.
//!
//! ## Image Format
//! - **RGB**: (height, width, 3) - 3 interleaved color channels, u8 (0-255)
//! - Rows are packed: the byte stride of a row is `width * 3`
//!
//! ## Entry Points
//! - [`ffi::ApplyLaplaceFilter`] - raw, unchecked kernel over a row span
//! - [`ffi::laplace_filter_rgb`] - checked whole-image filter with status codes
//! - [`filters::laplace`] / [`filters::parallel`] - safe Rust API
//!
//! Border samples (first/last pixel of each row, and the first/last row for
//! whole-image calls) are never written.

pub mod error;
pub mod ffi;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::LaplaceError;
pub use filters::laplace::{laplace_rgb_array, laplace_rgb_u8, laplace_span, CHANNELS};
pub use filters::parallel::{laplace_rgb_array_parallel, laplace_rgb_parallel, ParallelOptions};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters::laplace::laplace_rgb_array;
    use crate::filters::parallel::{laplace_rgb_array_parallel, ParallelOptions};

    /// Apply the Laplace edge filter to an RGB u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image of shape (height, width, 3), at least 3 rows
    /// * `threads` - Split the rows across this many workers (1, 2, 4, ... 64)
    ///
    /// Border pixels of the result are 0.
    #[pyfunction]
    #[pyo3(signature = (image, threads=None))]
    pub fn laplace<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threads: Option<usize>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        let result = match threads {
            Some(n) => laplace_rgb_array_parallel(input, &ParallelOptions::with_threads(n)),
            None => laplace_rgb_array(input),
        }
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(result.into_pyarray(py))
    }

    /// Laplace filter extension module
    #[pymodule]
    pub fn laplace_filter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(laplace, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::laplace_filter;
