//! WebAssembly exports for the Laplace filter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. JavaScript
//! canvases are RGBA, so callers strip alpha before handing the buffer over.

use wasm_bindgen::prelude::*;

use crate::filters::laplace::laplace_rgb_u8;

/// Apply the Laplace filter to a flat RGB image.
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels (at least 3)
///
/// # Returns
/// Flat array of filtered RGB bytes; border pixels are 0
#[wasm_bindgen]
pub fn laplace_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let mut output = vec![0u8; data.len()];
    laplace_rgb_u8(data, &mut output, width, height)?;
    Ok(output)
}
