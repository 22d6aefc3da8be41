use crate::error::ConvertError;

// 0.299 / 0.587 / 0.114 scaled by 256; the weights sum to 256.
const R_WEIGHT: u32 = 77;
const G_WEIGHT: u32 = 150;
const B_WEIGHT: u32 = 29;

/// Fixed-point luminance of one RGB pixel.
pub fn gray_value(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
    // sum <= 255 * 256, so the shift always lands in 0..=255
    (sum >> 8) as u8
}

/// Convert `width * height` interleaved RGB triples from the front of
/// `pixels` into one grayscale byte each, written to the front of `output`.
///
/// Geometry is validated against both buffers before any byte is written.
/// Returns the number of pixels converted.
pub fn convert(pixels: &[u8], width: u32, height: u32, output: &mut [u8]) -> Result<usize, ConvertError> {
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(ConvertError::GeometryMismatch {
            needed: usize::MAX,
            available: pixels.len(),
        })?;
    let needed = pixel_count
        .checked_mul(3)
        .ok_or(ConvertError::GeometryMismatch {
            needed: usize::MAX,
            available: pixels.len(),
        })?;

    if needed > pixels.len() {
        return Err(ConvertError::GeometryMismatch {
            needed,
            available: pixels.len(),
        });
    }
    if pixel_count > output.len() {
        return Err(ConvertError::OutputTooSmall {
            needed: pixel_count,
            available: output.len(),
        });
    }

    for (rgb, gray) in pixels[..needed].chunks_exact(3).zip(output.iter_mut()) {
        *gray = gray_value(rgb[0], rgb[1], rgb[2]);
    }

    Ok(pixel_count)
}
