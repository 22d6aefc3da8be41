use crate::config::{ConverterConfig, MAX_STAGING_CAPACITY};
use crate::error::ConvertError;
use crate::math::{brightness, hex, luminance};

/// Decode `hex` into the caller's scratch region, then convert the decoded
/// RGB data into `output`.
///
/// `staging.len()` is the decode capacity. Decode completes before any
/// conversion work starts, so `output` is untouched on a decode error.
pub fn process_with_staging(
    hex_input: &str,
    width: u32,
    height: u32,
    staging: &mut [u8],
    output: &mut [u8],
) -> Result<usize, ConvertError> {
    let decoded = hex::decode_into(hex_input, staging)?;
    luminance::convert(&staging[..decoded], width, height, output)
}

/// Hex RGB -> grayscale with a staging area owned by this call.
///
/// Only the first `config.capacity` bytes of the stack staging array are
/// visible to the decoder. Brightness is not applied here.
pub fn process_rgb_to_gray(
    hex_input: &str,
    width: u32,
    height: u32,
    output: &mut [u8],
    config: &ConverterConfig,
) -> Result<usize, ConvertError> {
    let mut staging = [0u8; MAX_STAGING_CAPACITY];
    let capacity = config.capacity.min(MAX_STAGING_CAPACITY);

    let result = process_with_staging(hex_input, width, height, &mut staging[..capacity], output);
    match &result {
        Ok(pixels) => tracing::debug!(
            "converted {}x{} image: {} pixels (capacity {})",
            width,
            height,
            pixels,
            capacity
        ),
        Err(err) => tracing::warn!("rejected {}x{} hex image [{}]: {}", width, height, err.code(), err),
    }
    result
}

/// Full pipeline into a freshly allocated, exactly sized grayscale buffer.
/// Applies `config.brightness` when it is non-zero.
pub fn convert_hex_image(
    hex_input: &str,
    width: u32,
    height: u32,
    config: &ConverterConfig,
) -> Result<Vec<u8>, ConvertError> {
    // Geometry is checked against the decoded length before conversion, so a
    // buffer of decoded/3 bytes always fits the requested pixels.
    let mut output = vec![0u8; config.capacity.min(MAX_STAGING_CAPACITY) / 3];
    let pixels = process_rgb_to_gray(hex_input, width, height, &mut output, config)?;
    output.truncate(pixels);

    if config.brightness != 0 {
        brightness::adjust(&mut output, pixels, config.brightness);
        tracing::debug!("applied brightness {} to {} pixels", config.brightness, pixels);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HexError;

    // 8x8 sample image, 192 bytes of RGB.
    const SAMPLE_8X8: &str = concat!(
        "47704C47704C47704C000000FFFFFF04040347704C47704C",
        "47704C95BF2BA9CB431467AB145194EFEFEF47704C47704C",
        "47704C9AC32DFFFFFF135EA4145194123C73A0BBCD47704C",
        "000000FFFFFF49AEDA8DD3F05E7C94265B94FFFFFF040503",
        "000000FFFFFFFEE404E3D236363531979255485F13000000",
        "47704CFFFFFFFEF02FF6F6F6E6EBF6E6EBF65F861C47704C",
        "47704C47704CE1E1E1F4F4F4F6F6F678A023FEFEFE47704C",
        "47704C47704C89B13B00000000000047704C47704CFFFFFF",
    );

    #[test]
    fn single_red_pixel_end_to_end() {
        let mut output = [0u8; 1];
        let pixels = process_rgb_to_gray("FF0000", 1, 1, &mut output, &ConverterConfig::default()).unwrap();
        assert_eq!(pixels, 1);
        assert_eq!(output, [76]);

        assert_eq!(brightness::adjust(&mut output, pixels, 50), 1);
        assert_eq!(output, [126]);
    }

    #[test]
    fn sample_image_converts_64_pixels() {
        let mut output = [0u8; 64];
        let pixels = process_rgb_to_gray(SAMPLE_8X8, 8, 8, &mut output, &ConverterConfig::default()).unwrap();
        assert_eq!(pixels, 64);
        // 47704C -> (71*77 + 112*150 + 76*29) >> 8 = 95
        assert_eq!(output[0], 95);
        assert_eq!(output[3], 0);
        assert_eq!(output[4], 255);
        assert_eq!(output[63], 255);
    }

    #[test]
    fn decode_errors_surface_with_codes() {
        let config = ConverterConfig::default();
        let mut output = [0u8; 4];

        let err = process_rgb_to_gray("ABC", 1, 1, &mut output, &config).unwrap_err();
        assert_eq!(err, ConvertError::Hex(HexError::OddLength { len: 3 }));
        assert_eq!(err.code(), -1);

        let long = "00".repeat(257);
        let err = process_rgb_to_gray(&long, 1, 1, &mut output, &config).unwrap_err();
        assert_eq!(err.code(), -2);

        let err = process_rgb_to_gray("GG0000", 1, 1, &mut output, &config).unwrap_err();
        assert_eq!(err.code(), -3);
    }

    #[test]
    fn rejected_input_carries_host_reason() {
        let mut output = [0u8; 1];
        let err = process_rgb_to_gray("GG0000", 1, 1, &mut output, &ConverterConfig::default()).unwrap_err();
        assert_eq!(err.reason(), "[-3] invalid hex digit 'G' at offset 0");
    }

    #[test]
    fn output_untouched_on_decode_error() {
        let mut output = [42u8; 2];
        let _ = process_rgb_to_gray("FF00zz", 1, 1, &mut output, &ConverterConfig::default());
        assert_eq!(output, [42, 42]);
    }

    #[test]
    fn geometry_beyond_decoded_data_is_rejected() {
        let mut output = [0u8; 4];
        let err = process_rgb_to_gray("FF0000", 2, 2, &mut output, &ConverterConfig::default()).unwrap_err();
        assert_eq!(err, ConvertError::GeometryMismatch { needed: 12, available: 3 });
        assert_eq!(err.code(), -4);
    }

    #[test]
    fn larger_capacity_accepts_larger_input() {
        let hex = "FFFFFF".repeat(100); // 300 bytes
        let mut output = [0u8; 100];

        let small = ConverterConfig::default();
        assert_eq!(
            process_rgb_to_gray(&hex, 10, 10, &mut output, &small).unwrap_err().code(),
            -2
        );

        let large = ConverterConfig {
            capacity: 512,
            brightness: 0,
        };
        assert_eq!(process_rgb_to_gray(&hex, 10, 10, &mut output, &large), Ok(100));
        assert!(output.iter().all(|&g| g == 255));
    }

    #[test]
    fn caller_staging_is_reusable() {
        let mut staging = [0u8; 6];
        let mut output = [0u8; 2];

        assert_eq!(process_with_staging("FF0000000000", 2, 1, &mut staging, &mut output), Ok(2));
        assert_eq!(output, [76, 0]);

        assert_eq!(process_with_staging("FFFFFF", 1, 1, &mut staging, &mut output), Ok(1));
        assert_eq!(output[0], 255);
    }

    #[test]
    fn caller_staging_length_is_the_capacity() {
        let mut staging = [0u8; 2];
        let mut output = [0u8; 1];
        let err = process_with_staging("FF0000", 1, 1, &mut staging, &mut output).unwrap_err();
        assert_eq!(err, ConvertError::Hex(HexError::CapacityExceeded { needed: 3, capacity: 2 }));
    }

    #[test]
    fn convert_hex_image_sizes_output_exactly() {
        let gray = convert_hex_image(SAMPLE_8X8, 8, 8, &ConverterConfig::default()).unwrap();
        assert_eq!(gray.len(), 64);
    }

    #[test]
    fn convert_hex_image_applies_brightness() {
        let config = ConverterConfig {
            capacity: 256,
            brightness: 50,
        };
        assert_eq!(convert_hex_image("FF0000FFFFFF", 2, 1, &config).unwrap(), vec![126, 255]);
    }

    #[test]
    fn convert_hex_image_rejects_oversized_geometry() {
        let err = convert_hex_image("FF0000", 1000, 1000, &ConverterConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::GeometryMismatch { .. }));
    }

    #[test]
    fn empty_image_yields_empty_output() {
        assert_eq!(convert_hex_image("", 0, 0, &ConverterConfig::default()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let config = ConverterConfig::default();
        let first = convert_hex_image(SAMPLE_8X8, 8, 8, &config).unwrap();
        let second = convert_hex_image(SAMPLE_8X8, 8, 8, &config).unwrap();
        assert_eq!(first, second);
    }
}
