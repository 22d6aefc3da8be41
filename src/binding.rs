use napi::bindgen_prelude::Buffer;
use napi::{Error, Result, Status};

use crate::config::{brightness_offset, ConverterConfig};
use crate::error::{ConfigError, ConvertError};
use crate::types::ConvertOptions;
use crate::{engine, math};

fn convert_error(err: ConvertError) -> Error {
    Error::new(Status::InvalidArg, err.reason())
}

fn config_error(err: ConfigError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Fill `output` with one gray byte per pixel and return the pixel count.
/// Throws with a `[code] message` reason when the input is rejected.
#[napi]
pub fn process_rgb_to_gray(hex: String, width: u32, height: u32, mut output: Buffer) -> Result<u32> {
    let pixels = engine::process_rgb_to_gray(&hex, width, height, &mut output, &ConverterConfig::default())
        .map_err(convert_error)?;
    Ok(pixels as u32)
}

/// Saturating in-place brightness shift of the first `length` bytes.
#[napi]
pub fn apply_brightness(mut gray: Buffer, length: u32, offset: i32) -> Result<u32> {
    let offset = brightness_offset(offset).map_err(config_error)?;
    Ok(math::brightness::adjust(&mut gray, length as usize, offset) as u32)
}

/// Allocating variant: decode, convert and brighten into a new Buffer.
/// `config_json` supplies defaults that `options` override per call.
#[napi]
pub fn convert_hex_image(hex: String, options: ConvertOptions, config_json: Option<String>) -> Result<Buffer> {
    let base = match config_json {
        Some(json) => ConverterConfig::from_json(&json).map_err(config_error)?,
        None => ConverterConfig::default(),
    };
    let config = base.with_options(&options).map_err(config_error)?;
    let gray = engine::convert_hex_image(&hex, options.width, options.height, &config).map_err(convert_error)?;
    Ok(gray.into())
}

/// Route `tracing` output to stderr. Honors `RUST_LOG`; later calls are no-ops.
#[napi]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}
