pub mod brightness;
pub mod hex;
pub mod luminance;
