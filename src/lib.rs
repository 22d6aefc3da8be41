//! Hex-encoded RGB -> 8-bit grayscale conversion for Node hosts.
//!
//! The host hands over pixel data as a hex string (2 characters per byte,
//! 3 bytes per pixel, row-major, no header). Each call decodes into its own
//! staging area, converts with fixed-point luminance weights, and can apply a
//! saturating brightness offset.

#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod types;

// Node-API symbols only resolve inside a Node process.
#[cfg(not(test))]
mod binding;
