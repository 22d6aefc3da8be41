/// Per-call options passed from JS to Rust
#[cfg_attr(not(test), napi(object))]
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub width: u32,
    pub height: u32,
    /// Added to every gray value after conversion. Must fit in i16. None = config default.
    pub brightness: Option<i32>,
    /// Staging capacity in decoded bytes. None = config default.
    pub capacity: Option<u32>,
}
