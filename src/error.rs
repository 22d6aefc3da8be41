use thiserror::Error;

/// Rejections from the hex decode stage, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("odd hex length {len}")]
    OddLength { len: usize },

    #[error("decoded size {needed} exceeds staging capacity {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("invalid hex digit {found:?} at offset {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Failure of a full hex -> grayscale conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Hex(#[from] HexError),

    /// `width * height * 3` is larger than the decoded pixel data (or overflows).
    #[error("image needs {needed} bytes of RGB data but only {available} were decoded")]
    GeometryMismatch { needed: usize, available: usize },

    #[error("output buffer holds {available} bytes but {needed} pixels were requested")]
    OutputTooSmall { needed: usize, available: usize },
}

impl ConvertError {
    /// Integer code reported across the host boundary.
    ///
    /// `-1..=-3` are the historical decode codes; `-4` and `-5` cover the
    /// geometry and output checks.
    pub fn code(&self) -> i32 {
        match self {
            ConvertError::Hex(HexError::OddLength { .. }) => -1,
            ConvertError::Hex(HexError::CapacityExceeded { .. }) => -2,
            ConvertError::Hex(HexError::InvalidDigit { .. }) => -3,
            ConvertError::GeometryMismatch { .. } => -4,
            ConvertError::OutputTooSmall { .. } => -5,
        }
    }

    /// Message thrown to the host: `[<code>] <display>`.
    pub fn reason(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid converter config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("staging capacity {capacity} out of range 1..={max}")]
    CapacityOutOfRange { capacity: usize, max: usize },

    #[error("brightness offset {offset} does not fit in 16 bits")]
    BrightnessOutOfRange { offset: i32 },
}
