use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("resolution must be between 2 and 256, got {0}")]
    InvalidResolution(u32),

    #[error("distinct threshold must be finite and non-negative, got {0}")]
    InvalidDistinctThreshold(f32),

    #[error("bright threshold must be within 0.0..=1.0, got {0}")]
    InvalidBrightThreshold(f32),

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
}
