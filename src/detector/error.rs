/// Errors produced by parameter validation and pipeline setup.
///
/// The first three variants reject invalid parameters before any buffer is
/// touched; `ImageTooLarge` covers padded dimensions that overflow address
/// arithmetic. The caller's buffer is never partially mutated on error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EdgeError {
    /// Sigma must be positive and finite.
    #[error("invalid sigma: must be positive and finite")]
    InvalidSigma,

    /// The low threshold must not exceed the high threshold.
    #[error("invalid thresholds: low ({low}) exceeds high ({high})")]
    InvalidThresholds { low: u8, high: u8 },

    /// Zero-sized input image.
    #[error("empty input image ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// The padded working buffer would not fit in memory.
    #[error("image too large to pad: {width}x{height} with margin {margin}")]
    ImageTooLarge {
        width: usize,
        height: usize,
        margin: usize,
    },
}
