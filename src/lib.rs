#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;

// Stage internals – public for tooling and tests, but considered unstable.
pub mod canny;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + params + results.
pub use crate::detector::{EdgeDetector, EdgeError, EdgeParams};
pub use crate::diagnostics::{EdgeReport, EdgeResult, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_detector::prelude::*;
///
/// # fn main() -> Result<(), EdgeError> {
/// let mut image = RgbU8::new(640, 480);
/// let detector = EdgeDetector::new(EdgeParams::default())?;
/// let result = detector.process(&mut image)?;
/// println!("edges={} latency_ms={:.3}", result.edge_pixels, result.latency_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::detector::{EdgeDetector, EdgeError, EdgeParams};
    pub use crate::diagnostics::{EdgeReport, EdgeResult};
    pub use crate::image::{GrayU8, RgbU8};
}
