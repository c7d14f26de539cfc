//! The Canny pipeline stages.
//!
//! Each submodule implements one stage, operating on the buffers left by the
//! previous stage:
//!
//! - [`luminance`]: in-place RGB → grayscale conversion.
//! - [`pad`]: mask geometry from sigma, edge-replication padding, final crop.
//! - [`blur`]: Gaussian kernel construction and convolution.
//! - [`grad`]: Sobel gradients with magnitude rescaling and 4-bucket
//!   direction quantization.
//! - [`nms`]: direction-keyed non-maximum suppression with tie-breaks.
//! - [`hysteresis`]: two-threshold edge confirmation via worklist flood fill.
//!
//! The stages are free functions over the buffer types in [`crate::image`];
//! [`crate::detector::EdgeDetector`] sequences them. Border handling
//! replicates the nearest valid pixel throughout.

pub mod blur;
pub mod grad;
pub mod hysteresis;
pub mod luminance;
pub mod nms;
pub mod pad;

pub use blur::gaussian_kernel;
pub use grad::{sobel_gradients, Gradients};
pub use pad::MaskGeometry;
