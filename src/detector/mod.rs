//! The public detector surface: parameters, errors, and the pipeline driver.

pub mod error;
pub mod params;
pub mod pipeline;

pub use error::EdgeError;
pub use params::EdgeParams;
pub use pipeline::EdgeDetector;
