//! Serializable results and per-stage diagnostics.
use serde::Serialize;

/// Compact outcome of one pipeline run.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResult {
    /// Input (and output) width in pixels.
    pub width: usize,
    /// Input (and output) height in pixels.
    pub height: usize,
    /// Gaussian mask side length used for this run.
    pub mask_size: usize,
    /// Number of confirmed (255) pixels in the final edge map.
    pub edge_pixels: usize,
    /// Wall-clock duration of the whole pipeline call.
    pub latency_ms: f64,
}

/// Dimensions of the caller's buffer.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Wall-clock milliseconds spent in each stage.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub luminance_ms: f64,
    pub pad_ms: f64,
    pub blur_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
    pub crop_ms: f64,
    pub total_ms: f64,
}

/// Geometry and timing trace of one pipeline run.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub padded_width: usize,
    pub padded_height: usize,
    pub mask_size: usize,
    pub half_mask_size: usize,
    pub timing: TimingBreakdown,
}

/// Full report: the compact result plus the pipeline trace.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub result: EdgeResult,
    pub trace: PipelineTrace,
}
