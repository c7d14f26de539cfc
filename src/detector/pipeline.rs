//! Pipeline driver sequencing the Canny stages end-to-end.
//!
//! [`EdgeDetector`] exposes a simple API: feed a mutable RGB buffer and get
//! it back holding a binary edge map, with per-stage timings on request.
//! Every working buffer is owned by the call, so a detector can safely be
//! shared across independent invocations.
//!
//! Typical usage:
//! ```no_run
//! use canny_detector::{EdgeDetector, EdgeParams};
//! use canny_detector::image::RgbU8;
//!
//! # fn example(image: &mut RgbU8) -> Result<(), canny_detector::EdgeError> {
//! let detector = EdgeDetector::new(EdgeParams::default())?;
//! let result = detector.process(image)?;
//! println!("edges: {} in {:.3} ms", result.edge_pixels, result.latency_ms);
//! # Ok(())
//! # }
//! ```
use super::error::EdgeError;
use super::params::EdgeParams;
use crate::canny::{blur, grad, hysteresis, luminance, nms, pad};
use crate::diagnostics::{EdgeReport, EdgeResult, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::image::RgbU8;
use log::debug;
use std::time::Instant;

/// Canny edge detector with a fixed stage sequence:
/// grayscale → pad → blur → gradient → suppress → threshold → crop.
#[derive(Clone, Debug)]
pub struct EdgeDetector {
    params: EdgeParams,
}

impl EdgeDetector {
    /// Create a detector, rejecting invalid parameters up front.
    pub fn new(params: EdgeParams) -> Result<Self, EdgeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Run the pipeline in place, returning a compact result.
    pub fn process(&self, image: &mut RgbU8) -> Result<EdgeResult, EdgeError> {
        self.process_with_diagnostics(image).map(|r| r.result)
    }

    /// Run the pipeline in place and report per-stage timings.
    pub fn process_with_diagnostics(&self, image: &mut RgbU8) -> Result<EdgeReport, EdgeError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(EdgeError::EmptyImage { width, height });
        }

        let geom = pad::MaskGeometry::from_sigma(self.params.sigma);
        let (padded_w, padded_h) = padded_dims(width, height, geom.half)?;
        debug!(
            "EdgeDetector::process start w={} h={} sigma={} mask={} padded={}x{}",
            width, height, self.params.sigma, geom.mask_size, padded_w, padded_h
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let stage_start = Instant::now();
        luminance::to_grayscale(image);
        timing.luminance_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let mut workspace = pad::expand(image, geom.half);
        timing.pad_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let kernel = blur::gaussian_kernel(self.params.sigma, geom.mask_size);
        blur::convolve(&mut workspace, &kernel);
        // The blur leaves the border ring as the padding stage wrote it;
        // refresh it from the blurred interior so the ring/interior seam
        // cannot register as a gradient.
        pad::replicate_border(&mut workspace, geom.half);
        timing.blur_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let gradients = grad::sobel_gradients(&workspace);
        workspace.data.copy_from_slice(&gradients.mag.data);
        timing.gradient_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        nms::suppress(&mut workspace, &gradients.mag, &gradients.dir);
        timing.nms_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        hysteresis::threshold(
            &mut workspace,
            self.params.low_threshold,
            self.params.high_threshold,
        );
        timing.hysteresis_ms = ms_since(stage_start);

        let stage_start = Instant::now();
        let edge_pixels = pad::shrink(&workspace, image, geom.half);
        timing.crop_ms = ms_since(stage_start);

        timing.total_ms = ms_since(total_start);
        debug!(
            "EdgeDetector::process done edges={} total_ms={:.3}",
            edge_pixels, timing.total_ms
        );

        Ok(EdgeReport {
            result: EdgeResult {
                width,
                height,
                mask_size: geom.mask_size,
                edge_pixels,
                latency_ms: timing.total_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor { width, height },
                padded_width: padded_w,
                padded_height: padded_h,
                mask_size: geom.mask_size,
                half_mask_size: geom.half,
                timing,
            },
        })
    }
}

fn padded_dims(width: usize, height: usize, half: usize) -> Result<(usize, usize), EdgeError> {
    let too_large = EdgeError::ImageTooLarge {
        width,
        height,
        margin: half,
    };
    let margin = half.checked_mul(2).ok_or_else(|| too_large.clone())?;
    let pw = width.checked_add(margin).ok_or_else(|| too_large.clone())?;
    let ph = height.checked_add(margin).ok_or_else(|| too_large.clone())?;
    pw.checked_mul(ph).ok_or(too_large)?;
    Ok((pw, ph))
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_images() {
        let detector = EdgeDetector::new(EdgeParams::default()).unwrap();
        let mut img = RgbU8::new(0, 0);
        assert_eq!(
            detector.process(&mut img),
            Err(EdgeError::EmptyImage {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn rejects_invalid_params_at_construction() {
        assert!(EdgeDetector::new(EdgeParams {
            sigma: -1.0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn report_carries_consistent_geometry() {
        let detector = EdgeDetector::new(EdgeParams::default()).unwrap();
        let mut img = RgbU8::new(16, 12);
        let report = detector.process_with_diagnostics(&mut img).unwrap();
        let trace = &report.trace;
        assert_eq!(trace.mask_size % 2, 1);
        assert_eq!(trace.half_mask_size, trace.mask_size / 2);
        assert_eq!(trace.padded_width, 16 + 2 * trace.half_mask_size);
        assert_eq!(trace.padded_height, 12 + 2 * trace.half_mask_size);
        assert_eq!(report.result.width, 16);
        assert_eq!(report.result.height, 12);
    }
}
