//! Detector parameters.
//!
//! Defaults match the common textbook setting (sigma 1, thresholds 50/100)
//! and are what the bin tool falls back to when the config omits a field.
use super::error::EdgeError;
use serde::Deserialize;

/// Parameters of the fixed Canny pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Standard deviation of the Gaussian blur kernel; determines the mask
    /// size and the padding margin. Must be positive and finite.
    pub sigma: f32,
    /// Magnitude at or above which a pixel can be pulled into an edge
    /// adjacent to a confirmed one.
    pub low_threshold: u8,
    /// Magnitude at or above which a pixel seeds a confirmed edge.
    pub high_threshold: u8,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            low_threshold: 50,
            high_threshold: 100,
        }
    }
}

impl EdgeParams {
    /// Reject parameter combinations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), EdgeError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(EdgeError::InvalidSigma);
        }
        if self.low_threshold > self.high_threshold {
            return Err(EdgeError::InvalidThresholds {
                low: self.low_threshold,
                high: self.high_threshold,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(EdgeParams::default().validate().is_ok());
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        for sigma in [0.0_f32, -1.0, f32::NAN, f32::INFINITY] {
            let params = EdgeParams {
                sigma,
                ..Default::default()
            };
            assert_eq!(params.validate(), Err(EdgeError::InvalidSigma));
        }
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let params = EdgeParams {
            low_threshold: 120,
            high_threshold: 40,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(EdgeError::InvalidThresholds { low: 120, high: 40 })
        );
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: EdgeParams = serde_json::from_str(r#"{"sigma": 2.0}"#).unwrap();
        assert_eq!(params.sigma, 2.0);
        assert_eq!(params.low_threshold, 50);
        assert_eq!(params.high_threshold, 100);
    }
}
