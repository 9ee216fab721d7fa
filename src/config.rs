//! Configuration management for the laugh detection pipeline.
//!
//! All numeric tunables are supplied as an immutable configuration object at
//! detector construction time. The YAML file format here is loading glue for
//! the binary; the core only sees the parsed [`DetectionConfig`].

use crate::scoring::FeatureWeights;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Laugh detection configuration
    pub detection: DetectionConfig,
}

/// Laugh detection parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Default sensitivity multiplier applied to the composite score
    pub default_sensitivity: f32,

    /// Lower sensitivity bound (0.0-max)
    pub min_sensitivity: f32,

    /// Upper sensitivity bound
    pub max_sensitivity: f32,

    /// Step size for caller-facing sensitivity controls
    pub sensitivity_step: f32,

    /// Base decision threshold before adaptive adjustment (0.0-1.0)
    pub base_threshold: f32,

    /// Floor for the adaptive threshold (0.0-1.0)
    pub min_threshold: f32,

    /// Consecutive above-threshold frames required to enter laughing
    pub frames_to_start: usize,

    /// Consecutive below-threshold frames required to exit laughing
    pub frames_to_stop: usize,

    /// Capacity of the score/confidence history buffers
    pub history_size: usize,

    /// Moving-average window for smoothed score and confidence
    pub smoothing_window: usize,

    /// Feature weights for the composite score
    pub weights: FeatureWeights,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            default_sensitivity: DEFAULT_SENSITIVITY,
            min_sensitivity: MIN_SENSITIVITY,
            max_sensitivity: MAX_SENSITIVITY,
            sensitivity_step: SENSITIVITY_STEP,
            base_threshold: DEFAULT_BASE_THRESHOLD,
            min_threshold: DEFAULT_MIN_THRESHOLD,
            frames_to_start: DEFAULT_FRAMES_TO_START,
            frames_to_stop: DEFAULT_FRAMES_TO_STOP,
            history_size: DEFAULT_HISTORY_SIZE,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            weights: FeatureWeights::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a [`Error::ConfigError`] describing the first out-of-range
    /// parameter found.
    pub fn validate(&self) -> Result<()> {
        let d = &self.detection;

        if d.min_sensitivity <= 0.0 || d.min_sensitivity > d.max_sensitivity {
            return Err(Error::ConfigError(
                "Sensitivity bounds must satisfy 0 < min <= max".to_string(),
            ));
        }
        if d.default_sensitivity < d.min_sensitivity || d.default_sensitivity > d.max_sensitivity {
            return Err(Error::ConfigError(
                "Default sensitivity must lie within the sensitivity bounds".to_string(),
            ));
        }
        if d.sensitivity_step <= 0.0 {
            return Err(Error::ConfigError(
                "Sensitivity step must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&d.base_threshold) {
            return Err(Error::ConfigError(
                "Base threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&d.min_threshold) || d.min_threshold > d.base_threshold {
            return Err(Error::ConfigError(
                "Min threshold must be between 0.0 and the base threshold".to_string(),
            ));
        }

        if d.frames_to_start == 0 || d.frames_to_stop == 0 {
            return Err(Error::ConfigError(
                "Consecutive frame requirements must be greater than 0".to_string(),
            ));
        }

        if d.smoothing_window == 0 {
            return Err(Error::ConfigError(
                "Smoothing window must be greater than 0".to_string(),
            ));
        }
        if d.history_size < d.smoothing_window {
            return Err(Error::ConfigError(
                "History size must be at least the smoothing window".to_string(),
            ));
        }

        let weights = [d.weights.mouth, d.weights.eye, d.weights.cheek];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::ConfigError(
                "Feature weights must be finite and non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Laugh Detection Configuration

detection:
  # Sensitivity multiplier and its tuning bounds
  default_sensitivity: 1.3
  min_sensitivity: 0.5
  max_sensitivity: 3.0
  sensitivity_step: 0.1

  # Decision thresholds
  base_threshold: 0.4
  min_threshold: 0.25
  frames_to_start: 3
  frames_to_stop: 5

  # History tracking
  history_size: 20
  smoothing_window: 10

  # Feature weights
  weights:
    mouth: 0.4
    eye: 0.3
    cheek: 0.3
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection.history_size, 20);
        assert!((config.detection.default_sensitivity - 1.3).abs() < 1e-6);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.detection.frames_to_stop, 5);
        assert!((config.detection.weights.mouth - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_yaml::from_str("detection:\n  history_size: 40\n").unwrap();
        assert_eq!(config.detection.history_size, 40);
        assert_eq!(config.detection.smoothing_window, 10);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let mut config = Config::default();
        config.detection.base_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.detection.min_threshold = 0.5; // above base_threshold
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_sensitivity_bounds_rejected() {
        let mut config = Config::default();
        config.detection.min_sensitivity = 2.0;
        config.detection.max_sensitivity = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_frame_requirements_rejected() {
        let mut config = Config::default();
        config.detection.frames_to_start = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_smoothing_window_bounded_by_history() {
        let mut config = Config::default();
        config.detection.smoothing_window = 30;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.detection.history_size, config.detection.history_size);
        assert!(
            (parsed.detection.base_threshold - config.detection.base_threshold).abs() < 1e-6
        );
    }
}
