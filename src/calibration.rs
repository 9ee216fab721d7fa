//! Baseline calibration from neutral-expression samples.
//!
//! Accumulates the element-wise mean of a batch of landmark sets captured
//! while the subject holds a neutral face. The baseline is stored as
//! detector state with a capture timestamp. Note that the live scoring path
//! does not currently read it back; the capture contract is kept intact so
//! a personal-neutral normalization can be wired in later.

use std::time::SystemTime;

use nalgebra::{Point3, Vector3};

use crate::landmarks::LandmarkSet;

/// Element-wise mean of a calibration batch, with its capture time
#[derive(Debug, Clone)]
pub struct CalibrationBaseline {
    pub landmarks: LandmarkSet,
    pub captured_at: SystemTime,
}

/// Neutral-baseline accumulator
pub struct Calibrator {
    baseline: Option<CalibrationBaseline>,
}

impl Calibrator {
    #[must_use]
    pub fn new() -> Self {
        Self { baseline: None }
    }

    /// Compute and store a new baseline from a batch of landmark sets
    ///
    /// Samples that are empty or whose length disagrees with the first valid
    /// sample are skipped. Returns `false` without touching the prior
    /// baseline if no valid samples remain.
    pub fn calibrate(&mut self, samples: &[LandmarkSet]) -> bool {
        let expected_len = match samples.iter().find(|s| !s.is_empty()) {
            Some(first) => first.len(),
            None => {
                log::warn!("calibration failed: no valid landmark samples");
                return false;
            }
        };

        let valid: Vec<&LandmarkSet> = samples
            .iter()
            .filter(|s| s.len() == expected_len)
            .collect();
        if valid.is_empty() {
            log::warn!("calibration failed: no valid landmark samples");
            return false;
        }

        let mut sums = vec![Vector3::<f32>::zeros(); expected_len];
        for sample in &valid {
            for (sum, point) in sums.iter_mut().zip(sample.iter()) {
                *sum += point.coords;
            }
        }
        let count = valid.len() as f32;
        let landmarks: LandmarkSet = sums.into_iter().map(|s| Point3::from(s / count)).collect();

        self.baseline = Some(CalibrationBaseline {
            landmarks,
            captured_at: SystemTime::now(),
        });
        log::info!("calibration complete, {} samples processed", valid.len());
        true
    }

    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.baseline.is_some()
    }

    #[must_use]
    pub fn baseline(&self) -> Option<&CalibrationBaseline> {
        self.baseline.as_ref()
    }

    /// Capture time of the current baseline, if any
    #[must_use]
    pub fn calibrated_at(&self) -> Option<SystemTime> {
        self.baseline.as_ref().map(|b| b.captured_at)
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}
