//! Laugh detector facade.
//!
//! Owns the whole per-frame pipeline: feature extraction, composite scoring,
//! temporal history, adaptive thresholding and the hysteresis state machine,
//! plus the calibration baseline. One detector instance tracks at most one
//! face and must be driven by a single logical thread, one frame at a time
//! in arrival order.

use std::time::SystemTime;

use crate::calibration::Calibrator;
use crate::config::DetectionConfig;
use crate::constants::MIN_DECISION_HISTORY;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::history::TemporalHistory;
use crate::landmarks::LandmarkSet;
use crate::scoring::ScoringEngine;
use crate::state_machine::{HysteresisStateMachine, LaughState, Transition};
use crate::threshold::AdaptiveThreshold;

/// Per-frame detection output
///
/// An immutable value returned once per frame. The landmark set passed into
/// [`LaughDetector::detect`] is handed back here for the caller's own
/// overlay use; the detector retains no reference to it.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub is_laughing: bool,
    /// Smoothed laugh score once enough history exists, otherwise the raw
    /// per-frame score
    pub intensity: f32,
    /// Smoothed confidence under the same fallback policy as `intensity`
    pub confidence: f32,
    /// Short-term score trend, 0 until 10 frames of history exist
    pub confidence_trend: f32,
    pub features: FeatureVector,
    pub landmarks: Option<LandmarkSet>,
    pub consecutive_laugh_frames: usize,
    pub consecutive_non_laugh_frames: usize,
}

/// Read-only snapshot of the detector's internal state
#[derive(Debug, Clone)]
pub struct StateInfo {
    pub sensitivity: f32,
    pub is_calibrated: bool,
    pub calibrated_at: Option<SystemTime>,
    pub history_len: usize,
    pub state: LaughState,
    pub consecutive_laugh_frames: usize,
    pub consecutive_non_laugh_frames: usize,
}

/// Stateful real-time laugh detector
pub struct LaughDetector {
    config: DetectionConfig,
    sensitivity: f32,
    extractor: FeatureExtractor,
    scoring: ScoringEngine,
    history: TemporalHistory,
    threshold: AdaptiveThreshold,
    machine: HysteresisStateMachine,
    calibrator: Calibrator,
}

impl LaughDetector {
    /// Create a detector with the configured default sensitivity
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        let sensitivity = config
            .default_sensitivity
            .clamp(config.min_sensitivity, config.max_sensitivity);
        Self {
            sensitivity,
            extractor: FeatureExtractor::new(),
            scoring: ScoringEngine::new(config.weights),
            history: TemporalHistory::new(config.history_size),
            threshold: AdaptiveThreshold::new(config.base_threshold, config.min_threshold),
            machine: HysteresisStateMachine::new(config.frames_to_start, config.frames_to_stop),
            calibrator: Calibrator::new(),
            config,
        }
    }

    /// Process one frame's landmarks (or their absence) and advance the
    /// temporal state
    ///
    /// A frame with no detected face resets both consecutive-frame counters
    /// without flipping the laughing state, so a brief tracking loss does
    /// not end a laugh episode. Until 5 frames of history have accumulated
    /// the result is unconditionally `is_laughing = false`.
    pub fn detect(&mut self, landmarks: Option<LandmarkSet>) -> DetectionResult {
        let landmarks = match landmarks {
            Some(landmarks) => landmarks,
            None => {
                self.machine.face_lost();
                return DetectionResult {
                    is_laughing: self.machine.is_laughing(),
                    intensity: 0.0,
                    confidence: 0.0,
                    confidence_trend: 0.0,
                    features: FeatureVector::default(),
                    landmarks: None,
                    consecutive_laugh_frames: 0,
                    consecutive_non_laugh_frames: 0,
                };
            }
        };

        let features = self.extractor.extract(&landmarks);
        let scored = self.scoring.score(&features, self.sensitivity);
        self.history.push(scored.laugh_score, scored.confidence);

        let mut is_laughing = false;
        let mut intensity = scored.laugh_score;
        let mut confidence = scored.confidence;
        let mut trend = 0.0;

        if self.history.len() >= MIN_DECISION_HISTORY {
            trend = self.history.trend();
            let window = self.config.smoothing_window;
            let smoothed = self
                .history
                .smoothed_score(window)
                .unwrap_or(scored.laugh_score);
            let avg_confidence = self
                .history
                .smoothed_confidence(window)
                .unwrap_or(scored.confidence);

            let effective = self.threshold.effective(avg_confidence, trend);
            match self.machine.observe(smoothed > effective) {
                Some(Transition::Started) => log::info!(
                    "laugh started (intensity {:.2}, confidence {:.2}, {} consecutive frames)",
                    smoothed,
                    avg_confidence,
                    self.machine.consecutive_laugh_frames()
                ),
                Some(Transition::Stopped) => {
                    log::info!("laugh ended (intensity {smoothed:.2})");
                }
                None => {}
            }

            is_laughing = self.machine.is_laughing();
            intensity = smoothed;
            confidence = avg_confidence;
        }
        // else: insufficient history, stay conservative

        DetectionResult {
            is_laughing,
            intensity,
            confidence,
            confidence_trend: trend,
            features,
            landmarks: Some(landmarks),
            consecutive_laugh_frames: self.machine.consecutive_laugh_frames(),
            consecutive_non_laugh_frames: self.machine.consecutive_non_laugh_frames(),
        }
    }

    /// Capture a neutral-expression baseline from a batch of landmark sets
    ///
    /// Returns `false` (keeping any prior baseline) if the batch holds no
    /// valid samples.
    pub fn calibrate(&mut self, samples: &[LandmarkSet]) -> bool {
        self.calibrator.calibrate(samples)
    }

    /// Clear the temporal history and return the state machine to its
    /// initial state; the calibration baseline is kept
    pub fn reset(&mut self) {
        self.history.clear();
        self.machine.reset();
        log::info!("detection state reset");
    }

    /// Update the sensitivity multiplier, silently clamped to the
    /// configured bounds; takes effect from the next processed frame
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity =
            sensitivity.clamp(self.config.min_sensitivity, self.config.max_sensitivity);
        log::debug!("sensitivity set to {:.1}", self.sensitivity);
    }

    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    #[must_use]
    pub fn is_laughing(&self) -> bool {
        self.machine.is_laughing()
    }

    /// Snapshot of the current detector state for introspection
    #[must_use]
    pub fn state_info(&self) -> StateInfo {
        StateInfo {
            sensitivity: self.sensitivity,
            is_calibrated: self.calibrator.is_calibrated(),
            calibrated_at: self.calibrator.calibrated_at(),
            history_len: self.history.len(),
            state: self.machine.state(),
            consecutive_laugh_frames: self.machine.consecutive_laugh_frames(),
            consecutive_non_laugh_frames: self.machine.consecutive_non_laugh_frames(),
        }
    }
}

impl Default for LaughDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}
