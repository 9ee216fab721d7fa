//! Composite laugh scoring.
//!
//! Combines the three geometric features into a single raw laugh score plus
//! a per-frame confidence value. Scoring is stateless across frames; the
//! temporal logic lives downstream in the history and state machine stages.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHEEK_WEIGHT, DEFAULT_EYE_WEIGHT, DEFAULT_MOUTH_WEIGHT};
use crate::features::FeatureVector;

/// Per-feature weights for the composite score
///
/// The weights need not sum to exactly 1 but conventionally do.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub mouth: f32,
    pub eye: f32,
    pub cheek: f32,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            mouth: DEFAULT_MOUTH_WEIGHT,
            eye: DEFAULT_EYE_WEIGHT,
            cheek: DEFAULT_CHEEK_WEIGHT,
        }
    }
}

/// One frame's scored output
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoredFrame {
    /// Raw laugh score in [0, 1]
    pub laugh_score: f32,
    /// Agreement between the three normalized signals, in [0, 1]
    pub confidence: f32,
}

/// Weighted feature combiner
pub struct ScoringEngine {
    weights: FeatureWeights,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    /// Score one frame's features under the given sensitivity multiplier
    ///
    /// A malformed (non-finite) feature set yields the zero [`ScoredFrame`]
    /// with confidence 0 rather than propagating NaN into the history.
    #[must_use]
    pub fn score(&self, features: &FeatureVector, sensitivity: f32) -> ScoredFrame {
        // Eye narrowing is the positive signal, so the openness ratio is
        // inverted before weighting
        let signals = [
            features.mouth_openness,
            1.0 - features.eye_crinkle,
            features.cheek_movement,
        ];

        if !signals.iter().all(|s| s.is_finite()) || !sensitivity.is_finite() {
            return ScoredFrame::default();
        }

        let weighted = signals[0] * self.weights.mouth
            + signals[1] * self.weights.eye
            + signals[2] * self.weights.cheek;
        let laugh_score = (weighted * sensitivity).clamp(0.0, 1.0);

        // Confidence is high when the three signals agree in magnitude,
        // independent of their absolute level
        let confidence = (1.0 - std_dev(&signals)).clamp(0.0, 1.0);

        ScoredFrame {
            laugh_score,
            confidence,
        }
    }
}

/// Population standard deviation
fn std_dev(values: &[f32]) -> f32 {
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ScoringEngine {
        ScoringEngine::new(FeatureWeights::default())
    }

    #[test]
    fn test_zero_signals_give_full_confidence() {
        // eye_crinkle of 1.0 makes the squint signal zero, so all three
        // signals are identical zeros: no score, no variance
        let features = FeatureVector {
            mouth_openness: 0.0,
            eye_crinkle: 1.0,
            cheek_movement: 0.0,
        };
        let scored = engine().score(&features, 1.3);
        assert_eq!(scored.laugh_score, 0.0);
        assert_eq!(scored.confidence, 1.0);
    }

    #[test]
    fn test_weighted_combination() {
        let features = FeatureVector {
            mouth_openness: 0.5,
            eye_crinkle: 0.5,
            cheek_movement: 0.5,
        };
        let scored = engine().score(&features, 1.0);
        // 0.5*0.4 + 0.5*0.3 + 0.5*0.3 = 0.5, identical signals so stddev 0
        assert!((scored.laugh_score - 0.5).abs() < 1e-6);
        assert!((scored.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sensitivity_scales_and_clamps() {
        let features = FeatureVector {
            mouth_openness: 0.5,
            eye_crinkle: 0.5,
            cheek_movement: 0.5,
        };
        let scored = engine().score(&features, 1.4);
        assert!((scored.laugh_score - 0.7).abs() < 1e-6);

        let saturated = engine().score(&features, 3.0);
        assert_eq!(saturated.laugh_score, 1.0);
    }

    #[test]
    fn test_negative_composite_clamps_to_zero() {
        let features = FeatureVector {
            mouth_openness: 0.0,
            eye_crinkle: 1.0,
            cheek_movement: -2.0,
        };
        let scored = engine().score(&features, 1.0);
        assert_eq!(scored.laugh_score, 0.0);
    }

    #[test]
    fn test_non_finite_features_degrade() {
        let features = FeatureVector {
            mouth_openness: f32::NAN,
            eye_crinkle: 0.5,
            cheek_movement: 0.5,
        };
        let scored = engine().score(&features, 1.0);
        assert_eq!(scored, ScoredFrame::default());

        let features = FeatureVector {
            mouth_openness: f32::INFINITY,
            eye_crinkle: 0.5,
            cheek_movement: 0.5,
        };
        let scored = engine().score(&features, 1.0);
        assert_eq!(scored, ScoredFrame::default());
    }

    #[test]
    fn test_disagreeing_signals_lower_confidence() {
        let aligned = FeatureVector {
            mouth_openness: 0.4,
            eye_crinkle: 0.6,
            cheek_movement: 0.4,
        };
        let spread = FeatureVector {
            mouth_openness: 0.9,
            eye_crinkle: 0.9,
            cheek_movement: 0.0,
        };
        let engine = engine();
        assert!(
            engine.score(&aligned, 1.0).confidence > engine.score(&spread, 1.0).confidence
        );
    }
}
