//! Adaptive decision threshold.
//!
//! Derives the frame's effective threshold from the smoothed confidence and
//! the short-term trend. Sustained confidence or a rising trend lowers the
//! bar for declaring a laugh, floored so the threshold can never be driven
//! to zero.

use crate::constants::{CONFIDENCE_BONUS_GAIN, TREND_BONUS_GAIN};

/// Threshold calculator with fixed base parameters
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveThreshold {
    base: f32,
    floor: f32,
}

impl AdaptiveThreshold {
    #[must_use]
    pub fn new(base: f32, floor: f32) -> Self {
        Self { base, floor }
    }

    /// Effective decision threshold for the current frame
    ///
    /// `base - avg_confidence * 0.2 - max(trend * 2, 0)`, never below the
    /// configured floor.
    #[must_use]
    pub fn effective(&self, avg_confidence: f32, trend: f32) -> f32 {
        let confidence_bonus = avg_confidence * CONFIDENCE_BONUS_GAIN;
        let trend_bonus = (trend * TREND_BONUS_GAIN).max(0.0);
        (self.base - confidence_bonus - trend_bonus).max(self.floor)
    }
}
