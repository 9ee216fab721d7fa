//! Temporal history of per-frame scores and confidences.
//!
//! Two parallel bounded FIFO buffers with ring-buffer eviction. The history
//! feeds the moving-average smoothing and the short-term trend that drive
//! the adaptive threshold and the hysteresis state machine.

use std::collections::VecDeque;

use crate::constants::TREND_WINDOW;

/// Fixed-capacity score/confidence history
///
/// Invariant: both buffers always hold the same number of entries, between
/// 0 and the configured capacity, in chronological order.
pub struct TemporalHistory {
    capacity: usize,
    scores: VecDeque<f32>,
    confidences: VecDeque<f32>,
}

impl TemporalHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            scores: VecDeque::with_capacity(capacity),
            confidences: VecDeque::with_capacity(capacity),
        }
    }

    /// Append one frame's score and confidence, evicting the oldest pair
    /// once the capacity is exceeded
    pub fn push(&mut self, score: f32, confidence: f32) {
        if self.scores.len() >= self.capacity {
            self.scores.pop_front();
            self.confidences.pop_front();
        }
        self.scores.push_back(score);
        self.confidences.push_back(confidence);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Mean of the last `window` scores, or `None` while fewer than `window`
    /// frames are buffered
    ///
    /// Callers fall back to the current raw score rather than averaging a
    /// partial window, which would over-smooth the cold start.
    #[must_use]
    pub fn smoothed_score(&self, window: usize) -> Option<f32> {
        tail_mean(&self.scores, window)
    }

    /// Mean of the last `window` confidences, with the same partial-window
    /// policy as [`smoothed_score`](Self::smoothed_score)
    #[must_use]
    pub fn smoothed_confidence(&self, window: usize) -> Option<f32> {
        tail_mean(&self.confidences, window)
    }

    /// Short-term score acceleration: mean of the last 5 scores minus the
    /// mean of the 5 before them, or 0 with fewer than 10 frames buffered
    #[must_use]
    pub fn trend(&self) -> f32 {
        if self.scores.len() < 2 * TREND_WINDOW {
            return 0.0;
        }
        let recent: f32 =
            self.scores.iter().rev().take(TREND_WINDOW).sum::<f32>() / TREND_WINDOW as f32;
        let previous: f32 = self
            .scores
            .iter()
            .rev()
            .skip(TREND_WINDOW)
            .take(TREND_WINDOW)
            .sum::<f32>()
            / TREND_WINDOW as f32;
        recent - previous
    }

    /// Drop all buffered frames
    pub fn clear(&mut self) {
        self.scores.clear();
        self.confidences.clear();
    }
}

fn tail_mean(values: &VecDeque<f32>, window: usize) -> Option<f32> {
    if window == 0 || values.len() < window {
        return None;
    }
    Some(values.iter().rev().take(window).sum::<f32>() / window as f32)
}
