//! Per-viewing laugh statistics.
//!
//! Aggregates the detector's per-frame results over one viewing session
//! (e.g. one piece of content on screen): every laughing frame is recorded
//! as a sample and distinct laugh episodes are counted from state
//! transitions. The summary includes a composite 0-100 reaction score.
//! Persisting summaries is the caller's concern.

use crate::detector::DetectionResult;

/// Intensity/confidence sample captured on a laughing frame
#[derive(Debug, Clone, Copy)]
struct LaughSample {
    intensity: f32,
    confidence: f32,
}

/// Aggregated statistics for one viewing session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionSummary {
    /// Whether any laughing frame was observed
    pub laugh_detected: bool,
    /// Number of laughing frames
    pub samples: usize,
    /// Number of distinct laugh episodes (start transitions)
    pub episodes: usize,
    pub avg_intensity: f32,
    pub avg_confidence: f32,
    pub max_intensity: f32,
    /// Composite reaction score in [0, 100]
    pub score: f32,
}

/// Session-level laugh aggregator
pub struct SessionTracker {
    samples: Vec<LaughSample>,
    episodes: usize,
    frames: usize,
    was_laughing: bool,
}

impl SessionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            episodes: 0,
            frames: 0,
            was_laughing: false,
        }
    }

    /// Fold one frame's detection result into the session statistics
    pub fn update(&mut self, result: &DetectionResult) {
        self.frames += 1;
        if result.is_laughing {
            if !self.was_laughing {
                self.episodes += 1;
            }
            self.samples.push(LaughSample {
                intensity: result.intensity,
                confidence: result.confidence,
            });
        }
        self.was_laughing = result.is_laughing;
    }

    /// Total frames folded in since the last reset
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Summarize the session so far
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        if self.samples.is_empty() {
            return SessionSummary::default();
        }

        let count = self.samples.len();
        let avg_intensity =
            self.samples.iter().map(|s| s.intensity).sum::<f32>() / count as f32;
        let avg_confidence =
            self.samples.iter().map(|s| s.confidence).sum::<f32>() / count as f32;
        let max_intensity = self
            .samples
            .iter()
            .map(|s| s.intensity)
            .fold(f32::NEG_INFINITY, f32::max);

        // Weighted composite: intensity up to 50 points, confidence up to
        // 30, sample count saturating at 5 frames for the remaining 20
        let score = (avg_intensity * 50.0
            + avg_confidence * 30.0
            + count.min(5) as f32 * 4.0)
            .min(100.0);

        SessionSummary {
            laugh_detected: true,
            samples: count,
            episodes: self.episodes,
            avg_intensity,
            avg_confidence,
            max_intensity,
            score,
        }
    }

    /// Start a fresh session
    pub fn reset(&mut self) {
        self.samples.clear();
        self.episodes = 0;
        self.frames = 0;
        self.was_laughing = false;
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}
