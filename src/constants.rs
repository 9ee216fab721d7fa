//! Constants used throughout the laugh detection pipeline.
//!
//! The landmark index tables are fixed topology constants of the external
//! face-mesh scheme. They are keyed by semantic role (mouth contour, eye
//! contours, cheeks) rather than computed at runtime.

/// Number of points in the collaborator's full face mesh
pub const FACE_MESH_POINTS: usize = 468;

/// Mouth contour indices, ordered so that positions 0 and 6 are the mouth
/// corners, 1-3 the top lip and 7-9 the bottom lip
pub const MOUTH_CONTOUR: [usize; 12] = [61, 84, 17, 314, 405, 320, 307, 375, 321, 308, 324, 318];

/// Left eye contour indices; positions 0 and 4 are the eye corners,
/// 1-3 the upper lid and 5-7 the lower lid
pub const LEFT_EYE_CONTOUR: [usize; 16] = [
    33, 7, 163, 144, 145, 153, 154, 155, 133, 173, 157, 158, 159, 160, 161, 246,
];

/// Right eye contour indices, same ordering as the left eye
pub const RIGHT_EYE_CONTOUR: [usize; 16] = [
    362, 382, 381, 380, 374, 373, 390, 249, 263, 466, 388, 387, 386, 385, 384, 398,
];

/// Left cheek landmark index
pub const LEFT_CHEEK: usize = 116;

/// Right cheek landmark index
pub const RIGHT_CHEEK: usize = 345;

/// Nose tip landmark index
pub const NOSE_TIP: usize = 1;

/// Minimum history length before any trend- or threshold-based decision
pub const MIN_DECISION_HISTORY: usize = 5;

/// Sub-window length for the short-term trend calculation
pub const TREND_WINDOW: usize = 5;

/// How strongly sustained confidence lowers the effective threshold
pub const CONFIDENCE_BONUS_GAIN: f32 = 0.2;

/// How strongly a rising score trend lowers the effective threshold
pub const TREND_BONUS_GAIN: f32 = 2.0;

/// Default detection sensitivity multiplier
pub const DEFAULT_SENSITIVITY: f32 = 1.3;

/// Sensitivity bounds
pub const MIN_SENSITIVITY: f32 = 0.5;
pub const MAX_SENSITIVITY: f32 = 3.0;

/// Sensitivity adjustment step for caller-facing tuning controls
pub const SENSITIVITY_STEP: f32 = 0.1;

/// Default decision thresholds
pub const DEFAULT_BASE_THRESHOLD: f32 = 0.4;
pub const DEFAULT_MIN_THRESHOLD: f32 = 0.25;

/// Default consecutive-frame requirements for the hysteresis state machine
pub const DEFAULT_FRAMES_TO_START: usize = 3;
pub const DEFAULT_FRAMES_TO_STOP: usize = 5;

/// Default history capacity and smoothing window
pub const DEFAULT_HISTORY_SIZE: usize = 20;
pub const DEFAULT_SMOOTHING_WINDOW: usize = 10;

/// Default feature weights
pub const DEFAULT_MOUTH_WEIGHT: f32 = 0.4;
pub const DEFAULT_EYE_WEIGHT: f32 = 0.3;
pub const DEFAULT_CHEEK_WEIGHT: f32 = 0.3;
