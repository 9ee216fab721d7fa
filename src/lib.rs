//! Real-time laugh detection from facial landmarks.
//!
//! This library decides, frame by frame, whether a subject is currently
//! laughing, with what intensity and with what confidence, while suppressing
//! frame-to-frame jitter and one-frame flickers. It consumes landmark sets
//! produced by an external face-tracking collaborator and performs no I/O of
//! its own.
//!
//! The per-frame pipeline:
//! 1. Feature extraction: mouth openness, eye openness (Duchenne squint
//!    marker) and cheek elevation from fixed landmark index tables
//! 2. Composite scoring with configurable weights and a sensitivity
//!    multiplier, plus a signal-agreement confidence
//! 3. Temporal history with moving-average smoothing and a short-term trend
//! 4. Adaptive thresholding driven by smoothed confidence and trend
//! 5. A hysteresis state machine with asymmetric entry/exit requirements
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use laugh_detection::config::DetectionConfig;
//! use laugh_detection::detector::LaughDetector;
//! use nalgebra::Point3;
//!
//! let mut detector = LaughDetector::new(DetectionConfig::default());
//!
//! // A frame with no detected face resets the consecutive-frame counters
//! let result = detector.detect(None);
//! assert!(!result.is_laughing);
//!
//! // A frame with a detected face: 468 points in normalized coordinates,
//! // as produced by the landmark collaborator
//! let frame: Vec<Point3<f32>> = vec![Point3::origin(); 468];
//! let result = detector.detect(Some(frame));
//! println!("intensity: {:.2}", result.intensity);
//! ```
//!
//! ## Session Statistics
//!
//! ```
//! use laugh_detection::detector::LaughDetector;
//! use laugh_detection::session::SessionTracker;
//!
//! let mut detector = LaughDetector::default();
//! let mut session = SessionTracker::new();
//!
//! for _ in 0..30 {
//!     let result = detector.detect(None);
//!     session.update(&result);
//! }
//! let summary = session.summary();
//! assert!(!summary.laugh_detected);
//! ```
//!
//! ## Tuning
//!
//! ```
//! use laugh_detection::detector::LaughDetector;
//!
//! let mut detector = LaughDetector::default();
//! detector.set_sensitivity(2.0);
//! assert!((detector.sensitivity() - 2.0).abs() < 1e-6);
//!
//! // Out-of-range values are clamped, not rejected
//! detector.set_sensitivity(99.0);
//! assert!((detector.sensitivity() - 3.0).abs() < 1e-6);
//! ```

/// Landmark boundary types shared with the face-tracking collaborator
pub mod landmarks;

/// Geometric feature extraction from landmark sets
pub mod features;

/// Composite laugh scoring with per-frame confidence
pub mod scoring;

/// Bounded score/confidence history with smoothing and trend
pub mod history;

/// Adaptive decision threshold
pub mod threshold;

/// Hysteresis state machine for the binary laughing decision
pub mod state_machine;

/// Neutral-expression baseline calibration
pub mod calibration;

/// Laugh detector facade tying the pipeline together
pub mod detector;

/// Per-viewing laugh statistics
pub mod session;

/// Error types and result handling
pub mod error;

/// Constants used throughout the pipeline
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
