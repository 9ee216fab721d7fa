//! Geometric feature extraction from facial landmarks.
//!
//! Converts one frame's landmark set into three scalar features: mouth
//! openness, eye openness (the Duchenne squint marker, read inverted by the
//! scoring stage) and cheek elevation. Extraction is stateless and never
//! fails: missing indices, short landmark sets and degenerate geometry all
//! degrade to a zero [`FeatureVector`] so a single noisy frame cannot
//! disrupt the temporal pipeline.

use nalgebra::Point3;

use crate::constants::{
    LEFT_CHEEK, LEFT_EYE_CONTOUR, MOUTH_CONTOUR, NOSE_TIP, RIGHT_CHEEK, RIGHT_EYE_CONTOUR,
};
use crate::landmarks::{centroid, gather};

/// Per-frame geometric features
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureVector {
    /// Vertical lip opening normalized by mouth width, >= 0
    pub mouth_openness: f32,
    /// Average eye openness ratio; trends *down* as the eyes narrow
    pub eye_crinkle: f32,
    /// Average cheek elevation toward the nose tip, signed
    pub cheek_movement: f32,
}

/// Stateless landmark-to-feature converter
pub struct FeatureExtractor;

impl FeatureExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract all features from one frame's landmarks
    #[must_use]
    pub fn extract(&self, landmarks: &[Point3<f32>]) -> FeatureVector {
        FeatureVector {
            mouth_openness: self.mouth_openness(landmarks),
            eye_crinkle: self.eye_crinkle(landmarks),
            cheek_movement: self.cheek_movement(landmarks),
        }
    }

    /// Vertical mouth opening over mouth width
    pub fn mouth_openness(&self, landmarks: &[Point3<f32>]) -> f32 {
        let contour = match gather(landmarks, &MOUTH_CONTOUR) {
            Some(points) => points,
            None => return 0.0,
        };

        let top_lip = centroid(&contour[1..4]);
        let bottom_lip = centroid(&contour[7..10]);
        let vertical = (top_lip - bottom_lip).norm();

        let width = (contour[0] - contour[6]).norm();
        if width > 0.0 {
            vertical / width
        } else {
            0.0
        }
    }

    /// Average eye openness across both eyes (Duchenne marker)
    pub fn eye_crinkle(&self, landmarks: &[Point3<f32>]) -> f32 {
        let left = match gather(landmarks, &LEFT_EYE_CONTOUR) {
            Some(points) => points,
            None => return 0.0,
        };
        let right = match gather(landmarks, &RIGHT_EYE_CONTOUR) {
            Some(points) => points,
            None => return 0.0,
        };

        (Self::eye_openness(&left) + Self::eye_openness(&right)) / 2.0
    }

    /// Average cheek elevation relative to the nose tip
    pub fn cheek_movement(&self, landmarks: &[Point3<f32>]) -> f32 {
        let (left_cheek, right_cheek, nose_tip) = match (
            landmarks.get(LEFT_CHEEK),
            landmarks.get(RIGHT_CHEEK),
            landmarks.get(NOSE_TIP),
        ) {
            (Some(l), Some(r), Some(n)) => (l, r, n),
            _ => return 0.0,
        };

        // Positive when the cheeks rise toward the nose
        let left_elevation = nose_tip.y - left_cheek.y;
        let right_elevation = nose_tip.y - right_cheek.y;

        (left_elevation + right_elevation) / 2.0
    }

    /// Lid separation over corner-to-corner width for one eye contour
    fn eye_openness(eye: &[Point3<f32>]) -> f32 {
        let top = centroid(&eye[1..4]);
        let bottom = centroid(&eye[5..8]);
        let height = (top - bottom).norm();

        let width = (eye[0] - eye[4]).norm();
        if width > 0.0 {
            height / width
        } else {
            0.0
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
