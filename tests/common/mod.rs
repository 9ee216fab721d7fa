//! Shared helpers for building synthetic landmark frames.
//!
//! Frames are laid out so the extracted features hit exact values: mouth
//! corners and eye corners sit one unit apart, lids and lips are separated
//! vertically by the requested ratio, and the nose tip is offset from the
//! cheek line by the requested elevation.

#![allow(dead_code)]

use laugh_detection::constants::{
    FACE_MESH_POINTS, LEFT_CHEEK, LEFT_EYE_CONTOUR, MOUTH_CONTOUR, NOSE_TIP, RIGHT_CHEEK,
    RIGHT_EYE_CONTOUR,
};
use laugh_detection::landmarks::LandmarkSet;
use nalgebra::Point3;

/// Build a full face mesh whose extracted features equal the given values
pub fn face_with(mouth_openness: f32, eye_crinkle: f32, cheek_movement: f32) -> LandmarkSet {
    let mut face = vec![Point3::origin(); FACE_MESH_POINTS];

    face[MOUTH_CONTOUR[0]] = Point3::new(0.0, 0.0, 0.0);
    face[MOUTH_CONTOUR[6]] = Point3::new(1.0, 0.0, 0.0);
    for &i in &MOUTH_CONTOUR[1..4] {
        face[i] = Point3::new(0.5, 0.0, 0.0);
    }
    for &i in &MOUTH_CONTOUR[7..10] {
        face[i] = Point3::new(0.5, mouth_openness, 0.0);
    }

    for (contour, x) in [(&LEFT_EYE_CONTOUR, 0.0f32), (&RIGHT_EYE_CONTOUR, 2.0)] {
        face[contour[0]] = Point3::new(x, 0.0, 0.0);
        face[contour[4]] = Point3::new(x + 1.0, 0.0, 0.0);
        for &i in &contour[1..4] {
            face[i] = Point3::new(x + 0.5, 0.0, 0.0);
        }
        for &i in &contour[5..8] {
            face[i] = Point3::new(x + 0.5, eye_crinkle, 0.0);
        }
    }

    face[LEFT_CHEEK] = Point3::new(0.3, 0.0, 0.0);
    face[RIGHT_CHEEK] = Point3::new(0.7, 0.0, 0.0);
    face[NOSE_TIP] = Point3::new(0.5, cheek_movement, 0.0);

    face
}

// The faces below are solved for the default weights (0.4/0.3/0.3) and
// sensitivity 1.3 so that the three scoring signals have a population
// standard deviation of exactly 0.2 (confidence 0.8) while the composite
// raw score lands on the stated value.

/// Raw score 0.05, confidence 0.8
pub fn still_face() -> LandmarkSet {
    face_with(0.293_020_0, 1.131_244_1, -0.131_244_1)
}

/// Raw score 0.1, confidence 0.8
pub fn quiet_face() -> LandmarkSet {
    face_with(0.331_481_3, 1.092_782_9, -0.092_782_9)
}

/// Raw score 0.5, confidence 0.8
pub fn onset_face() -> LandmarkSet {
    face_with(0.639_174_4, 0.785_090_3, 0.214_909_7)
}

/// Raw score 0.6, confidence 0.8
pub fn laughing_face() -> LandmarkSet {
    face_with(0.716_097_0, 0.708_167_2, 0.291_832_8)
}
