//! Landmark boundary types shared with the external face-tracking collaborator.
//!
//! A frame either carries exactly one [`LandmarkSet`] (one detected face) or
//! none. The collaborator produces points in normalized image coordinates;
//! this crate consumes them read-only for the duration of one frame.

use nalgebra::{Point3, Vector3};

/// One frame's ordered, fixed-length set of facial reference points
pub type LandmarkSet = Vec<Point3<f32>>;

/// Mean position of a set of points
///
/// Returns the origin for an empty slice so degenerate input stays
/// zero-valued instead of producing NaN.
#[must_use]
pub fn centroid(points: &[Point3<f32>]) -> Point3<f32> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum: Vector3<f32> = points.iter().map(|p| p.coords).sum();
    Point3::from(sum / points.len() as f32)
}

/// Collect the points selected by `indices`, or `None` if any index falls
/// outside the landmark set
pub(crate) fn gather(landmarks: &[Point3<f32>], indices: &[usize]) -> Option<Vec<Point3<f32>>> {
    indices.iter().map(|&i| landmarks.get(i).copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centroid() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 6.0),
        ];
        let c = centroid(&points);
        assert_eq!(c, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), Point3::origin());
    }

    #[test]
    fn test_gather_out_of_bounds() {
        let points = vec![Point3::origin(); 3];
        assert!(gather(&points, &[0, 1, 2]).is_some());
        assert!(gather(&points, &[0, 3]).is_none());
    }
}
