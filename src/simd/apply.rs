//! Applying one transform to many points, four lanes at a time.

use wide::f64x4;

use crate::transform::Transform;

/// A batch of 4 points in structure-of-arrays form.
#[derive(Clone, Copy, Debug)]
pub struct Points2x4 {
    pub x: f64x4,
    pub y: f64x4,
}

impl Points2x4 {
    /// Creates a batch from a slice of points (must have at least 4 points).
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than 4 points.
    #[inline]
    pub fn from_slice(points: &[(f64, f64)]) -> Self {
        Self {
            x: f64x4::new([points[0].0, points[1].0, points[2].0, points[3].0]),
            y: f64x4::new([points[0].1, points[1].1, points[2].1, points[3].1]),
        }
    }

    /// Maps all four points through `t`.
    #[inline]
    pub fn transformed(self, t: &Transform<f64>) -> Self {
        let m = t.as_array();
        Self {
            x: self.x * f64x4::splat(m[0]) + self.y * f64x4::splat(m[3]) + f64x4::splat(m[6]),
            y: self.x * f64x4::splat(m[1]) + self.y * f64x4::splat(m[4]) + f64x4::splat(m[7]),
        }
    }

    /// Extracts the 4 points.
    #[inline]
    pub fn to_array(self) -> [(f64, f64); 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        [(x[0], y[0]), (x[1], y[1]), (x[2], y[2]), (x[3], y[3])]
    }
}

/// Batched [`Transform::apply_points`].
///
/// Processes points in batches of 4; any remainder goes through the scalar path.
pub fn apply_points_x4(t: &Transform<f64>, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut result = Vec::with_capacity(points.len());

    let mut chunks = points.chunks_exact(4);
    for chunk in &mut chunks {
        let batch = Points2x4::from_slice(chunk).transformed(t);
        result.extend_from_slice(&batch.to_array());
    }

    for &(x, y) in chunks.remainder() {
        result.push(t.apply(x, y));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_scalar_path() {
        let t = Transform::rotate(0.3).then_translate(5.0, -2.0).then_scale(2.0, 0.5);
        let points: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, (i * i) as f64 * 0.1)).collect();

        let batched = apply_points_x4(&t, &points);
        let scalar = t.apply_points(&points);

        assert_eq!(batched.len(), 11);
        for (b, s) in batched.iter().zip(&scalar) {
            assert_relative_eq!(b.0, s.0, epsilon = 1e-12);
            assert_relative_eq!(b.1, s.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_translate_batch() {
        let t = Transform::translate(3.0, 4.0);
        let points = [(1.0, 1.0), (0.0, 0.0), (-3.0, -4.0), (2.0, 0.5)];

        let result = apply_points_x4(&t, &points);
        assert_eq!(result, vec![(4.0, 5.0), (3.0, 4.0), (0.0, 0.0), (5.0, 4.5)]);
    }

    #[test]
    fn test_empty_points() {
        let t: Transform<f64> = Transform::identity();
        assert!(apply_points_x4(&t, &[]).is_empty());
    }
}
