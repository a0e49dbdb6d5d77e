//! The 3x3 homogeneous matrix type and its algebra.

use crate::error::TransformError;
use num_traits::Float;
use std::ops::{Div, Index, IndexMut, Mul};

/// Entries whose magnitude is below this are snapped to zero by [`Transform::fix`].
pub const FIX_EPSILON: f64 = 1e-8;

/// A 2D affine transform stored as a row-major 3x3 matrix.
///
/// Points are row vectors `(x, y, 1)` multiplied on the left, so the
/// canonical layout is:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
/// with `(e, f)` holding the translation. Because points sit on the left,
/// `a * b` means "apply `a`, then `b`".
///
/// Nothing is validated on the fast path. Dividing by zero or inverting a
/// singular matrix yields infinite or NaN entries; use
/// [`Transform::try_inverse`] and [`Transform::try_div_scalar`] for checked
/// versions.
///
/// # Example
///
/// ```
/// use homog2d::Transform;
/// use std::f64::consts::FRAC_PI_2;
///
/// // Move right by 10, then rotate a quarter turn
/// let mut t: Transform<f64> = Transform::translate(10.0, 0.0).then_rotate(FRAC_PI_2);
/// t.fix();
///
/// let (x, y) = t.apply(0.0, 0.0);
/// assert_eq!((x, y), (0.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform<F> {
    m: [F; 9],
}

/// 2x2 determinant `x1*y2 - y1*x2` of the minor `| x1 y1 ; x2 y2 |`.
#[inline]
pub fn cross<F: Float>(x1: F, y1: F, x2: F, y2: F) -> F {
    x1 * y2 - y1 * x2
}

/// Free-standing form of [`Transform::multiply`].
#[inline]
pub fn multiply<F: Float>(a: &Transform<F>, b: &Transform<F>) -> Transform<F> {
    a.multiply(b)
}

impl<F: Float> Transform<F> {
    /// Creates a transform from nine entries in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(a1: F, a2: F, a3: F, b1: F, b2: F, b3: F, c1: F, c2: F, c3: F) -> Self {
        Self {
            m: [a1, a2, a3, b1, b2, b3, c1, c2, c3],
        }
    }

    /// Creates a transform from a row-major array.
    #[inline]
    pub fn from_array(m: [F; 9]) -> Self {
        Self { m }
    }

    /// Creates a transform from three rows.
    #[inline]
    pub fn from_rows(r0: [F; 3], r1: [F; 3], r2: [F; 3]) -> Self {
        Self {
            m: [
                r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2],
            ],
        }
    }

    /// Returns the entries in row-major order.
    #[inline]
    pub fn to_array(self) -> [F; 9] {
        self.m
    }

    /// Borrows the row-major entries.
    #[inline]
    pub fn as_array(&self) -> &[F; 9] {
        &self.m
    }

    /// Returns the all-zero matrix.
    ///
    /// Despite the name this is **not** the multiplicative identity: every
    /// entry is zero, so `t * Transform::one()` collapses everything to the
    /// origin. Use [`Transform::identity`] for the identity. The name is kept
    /// for compatibility with existing callers.
    #[inline]
    pub fn one() -> Self {
        Self { m: [F::zero(); 9] }
    }

    /// Returns the multiplicative identity (same as `translate(0, 0)`).
    #[inline]
    pub fn identity() -> Self {
        let (o, l) = (F::zero(), F::one());
        Self::new(l, o, o, o, l, o, o, o, l)
    }

    /// Matrix product `self * rhs`: apply `self`, then `rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut r = [F::zero(); 9];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    r[i * 3 + j] = r[i * 3 + j] + self.m[i * 3 + k] * rhs.m[k * 3 + j];
                }
            }
        }
        Self { m: r }
    }

    /// Returns a transform that applies `self` first, then `next`.
    ///
    /// Same as `self.multiply(&next)`.
    #[inline]
    pub fn then(&self, next: Self) -> Self {
        self.multiply(&next)
    }

    /// Divides every entry by `s`.
    ///
    /// Computed as multiplication by `1 / s`; a zero divisor produces
    /// infinite or NaN entries.
    pub fn div_scalar(&self, s: F) -> Self {
        let inv = F::one() / s;
        Self {
            m: self.m.map(|v| v * inv),
        }
    }

    /// Checked [`Transform::div_scalar`].
    pub fn try_div_scalar(&self, s: F) -> Result<Self, TransformError> {
        if s == F::zero() || !s.is_finite() {
            return Err(TransformError::ZeroDivisor);
        }
        self.div_scalar(s).check_finite()
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8])
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// - Positive: preserves orientation
    /// - Negative: flips orientation (reflection)
    /// - Zero: singular
    pub fn determinant(&self) -> F {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) + m[1] * (m[5] * m[6] - m[3] * m[8])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Matrix of signed 2x2 minors.
    pub fn cofactors(&self) -> Self {
        let m = &self.m;
        Self::new(
            cross(m[4], m[5], m[7], m[8]),
            -cross(m[3], m[5], m[6], m[8]),
            cross(m[3], m[4], m[6], m[7]),
            -cross(m[1], m[2], m[7], m[8]),
            cross(m[0], m[2], m[6], m[8]),
            -cross(m[0], m[1], m[6], m[7]),
            cross(m[1], m[2], m[4], m[5]),
            -cross(m[0], m[2], m[3], m[5]),
            cross(m[0], m[1], m[3], m[4]),
        )
    }

    /// Adjugate (transposed cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactors().transpose()
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// There is no singularity guard: a zero determinant gives infinite or
    /// NaN entries. See [`Transform::try_inverse`].
    #[inline]
    pub fn inverse(&self) -> Self {
        self.adjugate().div_scalar(self.determinant())
    }

    /// Checked [`Transform::inverse`].
    ///
    /// Fails with [`TransformError::Singular`] when `|det| <= tolerance`.
    pub fn try_inverse(&self, tolerance: F) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det.is_nan() || det.abs() <= tolerance {
            return Err(TransformError::Singular {
                determinant: det.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.inverse().check_finite()
    }

    /// Returns true if `|det| > tolerance`.
    #[inline]
    pub fn is_invertible(&self, tolerance: F) -> bool {
        self.determinant().abs() > tolerance
    }

    /// Returns true if no entry is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    fn check_finite(self) -> Result<Self, TransformError> {
        match self.m.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(TransformError::NonFinite { index }),
            None => Ok(self),
        }
    }

    /// Maps the point `(x, y)` through this transform.
    ///
    /// The homogeneous coordinate is assumed to stay 1 and is not computed.
    #[inline]
    pub fn apply(&self, x: F, y: F) -> (F, F) {
        let m = &self.m;
        (
            x * m[0] + y * m[3] + m[6],
            x * m[1] + y * m[4] + m[7],
        )
    }

    /// Applies this transform to multiple points.
    pub fn apply_points(&self, points: &[(F, F)]) -> Vec<(F, F)> {
        points.iter().map(|&(x, y)| self.apply(x, y)).collect()
    }

    /// Snaps every entry with magnitude below [`FIX_EPSILON`] to exactly zero.
    pub fn fix(&mut self) {
        let eps = F::from(FIX_EPSILON).unwrap_or_else(F::epsilon);
        self.fix_with(eps);
    }

    /// Like [`Transform::fix`] with a caller-chosen tolerance.
    pub fn fix_with(&mut self, epsilon: F) {
        for v in self.m.iter_mut() {
            if v.abs() < epsilon {
                *v = F::zero();
            }
        }
    }

    /// By-value [`Transform::fix`].
    #[inline]
    pub fn fixed(mut self) -> Self {
        self.fix();
        self
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F> Index<usize> for Transform<F> {
    type Output = F;

    #[inline]
    fn index(&self, i: usize) -> &F {
        &self.m[i]
    }
}

impl<F> IndexMut<usize> for Transform<F> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut F {
        &mut self.m[i]
    }
}

impl<F> Index<(usize, usize)> for Transform<F> {
    type Output = F;

    /// Indexes by `(row, column)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &F {
        assert!(col < 3, "column {col} out of range");
        &self.m[row * 3 + col]
    }
}

impl<F> IndexMut<(usize, usize)> for Transform<F> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut F {
        assert!(col < 3, "column {col} out of range");
        &mut self.m[row * 3 + col]
    }
}

impl<F: Float> Mul for Transform<F> {
    type Output = Self;

    /// Apply `self`, then `rhs`.
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<F: Float> Mul<(F, F)> for Transform<F> {
    type Output = (F, F);

    fn mul(self, (x, y): (F, F)) -> (F, F) {
        self.apply(x, y)
    }
}

impl<F: Float> Div<F> for Transform<F> {
    type Output = Self;

    fn div(self, s: F) -> Self {
        self.div_scalar(s)
    }
}
