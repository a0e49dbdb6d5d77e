//! Primitive transforms and fluent composition.

use super::Transform;
use num_traits::Float;

impl<F: Float> Transform<F> {
    /// Creates a translation by `(tx, ty)`.
    #[inline]
    pub fn translate(tx: F, ty: F) -> Self {
        let (o, l) = (F::zero(), F::one());
        Self::new(l, o, o, o, l, o, tx, ty, l)
    }

    /// Creates a non-uniform scaling about the origin.
    #[inline]
    pub fn scale(sx: F, sy: F) -> Self {
        let (o, l) = (F::zero(), F::one());
        Self::new(sx, o, o, o, sy, o, o, o, l)
    }

    /// Creates a rotation about the origin.
    ///
    /// Angle is in radians; `(1, 0)` maps to `(cos θ, sin θ)`, which is
    /// counter-clockwise when y points up.
    #[inline]
    pub fn rotate(theta: F) -> Self {
        let (sin, cos) = theta.sin_cos();
        let (o, l) = (F::zero(), F::one());
        Self::new(cos, sin, o, -sin, cos, o, o, o, l)
    }

    /// Creates the "clockwise" rotation variant.
    ///
    /// Both cosine terms are negated relative to [`Transform::rotate`] while
    /// the sine terms are kept, so the result equals `rotate(π - θ)`, not
    /// `rotate(-θ)`. Use `rotate(-theta)` for a plain clockwise turn.
    #[inline]
    pub fn rotate_clockwise(theta: F) -> Self {
        let (sin, cos) = theta.sin_cos();
        let (o, l) = (F::zero(), F::one());
        Self::new(-cos, sin, o, -sin, -cos, o, o, o, l)
    }

    /// Creates a rotation by `theta` about the point `(x, y)`.
    #[inline]
    pub fn rotate_about(theta: F, x: F, y: F) -> Self {
        Self::rotate(theta).about_point(x, y)
    }

    /// Creates a scaling by `(sx, sy)` about the point `(x, y)`.
    #[inline]
    pub fn scale_about(sx: F, sy: F, x: F, y: F) -> Self {
        Self::scale(sx, sy).about_point(x, y)
    }

    /// Reflection across the x-axis (y = 0).
    #[inline]
    pub fn reflect_x() -> Self {
        Self::scale(F::one(), -F::one())
    }

    /// Reflection across the y-axis (x = 0).
    #[inline]
    pub fn reflect_y() -> Self {
        Self::scale(-F::one(), F::one())
    }

    /// Point reflection through the origin.
    #[inline]
    pub fn reflect_origin() -> Self {
        Self::scale(-F::one(), -F::one())
    }

    /// Reflection across the line y = x (swaps coordinates).
    #[inline]
    pub fn reflect_diagonal() -> Self {
        let (o, l) = (F::zero(), F::one());
        Self::new(o, l, o, l, o, o, o, o, l)
    }

    /// Reflection across the line y = -x.
    #[inline]
    pub fn reflect_anti_diagonal() -> Self {
        let (o, l) = (F::zero(), F::one());
        Self::new(o, -l, o, -l, o, o, o, o, l)
    }

    /// Conjugates `self` by a translation so it acts as if `(x, y)` were the origin.
    ///
    /// Returns `translate(-x, -y) * self * translate(x, y)`.
    pub fn about_point(&self, x: F, y: F) -> Self {
        Self::translate(-x, -y)
            .multiply(self)
            .multiply(&Self::translate(x, y))
    }

    /// Returns a transform that applies `self`, then translates.
    #[doc(alias = "move_by")]
    #[inline]
    pub fn then_translate(&self, tx: F, ty: F) -> Self {
        self.multiply(&Self::translate(tx, ty))
    }

    /// Returns a transform that applies `self`, then scales about the origin.
    #[doc(alias = "scale_by")]
    #[inline]
    pub fn then_scale(&self, sx: F, sy: F) -> Self {
        self.multiply(&Self::scale(sx, sy))
    }

    /// Returns a transform that applies `self`, then rotates about the origin.
    #[doc(alias = "rotate_by")]
    #[inline]
    pub fn then_rotate(&self, theta: F) -> Self {
        self.multiply(&Self::rotate(theta))
    }

    /// Returns a transform that applies `self`, then [`Transform::rotate_clockwise`].
    #[doc(alias = "rotate_clockwise_by")]
    #[inline]
    pub fn then_rotate_clockwise(&self, theta: F) -> Self {
        self.multiply(&Self::rotate_clockwise(theta))
    }

    /// Returns a transform that applies `self`, then rotates about `(x, y)`.
    #[doc(alias = "rotate_about_point_by")]
    #[inline]
    pub fn then_rotate_about(&self, theta: F, x: F, y: F) -> Self {
        self.multiply(&Self::rotate_about(theta, x, y))
    }
}
