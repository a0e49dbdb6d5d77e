//! homog2d - 2D affine transforms as 3x3 homogeneous matrices
//!
//! A small value type for building, composing, inverting and applying planar
//! affine maps. The fast path never validates: singular inverses and zero
//! divisors surface as IEEE infinities and NaNs, with checked `try_*`
//! counterparts for callers that want an error instead.

pub mod error;
#[cfg(feature = "simd")]
pub mod simd;
pub mod transform;

pub use error::TransformError;
pub use transform::{cross, multiply, Transform, FIX_EPSILON};
