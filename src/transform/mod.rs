//! The homogeneous 3x3 transform type.
//!
//! Points are row vectors on the left of the matrix, so composition reads in
//! application order: `a * b` applies `a` first, then `b`.

mod builders;
mod display;
mod mat3;

pub use mat3::{cross, multiply, Transform, FIX_EPSILON};
