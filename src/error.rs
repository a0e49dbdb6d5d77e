//! Error types for the checked transform operations.

use thiserror::Error;

/// Errors reported by the validated counterparts of the unchecked
/// transform operations (`try_inverse`, `try_div_scalar`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The matrix has no usable inverse at the requested tolerance.
    #[error("singular transform: |det| = {determinant:e} is within tolerance")]
    Singular {
        /// Determinant of the rejected matrix.
        determinant: f64,
    },

    /// Scalar division by zero or by a non-finite value.
    #[error("cannot divide a transform by zero or a non-finite scalar")]
    ZeroDivisor,

    /// A computed entry is infinite or NaN.
    #[error("transform entry {index} is not finite")]
    NonFinite {
        /// Row-major index of the first offending entry.
        index: usize,
    },
}
