//! SIMD-accelerated batch application.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! homog2d = { version = "0.1", features = ["simd"] }
//! ```

mod apply;

pub use apply::{apply_points_x4, Points2x4};
