//! Boxed text rendering of a transform.

use super::Transform;
use num_traits::Float;
use std::fmt;

/// Renders the nine entries with three decimals, right-aligned to a shared
/// width, inside a slash/pipe box:
/// ```text
/// /   1.000   0.000   0.000 \
/// |   0.000   1.000   0.000 |
/// \   1.000   2.000   1.000 /
/// ```
impl<F: Float + fmt::Display> fmt::Display for Transform<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.as_array().iter().map(|v| format!("{v:.3}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0) + 2;

        let frames = [('/', '\\'), ('|', '|'), ('\\', '/')];
        for (row, (open, close)) in frames.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{open}")?;
            for cell in &cells[row * 3..row * 3 + 3] {
                write!(f, " {cell:>width$}")?;
            }
            write!(f, " {close}")?;
        }
        Ok(())
    }
}
