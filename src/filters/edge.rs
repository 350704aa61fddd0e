//! Edge filter: contour.
//!
//! Maps each row to the absolute differences of its neighbouring cells, a
//! cheap horizontal edge detector. Each row loses one cell, so the output
//! is `H × (W-1)`.

use ndarray::ArrayView2;

use crate::grid::Grid;

/// Absolute adjacent-difference map.
///
/// Output cell `(i, j)` is `|in[i][j] - in[i][j+1]|`. A grid narrower than
/// two cells is defect input and degenerates to a zero-width result, which
/// the encode boundary rejects.
pub fn contour(input: ArrayView2<i64>) -> Grid {
    let (height, width) = input.dim();
    let out_width = width.saturating_sub(1);
    let mut output = Grid::zeros((height, out_width));

    for i in 0..height {
        for j in 0..out_width {
            output[[i, j]] = (input[[i, j]] - input[[i, j + 1]]).abs();
        }
    }

    output
}
