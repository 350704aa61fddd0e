//! Geometry filters: rotate, flip, concat.
//!
//! Shape changes only; every sample value is preserved. `concat` is the one
//! binary filter in the engine and the only one that can fail, when the two
//! grids disagree on the shared dimension.
//!
//! Direction naming follows the original command set: `flip vertical`
//! mirrors each row left-right, `flip horizontal` mirrors rows top-bottom.

use ndarray::ArrayView2;

use crate::directive::Direction;
use crate::error::{FilterError, FilterResult};
use crate::grid::Grid;

/// Rotate 90° clockwise: an `H × W` grid becomes `W × H`, with
/// `out[j][H-1-i] = in[i][j]`.
pub fn rotate(input: ArrayView2<i64>) -> Grid {
    let (height, width) = input.dim();
    let mut output = Grid::zeros((width, height));

    for i in 0..height {
        for j in 0..width {
            output[[j, height - 1 - i]] = input[[i, j]];
        }
    }

    output
}

/// Mirror the grid.
///
/// `Vertical` reverses each row (left-right mirror), `Horizontal` reverses
/// the row order (top-bottom mirror). Applying the same flip twice restores
/// the original grid.
pub fn flip(input: ArrayView2<i64>, direction: Direction) -> Grid {
    let (height, width) = input.dim();
    let mut output = Grid::zeros((height, width));

    match direction {
        Direction::Vertical => {
            for i in 0..height {
                for j in 0..width {
                    output[[i, j]] = input[[i, width - 1 - j]];
                }
            }
        }
        Direction::Horizontal => {
            for i in 0..height {
                for j in 0..width {
                    output[[i, j]] = input[[height - 1 - i, j]];
                }
            }
        }
    }

    output
}

/// Join two grids edge to edge.
///
/// `Horizontal` puts `left` and `right` side by side and requires equal
/// heights; `Vertical` stacks `left` above `right` and requires equal
/// widths.
///
/// # Errors
/// Returns [`FilterError::DimensionMismatch`] when the shared dimension
/// differs.
pub fn concat(
    left: ArrayView2<i64>,
    right: ArrayView2<i64>,
    direction: Direction,
) -> FilterResult<Grid> {
    let (h1, w1) = left.dim();
    let (h2, w2) = right.dim();

    match direction {
        Direction::Horizontal => {
            if h1 != h2 {
                return Err(FilterError::DimensionMismatch {
                    direction,
                    expected: h1,
                    actual: h2,
                });
            }
            let mut output = Grid::zeros((h1, w1 + w2));
            for i in 0..h1 {
                for j in 0..w1 {
                    output[[i, j]] = left[[i, j]];
                }
                for j in 0..w2 {
                    output[[i, w1 + j]] = right[[i, j]];
                }
            }
            Ok(output)
        }
        Direction::Vertical => {
            if w1 != w2 {
                return Err(FilterError::DimensionMismatch {
                    direction,
                    expected: w1,
                    actual: w2,
                });
            }
            let mut output = Grid::zeros((h1 + h2, w1));
            for j in 0..w1 {
                for i in 0..h1 {
                    output[[i, j]] = left[[i, j]];
                }
                for i in 0..h2 {
                    output[[h1 + i, j]] = right[[i, j]];
                }
            }
            Ok(output)
        }
    }
}
