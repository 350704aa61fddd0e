//! The in-memory image representation.
//!
//! A [`Grid`] is a rectangular `height × width` matrix of luminance samples,
//! row-major, one sample per pixel. `ndarray`'s `Array2` makes the
//! rectangularity invariant structural: there is no way to build a ragged
//! grid.
//!
//! Cells are `i64`, not `u8`. Values are conceptually bounded to 0-255 after
//! thresholding filters, but intermediates (contour differences, unclamped
//! arithmetic) may leave that range, and block sums during averaging must
//! not overflow. The encode boundary clamps to 0-255 on output.

use ndarray::Array2;

/// Rectangular matrix of grayscale intensity samples, `height × width`.
pub type Grid = Array2<i64>;

/// Build a [`Grid`] from row slices.
///
/// Panics if the rows are ragged: a ragged grid is a defect, never a valid
/// transient state.
pub fn grid_from_rows(rows: &[Vec<i64>]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    assert!(
        rows.iter().all(|row| row.len() == width),
        "grid rows must all have the same length"
    );

    let mut grid = Grid::zeros((height, width));
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            grid[[i, j]] = value;
        }
    }
    grid
}
