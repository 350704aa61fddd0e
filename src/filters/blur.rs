//! Block-averaging filters: blur and pixelate.
//!
//! Both replace regions with their integer-truncated mean, but with
//! different geometry:
//!
//! - **blur** slides an `L×L` window one cell at a time and keeps one output
//!   cell per placement, so the grid shrinks to `(H-L+1) × (W-L+1)`.
//! - **pixelate** tiles the grid with `L×L` blocks anchored at multiples of
//!   `L` and flattens every cell of a block to the block mean, keeping the
//!   grid's shape. Ragged right/bottom blocks average over their actual
//!   cell count.
//!
//! Both reject a level that is not strictly between 0 and the shortest grid
//! side.

use ndarray::ArrayView2;

use crate::error::{FilterError, FilterResult};
use crate::grid::Grid;

/// Check a blur/pixelate level against the grid dimensions.
///
/// Valid levels are `0 < level < min(height, width)`.
fn validate_level(
    filter: &'static str,
    level: i64,
    height: usize,
    width: usize,
) -> FilterResult<usize> {
    let shortest = height.min(width) as i64;
    if level <= 0 || level >= shortest {
        return Err(FilterError::InvalidParameter {
            filter,
            level,
            limit: shortest - 1,
        });
    }
    Ok(level as usize)
}

/// Box blur with same-size decimation.
///
/// Output cell `(i, j)` is the truncated mean of the `level × level` window
/// whose top-left corner sits at `(i, j)`; the output therefore has shape
/// `(H - level + 1) × (W - level + 1)`.
///
/// # Errors
/// Returns [`FilterError::InvalidParameter`] unless
/// `0 < level < min(H, W)`.
pub fn blur(input: ArrayView2<i64>, level: i64) -> FilterResult<Grid> {
    let (height, width) = input.dim();
    let level = validate_level("blur", level, height, width)?;

    let window_cells = (level * level) as i64;
    let mut output = Grid::zeros((height - level + 1, width - level + 1));

    for i in 0..height - level + 1 {
        for j in 0..width - level + 1 {
            let mut sum = 0i64;
            for di in 0..level {
                for dj in 0..level {
                    sum += input[[i + di, j + dj]];
                }
            }
            output[[i, j]] = sum / window_cells;
        }
    }

    Ok(output)
}

/// Flatten each `level × level` tile to its truncated mean.
///
/// Tiles are anchored at multiples of `level`; the last row/column of tiles
/// may be smaller and averages over the cells it actually covers.
///
/// # Errors
/// Returns [`FilterError::InvalidParameter`] unless
/// `0 < level < min(H, W)`.
pub fn pixelate(input: ArrayView2<i64>, level: i64) -> FilterResult<Grid> {
    let (height, width) = input.dim();
    let level = validate_level("pixelate", level, height, width)?;

    let mut output = Grid::zeros((height, width));

    for block_i in (0..height).step_by(level) {
        let block_h = level.min(height - block_i);
        for block_j in (0..width).step_by(level) {
            let block_w = level.min(width - block_j);

            let mut sum = 0i64;
            for di in 0..block_h {
                for dj in 0..block_w {
                    sum += input[[block_i + di, block_j + dj]];
                }
            }
            let average = sum / (block_h * block_w) as i64;

            for di in 0..block_h {
                for dj in 0..block_w {
                    output[[block_i + di, block_j + dj]] = average;
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_from_rows;

    #[test]
    fn test_blur_output_dimensions() {
        let grid = Grid::zeros((6, 4));

        let result = blur(grid.view(), 3).unwrap();

        assert_eq!(result.dim(), (4, 2));
    }

    #[test]
    fn test_blur_uniform_grid_stays_uniform() {
        let grid = grid_from_rows(&vec![vec![7; 5]; 5]);

        let result = blur(grid.view(), 2).unwrap();

        assert_eq!(result, grid_from_rows(&vec![vec![7; 4]; 4]));
    }

    #[test]
    fn test_blur_truncates_window_average() {
        // Window sum 0 + 1 + 2 + 4 = 7, 7 / 4 truncates to 1.
        let grid = grid_from_rows(&[vec![0, 1], vec![2, 4]]);

        let result = blur(grid.view(), 2).unwrap();

        assert_eq!(result, grid_from_rows(&[vec![1]]));
    }

    #[test]
    fn test_blur_rejects_out_of_range_levels() {
        let grid = Grid::zeros((4, 4));

        for level in [0, -1, 4, 99] {
            let err = blur(grid.view(), level).unwrap_err();
            assert!(
                matches!(err, FilterError::InvalidParameter { filter: "blur", .. }),
                "level {level} should be rejected"
            );
        }
    }

    #[test]
    fn test_blur_accepts_largest_valid_level() {
        let grid = Grid::zeros((4, 6));

        let result = blur(grid.view(), 3).unwrap();

        assert_eq!(result.dim(), (2, 4));
    }

    #[test]
    fn test_pixelate_uniform_grid_is_invariant() {
        // 7x7 with level 3 leaves ragged 1-wide blocks on two edges; a
        // uniform grid must come through unchanged, remainder blocks included.
        let grid = grid_from_rows(&vec![vec![10; 7]; 7]);

        let result = pixelate(grid.view(), 3).unwrap();

        assert_eq!(result, grid);
    }

    #[test]
    fn test_pixelate_ragged_blocks_average_actual_cells() {
        let grid = grid_from_rows(&[
            vec![1, 2, 10],
            vec![3, 4, 20],
            vec![5, 6, 30],
        ]);

        let result = pixelate(grid.view(), 2).unwrap();

        // Blocks: 2x2 mean 2, 2x1 mean 15, 1x2 mean 5, 1x1 mean 30.
        assert_eq!(
            result,
            grid_from_rows(&[
                vec![2, 2, 15],
                vec![2, 2, 15],
                vec![5, 5, 30],
            ])
        );
    }

    #[test]
    fn test_pixelate_keeps_dimensions() {
        let grid = Grid::zeros((9, 5));

        let result = pixelate(grid.view(), 4).unwrap();

        assert_eq!(result.dim(), (9, 5));
    }

    #[test]
    fn test_pixelate_rejects_out_of_range_levels() {
        let grid = Grid::zeros((5, 3));

        for level in [0, -4, 3, 10] {
            let err = pixelate(grid.view(), level).unwrap_err();
            assert!(
                matches!(
                    err,
                    FilterError::InvalidParameter { filter: "pixelate", .. }
                ),
                "level {level} should be rejected"
            );
        }
    }
}
