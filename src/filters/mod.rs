//! Filter algorithms for grayscale grids.
//!
//! Every filter is a free function taking an `ArrayView2<i64>` of the
//! current grid and returning a new owned [`Grid`](crate::grid::Grid)
//! (fallible filters return `FilterResult<Grid>`). Filters never clamp to
//! 0-255; that is the encoder's job.
//!
//! ## Filter Categories
//!
//! - **Block averaging**: blur, pixelate (integer-truncated means; blur
//!   shrinks the grid, pixelate keeps its shape)
//! - **Edges**: contour (adjacent-difference map, each row loses one cell)
//! - **Geometry**: rotate, flip, concat (shape-changing, value-preserving)
//! - **Per-cell maps**: segment, binary, invert
//! - **Noise**: salt-and-pepper (seeded, reproducible)
//!
//! ## Arithmetic
//!
//! Averages divide with `i64` division, which truncates toward zero. For
//! the non-negative sums these filters produce that matches floor division,
//! so outputs reproduce reference results bit-for-bit.

pub mod blur;
pub mod edge;
pub mod geometry;
pub mod noise;
pub mod stylize;
