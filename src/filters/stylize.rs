//! Per-cell value maps: segment, binary, invert.
//!
//! These touch every cell independently and never change the grid's shape.
//! Segment and binary are hard thresholds (strictly-greater-than), invert
//! reflects values around the 8-bit midpoint. All three are stable under
//! repetition: segment and binary are idempotent, invert is an involution
//! for values in 0-255.

use ndarray::ArrayView2;

use crate::grid::Grid;

/// Coarse segmentation threshold: 255 where the value exceeds 100, else 0.
pub fn segment(input: ArrayView2<i64>) -> Grid {
    input.mapv(|v| if v > 100 { 255 } else { 0 })
}

/// Midpoint threshold: 255 where the value exceeds 127, else 0.
pub fn binary(input: ArrayView2<i64>) -> Grid {
    input.mapv(|v| if v > 127 { 255 } else { 0 })
}

/// Photographic negative: `255 - value` per cell.
pub fn invert(input: ArrayView2<i64>) -> Grid {
    input.mapv(|v| 255 - v)
}
