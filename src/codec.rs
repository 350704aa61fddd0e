//! Codec boundary: raw image bytes in, [`Grid`] out, and back again.
//!
//! Decoding accepts whatever container formats the `image` crate can parse
//! (PNG, JPEG, BMP, WebP, ...). True-color sources are collapsed to a single
//! luminance channel with the classic weights
//! `Y = 0.2989·R + 0.5870·G + 0.1140·B`, truncated to integer. Sources that
//! are already 8-bit grayscale are mapped sample-for-sample, so an encoded
//! grid reloads without drifting through the luminance formula.
//!
//! Encoding renders a grid as an 8-bit grayscale PNG, clamping each cell to
//! 0-255 first. Filters are free to leave that range; the clamp happens here
//! and only here.

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::grid::Grid;

const LUMA_R: f64 = 0.2989;
const LUMA_G: f64 = 0.5870;
const LUMA_B: f64 = 0.1140;

fn luminance(r: u8, g: u8, b: u8) -> i64 {
    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64) as i64
}

/// Decode raw image bytes into a grid of luminance samples.
///
/// # Errors
/// Returns [`FilterError::Decode`] if the bytes are not a parseable image
/// and [`FilterError::EmptyImage`] if the image has zero width or height.
pub fn decode(bytes: &[u8]) -> FilterResult<Grid> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = (img.width() as usize, img.height() as usize);
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage);
    }

    let samples: Vec<i64> = match img {
        // Already single-channel: take the samples as-is.
        DynamicImage::ImageLuma8(luma) => luma.into_raw().into_iter().map(i64::from).collect(),
        other => {
            let rgb = other.to_rgb8().into_raw();
            rgb.par_chunks_exact(3)
                .map(|px| luminance(px[0], px[1], px[2]))
                .collect()
        }
    };

    let grid = Array2::from_shape_vec((height, width), samples)
        .expect("sample count matches image dimensions");
    debug!(height, width, "decoded source image");
    Ok(grid)
}

/// Render a grid as an 8-bit grayscale PNG.
///
/// Out-of-range cells are clamped to 0-255 so the output is deterministic
/// regardless of what earlier filters left behind.
///
/// # Errors
/// Returns [`FilterError::EmptyImage`] for a zero-dimension grid and
/// [`FilterError::Encode`] if the PNG encoder fails.
pub fn encode(grid: &Grid) -> FilterResult<Vec<u8>> {
    let (height, width) = grid.dim();
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyImage);
    }

    let pixels: Vec<u8> = grid.iter().map(|&v| v.clamp(0, 255) as u8).collect();

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(&pixels, width as u32, height as u32, ExtendedColorType::L8)
        .map_err(FilterError::Encode)?;
    debug!(height, width, bytes = bytes.len(), "encoded grid");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_from_rows;

    fn png_from_rgb(pixels: &[(u8, u8, u8)], width: u32, height: u32) -> Vec<u8> {
        let raw: Vec<u8> = pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect();
        let img = image::RgbImage::from_raw(width, height, raw).unwrap();
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&img, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_applies_luminance_weights() {
        // 2x1: pure red and pure white.
        let bytes = png_from_rgb(&[(255, 0, 0), (255, 255, 255)], 2, 1);

        let grid = decode(&bytes).unwrap();

        assert_eq!(grid.dim(), (1, 2));
        // 0.2989 * 255 = 76.2, truncated.
        assert_eq!(grid[[0, 0]], 76);
        // 0.9999 * 255 = 254.97, truncated.
        assert_eq!(grid[[0, 1]], 254);
    }

    #[test]
    fn test_decode_rejects_garbage_bytes() {
        let err = decode(&[0xFF, 0xFE, 0x00, 0x01]).unwrap_err();

        assert!(matches!(err, FilterError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_empty_bytes() {
        assert!(matches!(decode(&[]), Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_encode_clamps_out_of_range_cells() {
        let grid = grid_from_rows(&[vec![-5, 300], vec![128, 0]]);

        let bytes = encode(&grid).unwrap();
        let reloaded = decode(&bytes).unwrap();

        assert_eq!(reloaded, grid_from_rows(&[vec![0, 255], vec![128, 0]]));
    }

    #[test]
    fn test_encode_rejects_zero_dimension_grid() {
        let grid = Grid::zeros((0, 0));

        assert!(matches!(encode(&grid), Err(FilterError::EmptyImage)));
    }

    #[test]
    fn test_round_trip_is_lossless_for_renderable_grids() {
        let grid = grid_from_rows(&[vec![0, 100, 255], vec![17, 128, 200]]);

        let reloaded = decode(&encode(&grid).unwrap()).unwrap();

        assert_eq!(reloaded, grid);
    }
}
