//! Error taxonomy for the filter engine.
//!
//! Every failure the engine can surface is one variant of [`FilterError`].
//! All errors are terminal for the pipeline run that raised them: the
//! remaining directives are abandoned and the caller discards any partial
//! output. Nothing is retried internally.

use crate::directive::Direction;

/// Convenience result type used across the engine.
pub type FilterResult<T> = Result<T, FilterError>;

/// Everything that can go wrong while decoding, parsing directives,
/// running filters, or touching the pending-image store.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The source bytes could not be parsed as an image.
    #[error("could not decode source image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image (or a grid headed for the encoder) has zero width or height.
    #[error("image has zero width or height")]
    EmptyImage,

    /// The output grid could not be rendered to an image file.
    #[error("could not encode output image: {0}")]
    Encode(#[source] image::ImageError),

    /// A blur/pixelate level outside the valid range for the current grid.
    #[error("{filter} level must be between 1 and {limit} for this image, got {level}")]
    InvalidParameter {
        filter: &'static str,
        level: i64,
        /// Largest accepted level: one less than the shortest grid side.
        limit: i64,
    },

    /// Two grids cannot be concatenated along the requested direction.
    #[error("cannot concatenate {direction}: shared dimension differs ({expected} vs {actual})")]
    DimensionMismatch {
        direction: Direction,
        expected: usize,
        actual: usize,
    },

    /// A directive token that names no known filter.
    #[error("unknown filter directive: {0:?}")]
    UnknownFilter(String),

    /// Stage two of the concat handshake arrived with no stored first image.
    #[error("no pending first image for session {0:?}")]
    SessionNotFound(String),

    /// The pending-image store backend failed.
    #[error("pending-image store failure: {0}")]
    Store(#[from] std::io::Error),
}
