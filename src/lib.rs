//! Graymill: a grayscale raster filter engine.
//!
//! Decodes an image into a rectangular grid of luminance samples, runs an
//! ordered list of filters over it, and renders the result back to an
//! 8-bit grayscale PNG. The filter list arrives as free text
//! (`"blur 8, rotate, flip horizontal"`) and is parsed into a closed
//! [`Directive`] enum before anything executes, so a bad directive means no
//! work is done on the grid at all.
//!
//! ## Grid Format
//! A [`Grid`] is an `ndarray` matrix of shape `(height, width)` holding
//! `i64` luminance samples. Filters may leave the 0-255 range (contour
//! differences, unclamped arithmetic); the encoder clamps on output.
//!
//! ## Filter Architecture
//! Filters are free functions over array views that return new owned grids;
//! several change the output dimensions (blur, contour, rotate, concat).
//! The [`FilterPipeline`] chains them and owns the two-upload concatenation
//! handshake backed by an injectable [`PendingStore`].
//!
//! ## Example
//! ```no_run
//! use graymill::{codec, parse_directives, FilterPipeline, MemoryStore, PipelineOutcome};
//!
//! # fn run(bytes: &[u8]) -> graymill::FilterResult<()> {
//! let grid = codec::decode(bytes)?;
//! let directives = parse_directives("pixelate 12, invert")?;
//! let mut pipeline = FilterPipeline::new(MemoryStore::new());
//! if let PipelineOutcome::Done(result) = pipeline.apply("chat-1", grid, &directives)? {
//!     let png = codec::encode(&result)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod directive;
pub mod error;
pub mod filters;
pub mod grid;
pub mod pipeline;
pub mod store;

pub use directive::{parse_directives, Direction, Directive};
pub use error::{FilterError, FilterResult};
pub use grid::{grid_from_rows, Grid};
pub use pipeline::{FilterPipeline, PipelineOutcome};
pub use store::{FsStore, MemoryStore, PendingStore};
