//! Ordered application of directives to a grid.
//!
//! The pipeline runs each parsed [`Directive`] strictly in sequence, every
//! step consuming the grid the previous one produced. The first failure
//! aborts the run; nothing partial is handed back.
//!
//! Besides the plain filters, the pipeline owns the two-upload
//! concatenation handshake: `concat1` parks the current grid in the
//! injected [`PendingStore`] and stops, `concat2` in a later run consumes
//! the parked grid and keeps going with whatever directives follow it.

use tracing::debug;

use crate::codec;
use crate::directive::Directive;
use crate::error::{FilterError, FilterResult};
use crate::filters::{blur, edge, geometry, noise, stylize};
use crate::grid::Grid;
use crate::store::PendingStore;

/// What a pipeline run produced.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Every directive ran; this is the final grid.
    Done(Grid),
    /// A `concat1` directive stored the grid; the caller should prompt the
    /// session for its second image. Remaining directives were discarded.
    AwaitingSecondImage,
}

/// Directive executor with an injected pending-image store.
pub struct FilterPipeline<S> {
    store: S,
    noise_seed: u64,
}

impl<S: PendingStore> FilterPipeline<S> {
    /// Build a pipeline around a pending-image store. The noise seed is
    /// taken from the wall clock; use [`with_noise_seed`](Self::with_noise_seed)
    /// for reproducible runs.
    pub fn new(store: S) -> Self {
        let noise_seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0x9E37_79B9, |d| d.as_nanos() as u64);
        FilterPipeline { store, noise_seed }
    }

    /// Fix the salt-and-pepper seed, making runs deterministic.
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise_seed = seed;
        self
    }

    /// Apply `directives` to `grid` in order, on behalf of `session`.
    ///
    /// # Errors
    /// Surfaces the first [`FilterError`] a directive raises; the remaining
    /// directives are abandoned and the grid for this run is lost.
    pub fn apply(
        &mut self,
        session: &str,
        mut grid: Grid,
        directives: &[Directive],
    ) -> FilterResult<PipelineOutcome> {
        for (step, directive) in directives.iter().enumerate() {
            debug!(step, filter = directive.name(), "applying directive");

            grid = match *directive {
                Directive::Blur(level) => blur::blur(grid.view(), level)?,
                Directive::Pixelate(level) => blur::pixelate(grid.view(), level)?,
                Directive::Contour => edge::contour(grid.view()),
                Directive::Rotate => geometry::rotate(grid.view()),
                Directive::Flip(direction) => geometry::flip(grid.view(), direction),
                Directive::Segment => stylize::segment(grid.view()),
                Directive::Binary => stylize::binary(grid.view()),
                Directive::Invert => stylize::invert(grid.view()),
                Directive::SaltAndPepper => {
                    let seed = self.next_noise_seed();
                    noise::salt_and_pepper(grid.view(), seed)
                }
                // Single-request concat joins the grid with a copy of its
                // current state.
                Directive::Concat(direction) => {
                    geometry::concat(grid.view(), grid.view(), direction)?
                }
                Directive::ConcatFirst => {
                    let bytes = codec::encode(&grid)?;
                    self.store.put(session, bytes)?;
                    debug!(session, "stored first image, awaiting second");
                    return Ok(PipelineOutcome::AwaitingSecondImage);
                }
                Directive::ConcatSecond(direction) => {
                    let bytes = self
                        .store
                        .get(session)?
                        .ok_or_else(|| FilterError::SessionNotFound(session.to_string()))?;
                    let stored = codec::decode(&bytes)?;
                    // Second upload on the left, stage-one image on the
                    // right (or below, for vertical joins).
                    let joined = geometry::concat(grid.view(), stored.view(), direction)?;
                    self.store.delete(session)?;
                    debug!(session, "consumed stored first image");
                    joined
                }
            };
        }

        Ok(PipelineOutcome::Done(grid))
    }

    /// Advance the seed so repeated noise directives perturb differently.
    fn next_noise_seed(&mut self) -> u64 {
        let seed = self.noise_seed;
        self.noise_seed = self
            .noise_seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        seed
    }
}
