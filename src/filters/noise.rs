//! Noise filter: salt-and-pepper.
//!
//! Each cell independently draws a uniform number in `[0, 1)`: below 0.2 the
//! cell saturates to 255 (salt), above 0.8 it drops to 0 (pepper), otherwise
//! it is left alone. Roughly 40% of cells change.
//!
//! The draw comes from a small seeded LCG rather than a system RNG, so the
//! filter is reproducible: the same seed perturbs the same cells. Callers
//! that want fresh noise per run vary the seed.

use ndarray::ArrayView2;

use crate::grid::Grid;

const SALT_PROBABILITY: f32 = 0.2;
const PEPPER_THRESHOLD: f32 = 0.8;

// ============================================================================
// Simple RNG (deterministic for reproducible output)
// ============================================================================

/// MINSTD linear congruential generator.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.wrapping_add(1), // Avoid zero
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(48271).wrapping_add(1) % 2147483647;
        self.state as u32
    }

    /// Uniform f32 in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (2147483647.0f32)
    }
}

// ============================================================================
// Salt and Pepper
// ============================================================================

/// Randomly saturate cells to 255 or drop them to 0.
///
/// Cells are visited in row-major order, one draw per cell, so a given seed
/// always produces the same perturbation pattern.
pub fn salt_and_pepper(input: ArrayView2<i64>, seed: u64) -> Grid {
    let mut rng = SimpleRng::new(seed);
    let mut output = input.to_owned();

    for value in output.iter_mut() {
        let draw = rng.next_f32();
        if draw < SALT_PROBABILITY {
            *value = 255;
        } else if draw > PEPPER_THRESHOLD {
            *value = 0;
        }
    }

    output
}
