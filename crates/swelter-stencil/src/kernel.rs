//! The fixed 3x3 convolution kernel.

use std::fmt;

/// A 3x3 matrix of `f32` weights, row-major, indexed by `(dr+1, dc+1)`
/// for neighbor offsets `dr, dc` in `{-1, 0, 1}`.
#[derive(Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

impl Kernel {
    /// The reference smoothing kernel. Weights sum to 1.0, so the pass
    /// acts as a weighted local average (a diffusion step).
    pub const SMOOTHING: Kernel = Kernel {
        weights: [[0.05, 0.1, 0.05], [0.1, 0.4, 0.1], [0.05, 0.1, 0.05]],
    };

    /// Build a kernel from explicit row-major weights.
    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Weight for the neighbor at offset `(dr, dc)`, each in `-1..=1`.
    ///
    /// # Panics
    ///
    /// Panics if either offset is outside `-1..=1`.
    pub fn weight(&self, dr: i32, dc: i32) -> f32 {
        self.weights[(dr + 1) as usize][(dc + 1) as usize]
    }

    /// Sum of all nine weights, accumulated in `f32`.
    pub fn weight_sum(&self) -> f32 {
        let mut sum = 0.0f32;
        for row in &self.weights {
            for &w in row {
                sum += w;
            }
        }
        sum
    }
}

impl fmt::Debug for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kernel").field(&self.weights).finish()
    }
}
