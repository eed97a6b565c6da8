//! Orthonormal 8×8 two-dimensional DCT on top of `rustdct`.
//!
//! The planner's DCT-II/DCT-III transforms are unnormalized; this module
//! applies the orthonormal scale factors around them so that
//! `inverse(forward(block))` is the identity and coefficient magnitudes are
//! comparable across blocks.

use std::sync::Arc;

use rustdct::{DctPlanner, TransformType2And3};

/// Side length of one coefficient block.
pub const BLOCK_SIZE: usize = 8;

/// Number of samples in one block.
pub const BLOCK_AREA: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Reusable forward/inverse transform pair for 8×8 blocks.
///
/// Plans are computed once and shared across all blocks of an image.
pub struct BlockDct {
    dct2: Arc<dyn TransformType2And3<f32>>,
    dct3: Arc<dyn TransformType2And3<f32>>,
}

impl BlockDct {
    pub fn new() -> Self {
        let mut planner = DctPlanner::new();
        Self {
            dct2: planner.plan_dct2(BLOCK_SIZE),
            dct3: planner.plan_dct3(BLOCK_SIZE),
        }
    }

    /// Forward 2D DCT-II of one block, in place.
    ///
    /// `block` is row-major; afterwards `block[row * 8 + col]` holds the
    /// coefficient at frequency (row, col).
    pub fn forward(&self, block: &mut [f32; BLOCK_AREA]) {
        for row in block.chunks_exact_mut(BLOCK_SIZE) {
            self.dct2.process_dct2(row);
            scale_forward(row);
        }
        transpose(block);
        for row in block.chunks_exact_mut(BLOCK_SIZE) {
            self.dct2.process_dct2(row);
            scale_forward(row);
        }
        transpose(block);
    }

    /// Inverse 2D DCT (DCT-III) of one block, in place.
    pub fn inverse(&self, block: &mut [f32; BLOCK_AREA]) {
        for row in block.chunks_exact_mut(BLOCK_SIZE) {
            scale_inverse(row);
            self.dct3.process_dct3(row);
        }
        transpose(block);
        for row in block.chunks_exact_mut(BLOCK_SIZE) {
            scale_inverse(row);
            self.dct3.process_dct3(row);
        }
        transpose(block);
    }
}

impl Default for BlockDct {
    fn default() -> Self {
        Self::new()
    }
}

// Orthonormal DCT-II scale factors: sqrt(1/N) for the DC term,
// sqrt(2/N) for the rest.
const SCALE_DC: f32 = 0.353_553_39; // sqrt(1/8)
const SCALE_AC: f32 = 0.5; // sqrt(2/8)

fn scale_forward(row: &mut [f32]) {
    row[0] *= SCALE_DC;
    for v in &mut row[1..] {
        *v *= SCALE_AC;
    }
}

// The planner's DCT-III halves its first input term, so the DC factor
// doubles here to cancel that out.
fn scale_inverse(row: &mut [f32]) {
    row[0] *= 2.0 * SCALE_DC;
    for v in &mut row[1..] {
        *v *= SCALE_AC;
    }
}

fn transpose(block: &mut [f32; BLOCK_AREA]) {
    for r in 0..BLOCK_SIZE {
        for c in (r + 1)..BLOCK_SIZE {
            block.swap(r * BLOCK_SIZE + c, c * BLOCK_SIZE + r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_block_has_only_a_dc_coefficient() {
        let dct = BlockDct::new();
        let mut block = [128.0f32; BLOCK_AREA];
        dct.forward(&mut block);

        // Orthonormal DC of a constant block c is N * c.
        assert!((block[0] - 1024.0).abs() < 1e-2);
        for &coeff in &block[1..] {
            assert!(coeff.abs() < 1e-3, "AC coefficient not zero: {coeff}");
        }
    }

    #[test]
    fn forward_inverse_is_identity() {
        let dct = BlockDct::new();
        let mut block = [0.0f32; BLOCK_AREA];
        for (i, v) in block.iter_mut().enumerate() {
            *v = ((i * 37) % 256) as f32;
        }
        let original = block;

        dct.forward(&mut block);
        dct.inverse(&mut block);

        for (got, want) in block.iter().zip(original.iter()) {
            assert!((got - want).abs() < 1e-2, "{got} != {want}");
        }
    }

    #[test]
    fn single_coefficient_roundtrips() {
        let dct = BlockDct::new();
        let mut block = [0.0f32; BLOCK_AREA];
        block[3 * BLOCK_SIZE + 4] = 100.0;

        dct.inverse(&mut block);
        dct.forward(&mut block);

        for (i, &coeff) in block.iter().enumerate() {
            let want = if i == 3 * BLOCK_SIZE + 4 { 100.0 } else { 0.0 };
            assert!((coeff - want).abs() < 1e-2, "index {i}: {coeff}");
        }
    }
}
