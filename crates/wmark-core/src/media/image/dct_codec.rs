//! Frequency-domain watermark codec on 8×8 luma DCT blocks.
//!
//! Embedding partitions the luma plane into non-overlapping 8×8 blocks
//! (row-major, partial blocks at the bottom/right edge carry no bit and pass
//! through unmodified) and encodes one watermark bit per block into the two
//! mid-frequency coefficients (3,4) and (4,3). Both are replaced by their
//! average shifted up (bit 1) or down (bit 0), so the difference between the
//! watermarked and the original coefficients has a bit-dependent sign.
//!
//! Extraction is non-blind: it recomputes both DCTs and compares the
//! coefficient pairs of the watermarked image against the original host.

use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::WatermarkError;
use crate::media::image::dct2d::{BlockDct, BLOCK_AREA, BLOCK_SIZE};
use crate::media::image::{binarize, ensure_non_empty, resample, ycbcr, ImageEmbedder, ImageExtractor};
use crate::result::Result;

/// Smallest accepted embedding strength.
pub const ALPHA_MIN: f32 = 0.01;

/// Largest accepted embedding strength.
pub const ALPHA_MAX: f32 = 0.2;

// Mid-frequency coefficient pair carrying the bit. Low enough to survive
// moderate recompression, high enough to stay visually imperceptible.
const COEFF_A: usize = 3 * BLOCK_SIZE + 4;
const COEFF_B: usize = 4 * BLOCK_SIZE + 3;

// Floor on the coefficient perturbation. A zero-energy block has
// `avg == 0`, and `alpha * |avg|` alone would vanish entirely in the
// 8-bit quantization of the output image.
const MIN_DELTA: f32 = 4.0;

/// Non-blind codec, parameterized by the embedding strength `alpha`.
#[derive(Debug, Clone, Copy)]
pub struct DctCodec {
    alpha: f32,
}

impl DctCodec {
    /// Creates a codec, rejecting `alpha` outside of
    /// [[`ALPHA_MIN`], [`ALPHA_MAX`]].
    pub fn new(alpha: f32) -> Result<Self> {
        if !(ALPHA_MIN..=ALPHA_MAX).contains(&alpha) {
            return Err(WatermarkError::AlphaOutOfRange(alpha));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl ImageEmbedder for DctCodec {
    /// Embeds one watermark bit per full 8×8 block of the luma plane.
    ///
    /// The watermark is converted to grayscale, resampled (bilinear) to the
    /// block grid dimensions and thresholded, so one mask sample maps 1:1 to
    /// one block. Chroma is untouched; luma is clipped to [0, 255] on
    /// reassembly.
    fn embed(&self, host: &DynamicImage, watermark: &DynamicImage) -> Result<RgbImage> {
        ensure_non_empty(host)?;
        ensure_non_empty(watermark)?;

        let mut out = host.to_rgb8();
        let (width, height) = out.dimensions();
        let grid = BlockGrid::of(width, height)?;

        let mask = binarize(&resample(
            &watermark.to_luma8(),
            grid.wide as u32,
            grid.tall as u32,
        ));

        let mut planes = ycbcr::from_rgb(&out);
        let dct = BlockDct::new();
        let mut block = [0f32; BLOCK_AREA];

        for br in 0..grid.tall {
            for bc in 0..grid.wide {
                grid.read(&planes.y, br, bc, &mut block);
                dct.forward(&mut block);

                let avg = 0.5 * (block[COEFF_A] + block[COEFF_B]);
                let delta = (self.alpha * avg.abs()).max(MIN_DELTA);
                let bit = mask.get_pixel(bc as u32, br as u32)[0] == 1;
                let coeff = if bit { avg + delta } else { avg - delta };
                block[COEFF_A] = coeff;
                block[COEFF_B] = coeff;

                dct.inverse(&mut block);
                grid.write(&mut planes.y, br, bc, &block);
            }
        }

        // Remainder rows/columns beyond the block grid carry no bit and must
        // stay byte-identical, so only the grid area takes the colorspace
        // round trip.
        let converted = ycbcr::to_rgb(&planes, width, height);
        for y in 0..(grid.tall * BLOCK_SIZE) as u32 {
            for x in 0..(grid.wide * BLOCK_SIZE) as u32 {
                *out.get_pixel_mut(x, y) = *converted.get_pixel(x, y);
            }
        }

        Ok(out)
    }
}

impl ImageExtractor for DctCodec {
    /// Recovers one bit per block by comparing the coefficient pair of the
    /// watermarked image against the original host: `diff1 + diff2 > 0`
    /// decodes as 255, otherwise 0. Output dimensions are the block grid,
    /// `floor(width / 8) × floor(height / 8)`.
    ///
    /// `alpha` plays no role in the decision rule; it only sized the margin
    /// at embed time.
    fn extract(
        &self,
        marked: &DynamicImage,
        reference: Option<&DynamicImage>,
    ) -> Result<GrayImage> {
        let original = reference.ok_or(WatermarkError::ReferenceNotSet)?;
        ensure_non_empty(marked)?;
        ensure_non_empty(original)?;

        let marked = marked.to_rgb8();
        let original = original.to_rgb8();
        if marked.dimensions() != original.dimensions() {
            return Err(WatermarkError::DimensionMismatch {
                expected: original.dimensions(),
                actual: marked.dimensions(),
            });
        }

        let (width, height) = marked.dimensions();
        let grid = BlockGrid::of(width, height)?;

        let marked_y = ycbcr::luma(&marked);
        let original_y = ycbcr::luma(&original);

        let dct = BlockDct::new();
        let mut marked_block = [0f32; BLOCK_AREA];
        let mut original_block = [0f32; BLOCK_AREA];
        let mut bitmap = GrayImage::new(grid.wide as u32, grid.tall as u32);

        for br in 0..grid.tall {
            for bc in 0..grid.wide {
                grid.read(&marked_y, br, bc, &mut marked_block);
                grid.read(&original_y, br, bc, &mut original_block);
                dct.forward(&mut marked_block);
                dct.forward(&mut original_block);

                let diff = (marked_block[COEFF_A] - original_block[COEFF_A])
                    + (marked_block[COEFF_B] - original_block[COEFF_B]);
                bitmap.get_pixel_mut(bc as u32, br as u32)[0] = if diff > 0.0 { 255 } else { 0 };
            }
        }

        Ok(bitmap)
    }
}

/// The full-block partition of a plane: `floor(h/8) × floor(w/8)` blocks,
/// remainder rows/columns excluded.
struct BlockGrid {
    width: usize,
    wide: usize,
    tall: usize,
}

impl BlockGrid {
    fn of(width: u32, height: u32) -> Result<Self> {
        let wide = width as usize / BLOCK_SIZE;
        let tall = height as usize / BLOCK_SIZE;
        if wide == 0 || tall == 0 {
            return Err(WatermarkError::HostTooSmall { width, height });
        }
        Ok(Self {
            width: width as usize,
            wide,
            tall,
        })
    }

    fn read(&self, plane: &[f32], br: usize, bc: usize, block: &mut [f32; BLOCK_AREA]) {
        let top = br * BLOCK_SIZE;
        let left = bc * BLOCK_SIZE;
        for row in 0..BLOCK_SIZE {
            let src = (top + row) * self.width + left;
            block[row * BLOCK_SIZE..(row + 1) * BLOCK_SIZE]
                .copy_from_slice(&plane[src..src + BLOCK_SIZE]);
        }
    }

    fn write(&self, plane: &mut [f32], br: usize, bc: usize, block: &[f32; BLOCK_AREA]) {
        let top = br * BLOCK_SIZE;
        let left = bc * BLOCK_SIZE;
        for row in 0..BLOCK_SIZE {
            let dst = (top + row) * self.width + left;
            plane[dst..dst + BLOCK_SIZE]
                .copy_from_slice(&block[row * BLOCK_SIZE..(row + 1) * BLOCK_SIZE]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    fn textured_host(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let v = 96 + ((x * 13 + y * 29) % 96) as u8;
            Rgb([v, v.wrapping_add(10), v.wrapping_sub(20)])
        }))
    }

    #[test]
    fn rejects_alpha_outside_contract() {
        assert!(DctCodec::new(0.009).is_err());
        assert!(DctCodec::new(0.21).is_err());
        assert!(DctCodec::new(0.01).is_ok());
        assert!(DctCodec::new(0.2).is_ok());
    }

    #[test]
    fn extract_without_reference_fails() {
        let codec = DctCodec::new(0.05).unwrap();
        let err = codec.extract(&textured_host(16, 16), None).unwrap_err();
        assert!(matches!(err, WatermarkError::ReferenceNotSet));
    }

    #[test]
    fn extract_rejects_mismatched_reference() {
        let codec = DctCodec::new(0.05).unwrap();
        let err = codec
            .extract(&textured_host(16, 16), Some(&textured_host(24, 16)))
            .unwrap_err();
        assert!(matches!(err, WatermarkError::DimensionMismatch { .. }));
    }

    #[test]
    fn host_below_one_block_is_rejected() {
        let codec = DctCodec::new(0.05).unwrap();
        let mark = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([255])));
        let err = codec.embed(&textured_host(7, 32), &mark).unwrap_err();
        assert!(matches!(err, WatermarkError::HostTooSmall { .. }));
    }

    #[test]
    fn embed_preserves_dimensions_and_partial_edges() {
        let codec = DctCodec::new(0.1).unwrap();
        let host = textured_host(17, 17);
        let mark = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 2, |x, y| {
            Luma([((x + y) % 2 * 255) as u8])
        }));

        let marked = codec.embed(&host, &mark).unwrap();
        assert_eq!(marked.dimensions(), (17, 17));

        // Row and column 16 are outside the 2×2 block grid.
        let host = host.to_rgb8();
        for i in 0..17 {
            assert_eq!(marked.get_pixel(16, i), host.get_pixel(16, i));
            assert_eq!(marked.get_pixel(i, 16), host.get_pixel(i, 16));
        }
    }

    #[test]
    fn chroma_survives_embedding_unchanged() {
        let codec = DctCodec::new(0.05).unwrap();
        let host = textured_host(32, 32);
        let mark = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([255])));

        let marked = codec.embed(&host, &mark).unwrap();
        let before = ycbcr::from_rgb(&host.to_rgb8());
        let after = ycbcr::from_rgb(&marked);

        for (a, b) in before.cb.iter().zip(after.cb.iter()) {
            assert!((a - b).abs() < 1.5, "cb drifted: {a} vs {b}");
        }
        for (a, b) in before.cr.iter().zip(after.cr.iter()) {
            assert!((a - b).abs() < 1.5, "cr drifted: {a} vs {b}");
        }
    }
}
