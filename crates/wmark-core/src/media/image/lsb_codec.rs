//! Spatial least-significant-bit watermark codec.
//!
//! Stores one watermark bit per pixel in the low-order bit of the red
//! channel. Capacity therefore always equals the host pixel count and no
//! capacity check is needed. Extraction is blind and bit-exact as long as
//! no lossy re-encoding happened in between; a recompressed image yields
//! garbage without any way to detect it here.

use image::{DynamicImage, GrayImage, RgbImage};

use crate::media::image::{binarize, ensure_non_empty, resample, ImageEmbedder, ImageExtractor};
use crate::result::Result;

/// Factory-free codec, all state lives in the images.
#[derive(Debug, Default, Clone, Copy)]
pub struct LsbCodec;

impl ImageEmbedder for LsbCodec {
    /// Embeds the binarized watermark into the red channel LSB of every pixel.
    ///
    /// The watermark is converted to grayscale, resampled (bilinear) to the
    /// host dimensions and thresholded. Green, blue and the upper seven red
    /// bits are left untouched.
    fn embed(&self, host: &DynamicImage, watermark: &DynamicImage) -> Result<RgbImage> {
        ensure_non_empty(host)?;
        ensure_non_empty(watermark)?;

        let mut out = host.to_rgb8();
        let (width, height) = out.dimensions();
        let mask = binarize(&resample(&watermark.to_luma8(), width, height));

        for (x, y, px) in out.enumerate_pixels_mut() {
            px[0] = (px[0] & 0xFE) | mask.get_pixel(x, y)[0];
        }

        Ok(out)
    }
}

impl ImageExtractor for LsbCodec {
    /// Reads the red channel LSB of every pixel back into a saturated
    /// single-channel bitmap of the same dimensions.
    fn extract(
        &self,
        marked: &DynamicImage,
        _reference: Option<&DynamicImage>,
    ) -> Result<GrayImage> {
        ensure_non_empty(marked)?;

        let marked = marked.to_rgb8();
        let (width, height) = marked.dimensions();

        Ok(GrayImage::from_fn(width, height, |x, y| {
            image::Luma([(marked.get_pixel(x, y)[0] & 1) * 255])
        }))
    }
}
