//! Image watermark codecs and the shared pixel utilities they build on.

pub mod dct2d;
pub mod dct_codec;
pub mod lsb_codec;
pub mod ycbcr;

pub use dct_codec::DctCodec;
pub use lsb_codec::LsbCodec;

use enum_dispatch::enum_dispatch;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, RgbImage};

use crate::error::WatermarkError;
use crate::method::Method;
use crate::result::Result;

/// Samples above this value binarize to a `1` watermark bit.
pub const BINARY_THRESHOLD: u8 = 127;

/// Embeds a binary watermark into a host image.
#[enum_dispatch]
pub trait ImageEmbedder {
    fn embed(&self, host: &DynamicImage, watermark: &DynamicImage) -> Result<RgbImage>;
}

/// Recovers a binary watermark from a watermarked image.
///
/// Blind codecs ignore `reference`; the non-blind DCT codec requires it
/// to be the original, unwatermarked host.
#[enum_dispatch]
pub trait ImageExtractor {
    fn extract(
        &self,
        marked: &DynamicImage,
        reference: Option<&DynamicImage>,
    ) -> Result<GrayImage>;
}

#[enum_dispatch(ImageEmbedder)]
pub enum Embedder {
    Lsb(LsbCodec),
    Dct(DctCodec),
}

#[enum_dispatch(ImageExtractor)]
pub enum Extractor {
    Lsb(LsbCodec),
    Dct(DctCodec),
}

impl Embedder {
    /// Builds the embedder for a method selector. `alpha` only applies to
    /// [`Method::Dct`] and is validated there.
    pub fn for_method(method: Method, alpha: f32) -> Result<Self> {
        Ok(match method {
            Method::Lsb => LsbCodec.into(),
            Method::Dct => DctCodec::new(alpha)?.into(),
        })
    }
}

impl Extractor {
    pub fn for_method(method: Method, alpha: f32) -> Result<Self> {
        Ok(match method {
            Method::Lsb => LsbCodec.into(),
            Method::Dct => DctCodec::new(alpha)?.into(),
        })
    }
}

/// Deterministic watermark resampling.
///
/// Uses bilinear interpolation (`FilterType::Triangle`). The filter choice is
/// part of the codec contract: it decides how samples near cell borders
/// binarize and therefore affects pixel-exact output.
pub fn resample(image: &GrayImage, width: u32, height: u32) -> GrayImage {
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Reduces a grayscale image to a binary mask of `0`/`1` samples.
pub fn binarize(image: &GrayImage) -> GrayImage {
    let mut mask = image.clone();
    for px in mask.pixels_mut() {
        px[0] = u8::from(px[0] > BINARY_THRESHOLD);
    }
    mask
}

pub(crate) fn ensure_non_empty(img: &DynamicImage) -> Result<()> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(WatermarkError::EmptyImage(width, height));
    }
    Ok(())
}
