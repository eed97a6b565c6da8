//! # Wmark Core API
//!
//! Embeds a binary watermark image into a host image and recovers it later,
//! via two interchangeable codecs:
//!
//! - [`LsbCodec`]: spatial, one bit per pixel in the red channel LSB, blind
//!   extraction
//! - [`DctCodec`]: frequency-domain, one bit per 8×8 luma block encoded in a
//!   mid-frequency coefficient pair, non-blind extraction (needs the original
//!   host as reference)
//!
//! # Usage Examples
//!
//! ## Embed a watermark into an image file
//!
//! ```no_run
//! use wmark_core::Method;
//!
//! wmark_core::api::embed::prepare()
//!     .with_host("photo.png")
//!     .with_watermark("logo.png")
//!     .with_method(Method::Dct)
//!     .with_alpha(0.05)
//!     .with_output("photo-marked.png")
//!     .execute()
//!     .expect("Failed to embed watermark");
//! ```
//!
//! ## Recover the watermark again
//!
//! ```no_run
//! use wmark_core::Method;
//!
//! wmark_core::api::extract::prepare()
//!     .with_marked("photo-marked.png")
//!     .with_reference("photo.png")
//!     .with_method(Method::Dct)
//!     .with_alpha(0.05)
//!     .with_output("logo-recovered.png")
//!     .execute()
//!     .expect("Failed to extract watermark");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod method;
pub mod result;

use image::{DynamicImage, GrayImage, RgbImage};

pub use crate::error::WatermarkError;
pub use crate::media::image::{
    DctCodec, Embedder, Extractor, ImageEmbedder, ImageExtractor, LsbCodec,
};
pub use crate::media::Persist;
pub use crate::method::Method;
pub use crate::result::Result;

/// Embeds `watermark` into `host` via the red channel LSB.
pub fn embed_lsb(host: &DynamicImage, watermark: &DynamicImage) -> Result<RgbImage> {
    LsbCodec.embed(host, watermark)
}

/// Recovers the LSB watermark from `marked`; blind, same dimensions as input.
pub fn extract_lsb(marked: &DynamicImage) -> Result<GrayImage> {
    LsbCodec.extract(marked, None)
}

/// Embeds `watermark` into `host` via 8×8 block DCT coefficients, with
/// strength `alpha` in [0.01, 0.2].
pub fn embed_dct(host: &DynamicImage, watermark: &DynamicImage, alpha: f32) -> Result<RgbImage> {
    DctCodec::new(alpha)?.embed(host, watermark)
}

/// Recovers the DCT watermark from `marked` against the `original` host;
/// non-blind, one sample per 8×8 block.
pub fn extract_dct(
    marked: &DynamicImage,
    original: &DynamicImage,
    alpha: f32,
) -> Result<GrayImage> {
    DctCodec::new(alpha)?.extract(marked, Some(original))
}
