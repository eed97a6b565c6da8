//! BT.601 full-range luma/chroma plane conversion.
//!
//! The DCT codec perturbs only the luma plane; chroma passes through
//! untouched, which keeps color distortion out of the embedding.

use image::{Rgb, RgbImage};

/// f32 sample planes of one image, row-major.
pub struct Planes {
    pub y: Vec<f32>,
    pub cb: Vec<f32>,
    pub cr: Vec<f32>,
}

/// Splits an RGB image into YCbCr planes.
pub fn from_rgb(img: &RgbImage) -> Planes {
    let len = (img.width() * img.height()) as usize;
    let mut planes = Planes {
        y: Vec::with_capacity(len),
        cb: Vec::with_capacity(len),
        cr: Vec::with_capacity(len),
    };

    for Rgb([r, g, b]) in img.pixels() {
        let (r, g, b) = (*r as f32, *g as f32, *b as f32);
        planes.y.push(0.299 * r + 0.587 * g + 0.114 * b);
        planes.cb.push(128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b);
        planes.cr.push(128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b);
    }

    planes
}

/// The luma plane alone, for codecs that never touch chroma.
pub fn luma(img: &RgbImage) -> Vec<f32> {
    img.pixels()
        .map(|Rgb([r, g, b])| 0.299 * *r as f32 + 0.587 * *g as f32 + 0.114 * *b as f32)
        .collect()
}

/// Recombines planes into an RGB image, clipping every sample to [0, 255].
pub fn to_rgb(planes: &Planes, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let i = (y * width + x) as usize;
        let (y, cb, cr) = (planes.y[i], planes.cb[i] - 128.0, planes.cr[i] - 128.0);

        let r = y + 1.402 * cr;
        let g = y - 0.344_136 * cb - 0.714_136 * cr;
        let b = y + 1.772 * cb;

        Rgb([clip(r), clip(g), clip(b)])
    })
}

fn clip(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
