//! Loading and persisting of raster image media.

pub mod image;

use std::path::Path;

use ::image::{DynamicImage, ImageFormat};
use log::error;

use crate::error::WatermarkError;
use crate::result::Result;

/// Loads a raster image from a PNG, JPEG or BMP file.
///
/// Fails with [`WatermarkError::UnsupportedMedia`] for any other extension,
/// [`WatermarkError::InvalidImageMedia`] for unreadable or undecodable data
/// and [`WatermarkError::EmptyImage`] for zero width or height.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    supported_format(path)?;

    let img = ::image::open(path).map_err(|e| {
        error!("Error decoding image {path:?}: {e}");
        WatermarkError::InvalidImageMedia
    })?;

    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(WatermarkError::EmptyImage(width, height));
    }

    Ok(img)
}

pub trait Persist {
    fn save_as(&self, _: &Path) -> Result<()>;
}

impl Persist for DynamicImage {
    /// Encodes the image into the format implied by the target extension.
    ///
    /// The encoder writes into a temporary file next to the target and the
    /// result is persisted by rename, so a failed encode leaves no partial
    /// output file behind.
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = supported_format(file)?;
        let dir = match file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut staged =
            tempfile::NamedTempFile::new_in(dir).map_err(|source| WatermarkError::WriteError { source })?;
        self.write_to(&mut staged, format).map_err(|e| {
            error!("Error encoding image {file:?}: {e}");
            WatermarkError::ImageEncodingError
        })?;
        staged.persist(file).map_err(|e| WatermarkError::WriteError { source: e.error })?;

        Ok(())
    }
}

fn supported_format(path: &Path) -> Result<ImageFormat> {
    if path.as_os_str().is_empty() {
        return Err(WatermarkError::UnsupportedMedia);
    }
    match ImageFormat::from_path(path) {
        Ok(f @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp)) => Ok(f),
        _ => Err(WatermarkError::UnsupportedMedia),
    }
}
