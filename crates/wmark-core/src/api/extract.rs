use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::media::image::{Extractor, ImageExtractor};
use crate::media::{load_image, Persist};
use crate::method::Method;
use crate::{Result, WatermarkError};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

/// Collects the watermarked input, the optional reference host and the
/// destination, then recovers the watermark bitmap and persists it.
#[derive(Debug)]
pub struct ExtractApi {
    marked: Option<PathBuf>,
    reference: Option<PathBuf>,
    output: Option<PathBuf>,
    method: Method,
    alpha: f32,
}

impl Default for ExtractApi {
    fn default() -> Self {
        Self {
            marked: None,
            reference: None,
            output: None,
            method: Method::default(),
            alpha: crate::commands::DEFAULT_ALPHA,
        }
    }
}

impl ExtractApi {
    pub fn with_marked<A: AsRef<Path>>(mut self, marked: A) -> Self {
        self.marked = Some(marked.as_ref().to_path_buf());
        self
    }

    /// Set the original, unwatermarked host image. Required by
    /// [`Method::Dct`], ignored by the blind [`Method::Lsb`].
    pub fn with_reference<A: AsRef<Path>>(mut self, reference: A) -> Self {
        self.reference = Some(reference.as_ref().to_path_buf());
        self
    }

    /// Set the reference host, if any
    pub fn use_reference<A: AsRef<Path>>(mut self, reference: Option<A>) -> Self {
        self.reference = reference.map(|r| r.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn use_alpha(mut self, alpha: Option<f32>) -> Self {
        if let Some(alpha) = alpha {
            self.alpha = alpha;
        }
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(marked) = self.marked else {
            return Err(WatermarkError::MarkedNotSet);
        };
        let Some(output) = self.output else {
            return Err(WatermarkError::TargetNotSet);
        };

        let extractor = Extractor::for_method(self.method, self.alpha)?;
        let marked = load_image(&marked)?;
        let reference = match self.reference {
            Some(path) => Some(load_image(&path)?),
            None => None,
        };

        let bitmap = extractor.extract(&marked, reference.as_ref())?;
        DynamicImage::ImageLuma8(bitmap).save_as(&output)
    }
}
