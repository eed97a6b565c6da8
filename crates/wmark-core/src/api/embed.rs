use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::media::image::{Embedder, ImageEmbedder};
use crate::media::{load_image, Persist};
use crate::method::Method;
use crate::{Result, WatermarkError};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

/// Collects host, watermark, method and strength, then runs the embedding
/// and persists the result. No output file is created unless every step
/// before it succeeded.
#[derive(Debug)]
pub struct EmbedApi {
    host: Option<PathBuf>,
    watermark: Option<PathBuf>,
    output: Option<PathBuf>,
    method: Method,
    alpha: f32,
}

impl Default for EmbedApi {
    fn default() -> Self {
        Self {
            host: None,
            watermark: None,
            output: None,
            method: Method::default(),
            alpha: crate::commands::DEFAULT_ALPHA,
        }
    }
}

impl EmbedApi {
    pub fn with_host<A: AsRef<Path>>(mut self, host: A) -> Self {
        self.host = Some(host.as_ref().to_path_buf());
        self
    }

    pub fn with_watermark<A: AsRef<Path>>(mut self, watermark: A) -> Self {
        self.watermark = Some(watermark.as_ref().to_path_buf());
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

    /// Set the embedding strength, only meaningful for [`Method::Dct`]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the embedding strength, keeping the default when `None` is passed
    pub fn use_alpha(mut self, alpha: Option<f32>) -> Self {
        if let Some(alpha) = alpha {
            self.alpha = alpha;
        }
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(host) = self.host else {
            return Err(WatermarkError::HostNotSet);
        };
        let Some(watermark) = self.watermark else {
            return Err(WatermarkError::WatermarkNotSet);
        };
        let Some(output) = self.output else {
            return Err(WatermarkError::TargetNotSet);
        };

        let embedder = Embedder::for_method(self.method, self.alpha)?;
        let host = load_image(&host)?;
        let watermark = load_image(&watermark)?;

        let marked = embedder.embed(&host, &watermark)?;
        DynamicImage::ImageRgb8(marked).save_as(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_fail_before_any_io() {
        assert!(matches!(
            prepare().execute(),
            Err(WatermarkError::HostNotSet)
        ));
        assert!(matches!(
            prepare().with_host("h.png").execute(),
            Err(WatermarkError::WatermarkNotSet)
        ));
        assert!(matches!(
            prepare().with_host("h.png").with_watermark("w.png").execute(),
            Err(WatermarkError::TargetNotSet)
        ));
    }

    #[test]
    fn alpha_is_validated_before_loading_images() {
        let err = prepare()
            .with_host("does-not-exist.png")
            .with_watermark("does-not-exist.png")
            .with_output("/tmp/out.png")
            .with_method(Method::Dct)
            .with_alpha(0.9)
            .execute()
            .unwrap_err();
        assert!(matches!(err, WatermarkError::AlphaOutOfRange(_)));
    }
}
