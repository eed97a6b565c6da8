use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatermarkError {
    /// Represents a file whose extension maps to no supported raster format
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid image file, for example a broken PNG
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an image with zero width or height
    #[error("Image has invalid dimensions {0}x{1}")]
    EmptyImage(u32, u32),

    /// Represents a host image too small to carry a single 8x8 coefficient block
    #[error("Host image of {width}x{height} is smaller than one 8x8 block")]
    HostTooSmall { width: u32, height: u32 },

    /// Represents an embedding strength outside of the supported interval
    #[error("Embedding strength alpha {0} is outside of [0.01, 0.2]")]
    AlphaOutOfRange(f32),

    /// Represents two images that were expected to share dimensions but do not.
    /// This indicates a programming error, both codecs resample before use.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Represents an unknown method selector passed by the caller
    #[error("Unknown watermarking method: {0}")]
    UnknownMethod(String),

    /// Represents an embedding strength that is not a number
    #[error("Embedding strength alpha is not a number: {0}")]
    InvalidAlpha(String),

    #[error("No host image set")]
    HostNotSet,

    #[error("No watermark image set")]
    WatermarkNotSet,

    #[error("No watermarked input image set")]
    MarkedNotSet,

    #[error("No target file set")]
    TargetNotSet,

    /// DCT extraction is non-blind and cannot run without the original host
    #[error("DCT extraction requires the original host image as reference")]
    ReferenceNotSet,

    /// Represents a failure when encoding an image file
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
