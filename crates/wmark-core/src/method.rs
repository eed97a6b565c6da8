//! Watermarking method selection.

use std::fmt;
use std::str::FromStr;

use crate::error::WatermarkError;

/// The two interchangeable watermarking schemes.
///
/// `Lsb` is blind (extraction needs only the watermarked image),
/// `Dct` is non-blind (extraction needs the original host as reference).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    #[default]
    Lsb,
    Dct,
}

impl FromStr for Method {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lsb" => Ok(Method::Lsb),
            "dct" => Ok(Method::Dct),
            _ => Err(WatermarkError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Lsb => write!(f, "lsb"),
            Method::Dct => write!(f, "dct"),
        }
    }
}
