//! Shared types and enums used across SPRITENORM.
//! Includes the background write mode (`BackgroundMode`) and the resampling
//! filter selection (`ResampleFilter`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the cleared background is written out.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum BackgroundMode {
    /// Fill the canvas with opaque near-white and save a 3-channel PNG.
    Opaque,
    /// Force background alpha to zero and save a 4-channel PNG.
    Transparent,
}

impl std::fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackgroundMode::Opaque => write!(f, "Opaque"),
            BackgroundMode::Transparent => write!(f, "Transparent"),
        }
    }
}

/// Convolution filter used for the final resample. Nearest-neighbor is
/// deliberately not offered; it reintroduces the aliasing the normalization
/// is meant to remove.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResampleFilter {
    Bilinear,
    CatmullRom,
    Lanczos3,
}

impl ResampleFilter {
    pub fn to_filter_type(self) -> fast_image_resize::FilterType {
        match self {
            ResampleFilter::Bilinear => fast_image_resize::FilterType::Bilinear,
            ResampleFilter::CatmullRom => fast_image_resize::FilterType::CatmullRom,
            ResampleFilter::Lanczos3 => fast_image_resize::FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Bilinear => write!(f, "Bilinear"),
            ResampleFilter::CatmullRom => write!(f, "CatmullRom"),
            ResampleFilter::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}
