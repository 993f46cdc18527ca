use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::core::params::NormalizeParams;
use crate::core::processing::bbox::BoundingBox;
use crate::core::processing::pipeline::{normalize_rgb, normalize_rgba};
use crate::types::BackgroundMode;

/// Result of normalizing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// The file was rewritten in place.
    Normalized {
        /// Content rectangle found in the source image
        bbox: BoundingBox,
        width: u32,
        height: u32,
    },
    /// Every pixel classified as background; the file was left untouched.
    NoContent,
}

/// Run the normalization pipeline for the configured background mode and
/// overwrite `output` as PNG. The no-content case writes nothing and is
/// reported distinctly.
pub fn save_normalized_png(
    img: DynamicImage,
    output: &Path,
    params: &NormalizeParams,
) -> Result<NormalizeOutcome, Box<dyn std::error::Error>> {
    match params.background {
        BackgroundMode::Opaque => match normalize_rgb(img.into_rgb8(), params)? {
            Some((out, bbox)) => {
                out.save_with_format(output, ImageFormat::Png)?;
                info!("Saved {}x{} RGB PNG: {:?}", out.width(), out.height(), output);
                Ok(NormalizeOutcome::Normalized {
                    bbox,
                    width: out.width(),
                    height: out.height(),
                })
            }
            None => Ok(NormalizeOutcome::NoContent),
        },
        BackgroundMode::Transparent => match normalize_rgba(img.into_rgba8(), params)? {
            Some((out, bbox)) => {
                out.save_with_format(output, ImageFormat::Png)?;
                info!("Saved {}x{} RGBA PNG: {:?}", out.width(), out.height(), output);
                Ok(NormalizeOutcome::Normalized {
                    bbox,
                    width: out.width(),
                    height: out.height(),
                })
            }
            None => Ok(NormalizeOutcome::NoContent),
        },
    }
}
