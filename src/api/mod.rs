//! High-level, ergonomic library API: normalize single sprites in place,
//! batch over explicit path lists or a scanned directory, or transform
//! in memory. Prefer these entrypoints over the low-level processing
//! modules when embedding spritenorm.
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{info, warn};

use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::{normalize_rgb, normalize_rgba};
use crate::core::processing::save::{NormalizeOutcome, save_normalized_png};
use crate::error::{Error, Result};
use crate::io::png::{list_png_files, open_image};
use crate::types::BackgroundMode;

/// Normalize one sprite, overwriting the source file in place. The
/// no-content case leaves the file untouched and is reported distinctly.
pub fn normalize_file(path: &Path, params: &NormalizeParams) -> Result<NormalizeOutcome> {
    let img = open_image(path)?;
    save_normalized_png(img, path, params).map_err(Error::external)
}

/// Normalize in memory without touching disk. Returns None when the image
/// is entirely background.
pub fn normalize_to_buffer(
    img: DynamicImage,
    params: &NormalizeParams,
) -> Result<Option<DynamicImage>> {
    match params.background {
        BackgroundMode::Opaque => Ok(normalize_rgb(img.into_rgb8(), params)
            .map_err(Error::external)?
            .map(|(out, _)| DynamicImage::ImageRgb8(out))),
        BackgroundMode::Transparent => Ok(normalize_rgba(img.into_rgba8(), params)
            .map_err(Error::external)?
            .map(|(out, _)| DynamicImage::ImageRgba8(out))),
    }
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Normalize an explicit list of paths, each overwritten in place.
/// If `continue_on_error` is true, per-file failures are logged in the
/// report and processing continues; otherwise, the first error is returned.
pub fn normalize_paths(
    paths: &[PathBuf],
    params: &NormalizeParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in paths {
        match normalize_file(path, params) {
            Ok(NormalizeOutcome::Normalized { bbox, width, height }) => {
                info!("Normalized {:?}: content {} -> {}x{}", path, bbox, width, height);
                report.processed += 1;
            }
            Ok(NormalizeOutcome::NoContent) => {
                info!("No content found in {:?}, skipping", path);
                report.skipped += 1;
            }
            Err(e) => {
                report.errors += 1;
                if continue_on_error {
                    warn!("Error processing {:?}: {}", path, e);
                } else {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}

/// Scan `input_dir` (non-recursive) for `.png` files and normalize each in
/// place.
pub fn normalize_directory(
    input_dir: &Path,
    params: &NormalizeParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let files = list_png_files(input_dir)?;
    info!("Found {} .png files in {:?}", files.len(), input_dir);
    normalize_paths(&files, params, continue_on_error)
}
