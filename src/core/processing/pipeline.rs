use image::{Rgb, RgbImage, Rgba, RgbaImage};
use tracing::info;

use crate::core::params::NormalizeParams;
use crate::core::processing::bbox::{BoundingBox, compute_alpha_bbox, compute_bbox};
use crate::core::processing::canvas::{
    center_rgb_on_square, center_rgba_on_square, crop_rgb, crop_rgba,
};
use crate::core::processing::classify::clear_background;
use crate::core::processing::resize::{resize_rgb_image, resize_rgba_image};

pub const OPAQUE_FILL: Rgb<u8> = Rgb([255, 255, 255]);
pub const TRANSPARENT_FILL: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Crop to content, center on a square near-white canvas, and resample.
/// Returns None when every pixel classifies as background.
pub fn normalize_rgb(
    img: RgbImage,
    params: &NormalizeParams,
) -> Result<Option<(RgbImage, BoundingBox)>, Box<dyn std::error::Error>> {
    let Some(bbox) = compute_bbox(&img, params.threshold) else {
        return Ok(None);
    };

    let canvas = center_rgb_on_square(&crop_rgb(&img, &bbox), OPAQUE_FILL);
    let out = match params.size {
        // Already at the requested side, skip resampling
        Some(size) if canvas.width() != size => {
            info!("Resizing {}x{} canvas to {}x{}", canvas.width(), canvas.height(), size, size);
            let data = resize_rgb_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                size,
                size,
                params.filter,
            )?;
            RgbImage::from_raw(size, size, data).ok_or("resized buffer has unexpected length")?
        }
        _ => canvas,
    };

    Ok(Some((out, bbox)))
}

/// Transparency variant: background pixels are first rewritten to alpha
/// zero, then content is whatever still carries nonzero alpha. Otherwise
/// identical to `normalize_rgb`.
pub fn normalize_rgba(
    mut img: RgbaImage,
    params: &NormalizeParams,
) -> Result<Option<(RgbaImage, BoundingBox)>, Box<dyn std::error::Error>> {
    let cleared = clear_background(&mut img, params.threshold);
    info!("Cleared {} background pixels", cleared);

    let Some(bbox) = compute_alpha_bbox(&img) else {
        return Ok(None);
    };

    let canvas = center_rgba_on_square(&crop_rgba(&img, &bbox), TRANSPARENT_FILL);
    let out = match params.size {
        Some(size) if canvas.width() != size => {
            info!("Resizing {}x{} canvas to {}x{}", canvas.width(), canvas.height(), size, size);
            let data = resize_rgba_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                size,
                size,
                params.filter,
            )?;
            RgbaImage::from_raw(size, size, data).ok_or("resized buffer has unexpected length")?
        }
        _ => canvas,
    };

    Ok(Some((out, bbox)))
}
