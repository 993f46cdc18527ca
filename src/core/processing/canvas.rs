use image::{Rgb, RgbImage, Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::processing::bbox::BoundingBox;

pub fn crop_rgb(img: &RgbImage, bbox: &BoundingBox) -> RgbImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

pub fn crop_rgba(img: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Paste `cropped` centered on a freshly allocated square canvas filled
/// with `fill`. The canvas side is the longer of the content sides; offsets
/// use integer floor division.
pub fn center_rgb_on_square(cropped: &RgbImage, fill: Rgb<u8>) -> RgbImage {
    let (cw, ch) = cropped.dimensions();
    let side = cw.max(ch);
    let pad_left = (side - cw) / 2;
    let pad_top = (side - ch) / 2;

    debug!(
        "Centering {}x{} content on {}x{} canvas: pad_left={}, pad_top={}",
        cw, ch, side, side, pad_left, pad_top
    );

    let mut canvas = RgbImage::from_pixel(side, side, fill);
    imageops::replace(&mut canvas, cropped, pad_left as i64, pad_top as i64);
    canvas
}

pub fn center_rgba_on_square(cropped: &RgbaImage, fill: Rgba<u8>) -> RgbaImage {
    let (cw, ch) = cropped.dimensions();
    let side = cw.max(ch);
    let pad_left = (side - cw) / 2;
    let pad_top = (side - ch) / 2;

    debug!(
        "Centering {}x{} content on {}x{} canvas: pad_left={}, pad_top={}",
        cw, ch, side, side, pad_left, pad_top
    );

    let mut canvas = RgbaImage::from_pixel(side, side, fill);
    imageops::replace(&mut canvas, cropped, pad_left as i64, pad_top as i64);
    canvas
}
