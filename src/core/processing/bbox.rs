use image::{Rgb, RgbImage, RgbaImage};

use crate::core::processing::classify::is_background;

/// Minimal axis-aligned rectangle enclosing all content pixels.
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

fn scan_content(
    width: u32,
    height: u32,
    mut is_content: impl FnMut(u32, u32) -> bool,
) -> Option<BoundingBox> {
    let (mut left, mut top) = (u32::MAX, u32::MAX);
    let (mut right, mut bottom) = (0u32, 0u32);
    let mut found = false;

    for y in 0..height {
        for x in 0..width {
            if is_content(x, y) {
                found = true;
                left = left.min(x);
                top = top.min(y);
                right = right.max(x + 1);
                bottom = bottom.max(y + 1);
            }
        }
    }

    found.then_some(BoundingBox { left, top, right, bottom })
}

/// Scan every pixel with the brightness predicate and return the minimal
/// rectangle covering all content pixels, or None for an image that is
/// entirely background.
pub fn compute_bbox(img: &RgbImage, threshold: u8) -> Option<BoundingBox> {
    scan_content(img.width(), img.height(), |x, y| {
        !is_background(img.get_pixel(x, y).0, threshold)
    })
}

/// Bounding box of pixels carrying nonzero alpha. Used after the
/// transparency rewrite, where the alpha channel alone separates content
/// from background.
pub fn compute_alpha_bbox(img: &RgbaImage) -> Option<BoundingBox> {
    scan_content(img.width(), img.height(), |x, y| img.get_pixel(x, y).0[3] != 0)
}

/// Bounding box of pixels differing from a solid reference color. A second,
/// independent derivation of the content rectangle; agrees with
/// `compute_bbox` when the reference equals the threshold's implied
/// background color.
pub fn compute_diff_bbox(img: &RgbImage, reference: Rgb<u8>) -> Option<BoundingBox> {
    scan_content(img.width(), img.height(), |x, y| *img.get_pixel(x, y) != reference)
}
