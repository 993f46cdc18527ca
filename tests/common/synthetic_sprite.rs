use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Solid white RGB image.
pub fn white_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

/// Solid opaque-white RGBA image.
pub fn white_rgba(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
}

/// White RGB image with a solid `color` rectangle; `right`/`bottom` exclusive.
pub fn rgb_with_rect(
    width: u32,
    height: u32,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    color: Rgb<u8>,
) -> RgbImage {
    let mut img = white_rgb(width, height);
    for y in top..bottom {
        for x in left..right {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// Opaque-white RGBA image with a solid `color` rectangle; `right`/`bottom` exclusive.
pub fn rgba_with_rect(
    width: u32,
    height: u32,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
    color: Rgba<u8>,
) -> RgbaImage {
    let mut img = white_rgba(width, height);
    for y in top..bottom {
        for x in left..right {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// Mean absolute per-channel difference between two same-sized RGB images.
pub fn mean_abs_diff(a: &RgbImage, b: &RgbImage) -> f64 {
    assert_eq!(a.dimensions(), b.dimensions());
    let total: u64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| (x as i64 - y as i64).unsigned_abs())
        .sum();
    total as f64 / a.as_raw().len() as f64
}
