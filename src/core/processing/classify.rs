use image::{Rgba, RgbaImage};

/// A pixel is background when every color channel exceeds `threshold`.
/// Pure and position-independent; alpha is ignored.
pub fn is_background(rgb: [u8; 3], threshold: u8) -> bool {
    rgb[0] > threshold && rgb[1] > threshold && rgb[2] > threshold
}

/// Rewrite every background pixel to a fully transparent pixel with the
/// same RGB value. After this pass, content is whatever still carries
/// nonzero alpha. Returns the number of pixels cleared.
pub fn clear_background(img: &mut RgbaImage, threshold: u8) -> u64 {
    let mut cleared = 0;
    for pixel in img.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if is_background([r, g, b], threshold) {
            *pixel = Rgba([r, g, b, 0]);
            cleared += 1;
        }
    }
    cleared
}
