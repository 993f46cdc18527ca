//! Read-only inspection helpers used to choose thresholds empirically:
//! corner sampling, pixel-frequency histograms, and a difference-based
//! bounding-box report. None of these mutate files.
use std::collections::HashMap;

use image::{DynamicImage, GenericImageView, Rgb, Rgba};

use crate::core::processing::bbox::{BoundingBox, compute_diff_bbox};

/// Channel values of the pixel at (0, 0), the cheapest probe for whether a
/// background is pure white or off-white.
pub fn corner_sample(img: &DynamicImage) -> Rgba<u8> {
    img.get_pixel(0, 0)
}

/// Occurrences of every distinct pixel value, most frequent first. Ties
/// keep first-encountered order. At most `top` entries are returned.
pub fn pixel_histogram(img: &DynamicImage, top: usize) -> Vec<(Rgba<u8>, u64)> {
    let rgba = img.to_rgba8();

    let mut counts: HashMap<[u8; 4], (u64, usize)> = HashMap::new();
    let mut order = 0usize;
    for pixel in rgba.pixels() {
        let entry = counts.entry(pixel.0).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut ranked: Vec<([u8; 4], (u64, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));
    ranked
        .into_iter()
        .take(top)
        .map(|(px, (count, _))| (Rgba(px), count))
        .collect()
}

/// Content rectangle derived by pixel-wise difference against a solid
/// `reference` color, or None when the whole image matches it.
pub fn reference_diff_bbox(img: &DynamicImage, reference: Rgb<u8>) -> Option<BoundingBox> {
    compute_diff_bbox(&img.to_rgb8(), reference)
}
