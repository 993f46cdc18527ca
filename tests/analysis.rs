mod common;

use common::synthetic_sprite::{rgb_with_rect, white_rgb};
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use spritenorm::analysis::{corner_sample, pixel_histogram, reference_diff_bbox};
use spritenorm::core::processing::bbox::{BoundingBox, compute_bbox};

#[test]
fn corner_sample_reads_the_top_left_pixel() {
    let mut img = white_rgb(8, 8);
    img.put_pixel(0, 0, Rgb([12, 34, 56]));

    let px = corner_sample(&DynamicImage::ImageRgb8(img));
    assert_eq!(px, Rgba([12, 34, 56, 255]));
}

#[test]
fn histogram_ranks_by_count_then_first_encounter() {
    // raster order: B, A, A, C -- A wins on count, B beats C on first encounter
    let a = Rgb([1, 1, 1]);
    let b = Rgb([2, 2, 2]);
    let c = Rgb([3, 3, 3]);
    let mut img = RgbImage::new(2, 2);
    img.put_pixel(0, 0, b);
    img.put_pixel(1, 0, a);
    img.put_pixel(0, 1, a);
    img.put_pixel(1, 1, c);

    let ranked = pixel_histogram(&DynamicImage::ImageRgb8(img), 10);
    assert_eq!(
        ranked,
        vec![
            (Rgba([1, 1, 1, 255]), 2),
            (Rgba([2, 2, 2, 255]), 1),
            (Rgba([3, 3, 3, 255]), 1),
        ]
    );
}

#[test]
fn histogram_truncates_to_top_n() {
    let img = rgb_with_rect(16, 16, 4, 4, 8, 8, Rgb([9, 9, 9]));
    let ranked = pixel_histogram(&DynamicImage::ImageRgb8(img), 1);
    assert_eq!(ranked, vec![(Rgba([255, 255, 255, 255]), 240)]);
}

#[test]
fn diff_report_finds_content_against_nonwhite_reference() {
    let mut img = RgbImage::from_pixel(12, 10, Rgb([100, 100, 100]));
    for y in 3..7 {
        for x in 2..6 {
            img.put_pixel(x, y, Rgb([200, 0, 0]));
        }
    }

    let bbox = reference_diff_bbox(&DynamicImage::ImageRgb8(img), Rgb([100, 100, 100]));
    assert_eq!(
        bbox,
        Some(BoundingBox {
            left: 2,
            top: 3,
            right: 6,
            bottom: 7
        })
    );
}

#[test]
fn diff_report_agrees_with_threshold_classification_on_white() {
    let img = rgb_with_rect(30, 30, 5, 6, 20, 21, Rgb([40, 90, 160]));
    assert_eq!(
        reference_diff_bbox(&DynamicImage::ImageRgb8(img.clone()), Rgb([255, 255, 255])),
        compute_bbox(&img, 245)
    );
}

#[test]
fn diff_report_is_none_for_solid_reference_image() {
    let img = RgbImage::from_pixel(6, 6, Rgb([255, 255, 255]));
    assert!(reference_diff_bbox(&DynamicImage::ImageRgb8(img), Rgb([255, 255, 255])).is_none());
}
