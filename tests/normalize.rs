mod common;

use common::synthetic_sprite::{mean_abs_diff, rgb_with_rect, rgba_with_rect, white_rgb};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba};
use spritenorm::core::processing::canvas::center_rgb_on_square;
use spritenorm::{
    BackgroundMode, NormalizeOutcome, NormalizeParams, normalize_file, normalize_to_buffer,
};

fn assert_channels_close(actual: [u8; 3], expected: [u8; 3], tolerance: u8) {
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            a.abs_diff(e) <= tolerance,
            "channel {a} not within {tolerance} of {e} (pixel {actual:?} vs {expected:?})"
        );
    }
}

#[test]
fn centering_offsets_follow_floor_division() {
    // cw=40, ch=100 -> side 100, horizontal offset 30, vertical offset 0
    let content = RgbImage::from_pixel(40, 100, Rgb([10, 20, 30]));
    let canvas = center_rgb_on_square(&content, Rgb([255, 255, 255]));

    assert_eq!(canvas.dimensions(), (100, 100));
    assert_eq!(*canvas.get_pixel(29, 50), Rgb([255, 255, 255]));
    assert_eq!(*canvas.get_pixel(30, 50), Rgb([10, 20, 30]));
    assert_eq!(*canvas.get_pixel(69, 50), Rgb([10, 20, 30]));
    assert_eq!(*canvas.get_pixel(70, 50), Rgb([255, 255, 255]));
    assert_eq!(*canvas.get_pixel(50, 0), Rgb([10, 20, 30]));
    assert_eq!(*canvas.get_pixel(50, 99), Rgb([10, 20, 30]));
}

#[test]
fn output_is_always_target_size() {
    let params = NormalizeParams::default();
    for (w, h) in [(512, 300), (64, 64), (200, 900), (1024, 96)] {
        let img = rgb_with_rect(w, h, w / 4, h / 4, w / 2, h / 2, Rgb([200, 30, 30]));
        let out = normalize_to_buffer(DynamicImage::ImageRgb8(img), &params)
            .unwrap()
            .expect("content should be found");
        assert_eq!(out.dimensions(), (512, 512), "input {w}x{h}");
    }
}

#[test]
fn centered_red_square_scales_to_full_output() {
    // 512x300 white with a centered red 100x100 square: the crop is exactly
    // the square, so the output is solid red at 512x512.
    let img = rgb_with_rect(512, 300, 206, 100, 306, 200, Rgb([255, 0, 0]));
    let out = normalize_to_buffer(DynamicImage::ImageRgb8(img), &NormalizeParams::default())
        .unwrap()
        .expect("content should be found");

    assert_eq!(out.dimensions(), (512, 512));
    let rgb = out.to_rgb8();
    for (x, y) in [(0, 0), (511, 511), (256, 256), (5, 500)] {
        assert_channels_close(rgb.get_pixel(x, y).0, [255, 0, 0], 2);
    }
}

#[test]
fn no_content_returns_none_in_memory() {
    let out = normalize_to_buffer(
        DynamicImage::ImageRgb8(white_rgb(32, 32)),
        &NormalizeParams::default(),
    )
    .unwrap();
    assert!(out.is_none());
}

#[test]
fn no_content_file_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    white_rgb(32, 32).save(&path).unwrap();
    let before = std::fs::read(&path).unwrap();

    let outcome = normalize_file(&path, &NormalizeParams::default()).unwrap();
    assert_eq!(outcome, NormalizeOutcome::NoContent);
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn normalize_overwrites_source_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    rgb_with_rect(300, 200, 30, 40, 130, 90, Rgb([20, 60, 140]))
        .save(&path)
        .unwrap();

    let outcome = normalize_file(&path, &NormalizeParams::default()).unwrap();
    match outcome {
        NormalizeOutcome::Normalized { bbox, width, height } => {
            assert_eq!((bbox.left, bbox.top, bbox.right, bbox.bottom), (30, 40, 130, 90));
            assert_eq!((width, height), (512, 512));
        }
        NormalizeOutcome::NoContent => panic!("expected content"),
    }

    let reloaded = image::open(&path).unwrap();
    assert_eq!(reloaded.dimensions(), (512, 512));
}

#[test]
fn missing_file_is_an_error() {
    assert!(normalize_file(std::path::Path::new("/no/such/sprite.png"), &NormalizeParams::default()).is_err());
}

#[test]
fn normalize_is_idempotent_up_to_resampling_rounding() {
    let img = rgb_with_rect(300, 300, 50, 100, 250, 200, Rgb([180, 30, 30]));
    let params = NormalizeParams::default();

    let first = normalize_to_buffer(DynamicImage::ImageRgb8(img), &params)
        .unwrap()
        .expect("content should be found")
        .to_rgb8();
    let second = normalize_to_buffer(DynamicImage::ImageRgb8(first.clone()), &params)
        .unwrap()
        .expect("content should survive a second pass")
        .to_rgb8();

    assert_eq!(first.dimensions(), second.dimensions());
    assert!(
        mean_abs_diff(&first, &second) < 3.0,
        "second pass drifted: mean abs diff {}",
        mean_abs_diff(&first, &second)
    );
    // the subject stays in the middle
    assert_channels_close(second.get_pixel(256, 256).0, [180, 30, 30], 8);
}

#[test]
fn transparent_mode_outputs_rgba_with_cleared_background() {
    let img = rgba_with_rect(200, 150, 50, 50, 150, 100, Rgba([50, 40, 30, 255]));
    let params = NormalizeParams {
        background: BackgroundMode::Transparent,
        ..Default::default()
    };

    let out = normalize_to_buffer(DynamicImage::ImageRgba8(img), &params)
        .unwrap()
        .expect("content should be found");
    assert_eq!(out.color(), image::ColorType::Rgba8);
    assert_eq!(out.dimensions(), (512, 512));

    let rgba = out.to_rgba8();
    // fill areas stay fully transparent, the subject stays opaque
    assert_eq!(rgba.get_pixel(0, 0).0[3], 0);
    assert_eq!(rgba.get_pixel(511, 0).0[3], 0);
    assert_eq!(rgba.get_pixel(256, 256).0[3], 255);
    assert_channels_close(
        [
            rgba.get_pixel(256, 256).0[0],
            rgba.get_pixel(256, 256).0[1],
            rgba.get_pixel(256, 256).0[2],
        ],
        [50, 40, 30],
        2,
    );
}

#[test]
fn keep_original_size_skips_resampling() {
    // size: None keeps the padded canvas at the content's longer side
    let img = rgb_with_rect(300, 300, 50, 100, 250, 200, Rgb([180, 30, 30]));
    let params = NormalizeParams {
        size: None,
        ..Default::default()
    };

    let out = normalize_to_buffer(DynamicImage::ImageRgb8(img), &params)
        .unwrap()
        .expect("content should be found");
    assert_eq!(out.dimensions(), (200, 200));

    let rgb = out.to_rgb8();
    // 200x100 content band centered vertically: rows 50..150
    assert_eq!(*rgb.get_pixel(100, 49), Rgb([255, 255, 255]));
    assert_eq!(*rgb.get_pixel(100, 50), Rgb([180, 30, 30]));
    assert_eq!(*rgb.get_pixel(100, 149), Rgb([180, 30, 30]));
    assert_eq!(*rgb.get_pixel(100, 150), Rgb([255, 255, 255]));
}
