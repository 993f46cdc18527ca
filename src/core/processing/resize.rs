use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

use crate::types::ResampleFilter;

pub fn resize_rgb_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter.to_filter_type()));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    // Default ResizeOptions multiply and divide by alpha around the
    // convolution, so straight-alpha RGBA resizes without halos.
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter.to_filter_type()));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        data.to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}
