use image::{imageops, DynamicImage, RgbaImage};

use crate::consts::MAX_RENDER_BYTES;
use crate::error::{CropDropError, Result};
use crate::io::image_io::{decode_image, encode_png};

use super::geometry::{cropping_rect, EditorGeometry};
use super::params::CropParams;

/// Render the visible region at full source resolution.
///
/// Pixels outside the source image stay transparent. The editor mask is a
/// preview affordance and is not applied here. Crops whose canvas would
/// exceed [`MAX_RENDER_BYTES`] fail before anything is allocated.
pub fn render_crop(
    image: &DynamicImage,
    params: &CropParams,
    geometry: &EditorGeometry,
) -> Result<RgbaImage> {
    let (src_w, src_h) = (image.width(), image.height());
    let rect = cropping_rect(src_w, src_h, params, geometry);
    let (x, y, w, h) = rect.to_pixels(src_w, src_h);

    let out_w = w.round() as u32;
    let out_h = h.round() as u32;
    if out_w == 0 || out_h == 0 {
        return Err(CropDropError::EmptyCrop);
    }
    if u64::from(out_w) * u64::from(out_h) * 4 > MAX_RENDER_BYTES {
        return Err(CropDropError::CropTooLarge {
            width: out_w,
            height: out_h,
        });
    }

    let mut canvas = RgbaImage::new(out_w, out_h);
    let source = image.to_rgba8();
    imageops::replace(&mut canvas, &source, -(x.round() as i64), -(y.round() as i64));
    Ok(canvas)
}

/// Decode the selected file, render the crop and encode it as a PNG blob.
pub fn render_blob(bytes: &[u8], params: &CropParams, geometry: &EditorGeometry) -> Result<Vec<u8>> {
    let image = decode_image(bytes)?;
    let canvas = render_crop(&image, params, geometry)?;
    encode_png(&canvas)
}
