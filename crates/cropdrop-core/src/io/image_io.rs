use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{CropDropError, Result};

/// Decode a PNG or JPEG from memory.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(CropDropError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }
    Ok(img)
}

/// Encode an RGBA canvas as PNG bytes, ready for upload.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
