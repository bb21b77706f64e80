use image::DynamicImage;

/// Longest edge of the preview texture.
const MAX_PREVIEW_EDGE: u32 = 2048;

/// Convert a decoded image to an egui ColorImage, downscaled for preview.
pub fn preview_color_image(img: &DynamicImage) -> egui::ColorImage {
    let preview = if img.width() > MAX_PREVIEW_EDGE || img.height() > MAX_PREVIEW_EDGE {
        img.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
    } else {
        img.clone()
    };

    let rgba = preview.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice())
}
