/// Width of the editor canvas in pixels, excluding the border.
pub const EDITOR_WIDTH: u32 = 250;

/// Height of the editor canvas in pixels, excluding the border.
pub const EDITOR_HEIGHT: u32 = 250;

/// Width of the translucent border drawn around the editor canvas.
pub const EDITOR_BORDER: u32 = 25;

/// Mask colour over the border and the area outside the rounded cut-out (RGBA, alpha in 0..1).
pub const EDITOR_MASK_COLOR: [f32; 4] = [255.0, 255.0, 255.0, 0.6];

/// Lower bound of the zoom slider.
pub const MIN_ZOOM: f32 = 0.1;

/// Upper bound of the zoom slider.
pub const MAX_ZOOM: f32 = 2.0;

/// Slider increment.
pub const ZOOM_STEP: f32 = 0.01;

pub const DEFAULT_ZOOM: f32 = 1.0;

/// Corner radius of the mask cut-out. 150 on a 250px canvas gives a circle.
pub const DEFAULT_BORDER_RADIUS: u32 = 150;

pub const DEFAULT_SUBMIT_TEXT: &str = "Crop Picture";

/// MIME types accepted by the drop surface.
pub const ACCEPTED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// File extensions accepted by the drop surface (lowercase, no dot).
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Largest rendered crop, in bytes of RGBA pixels. Zooming out pads the
/// canvas with transparency, so the output can be far larger than the source.
/// Matches the decoder's default `image::Limits::max_alloc`.
pub const MAX_RENDER_BYTES: u64 = 512 * 1024 * 1024;

/// MIME type of the uploaded blob.
pub const UPLOAD_MIME_TYPE: &str = "image/png";

/// Default HTTP upload timeout.
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Fallback message when an upload failure carries no text of its own.
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed";
