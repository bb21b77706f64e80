use crate::consts::{EDITOR_BORDER, EDITOR_HEIGHT, EDITOR_WIDTH};

use super::params::CropParams;

/// Fixed editor surface: canvas size plus the translucent border around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorGeometry {
    pub width: u32,
    pub height: u32,
    pub border: u32,
}

impl Default for EditorGeometry {
    fn default() -> Self {
        Self {
            width: EDITOR_WIDTH,
            height: EDITOR_HEIGHT,
            border: EDITOR_BORDER,
        }
    }
}

impl EditorGeometry {
    pub fn canvas_aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Canvas plus border on both sides.
    pub fn outer_size(&self) -> (u32, u32) {
        (self.width + 2 * self.border, self.height + 2 * self.border)
    }

    /// On-canvas size of the image at zoom 1: scaled so it covers the canvas.
    pub fn fitted_size(&self, image_w: u32, image_h: u32) -> (f32, f32) {
        if image_w == 0 || image_h == 0 {
            return (0.0, 0.0);
        }
        let image_aspect = image_w as f32 / image_h as f32;
        if image_aspect >= self.canvas_aspect() {
            let h = self.height as f32;
            (h * image_aspect, h)
        } else {
            let w = self.width as f32;
            (w, w / image_aspect)
        }
    }
}

/// Rectangle normalised to the source image (0..1 on both axes).
///
/// May extend past the image when zoomed out below 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormRect {
    /// Scale to source pixels: `(x, y, width, height)`.
    pub fn to_pixels(&self, image_w: u32, image_h: u32) -> (f32, f32, f32, f32) {
        let w = image_w as f32;
        let h = image_h as f32;
        (self.x * w, self.y * h, self.width * w, self.height * h)
    }

    /// Part of the rect that lies on the image, or `None` if disjoint.
    pub fn intersect_unit(&self) -> Option<NormRect> {
        let x0 = self.x.max(0.0);
        let y0 = self.y.max(0.0);
        let x1 = (self.x + self.width).min(1.0);
        let y1 = (self.y + self.height).min(1.0);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(NormRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

/// Region of the source image visible through the editor canvas.
pub fn cropping_rect(
    image_w: u32,
    image_h: u32,
    params: &CropParams,
    geometry: &EditorGeometry,
) -> NormRect {
    let canvas_aspect = geometry.canvas_aspect();
    let image_aspect = if image_h == 0 {
        canvas_aspect
    } else {
        image_w as f32 / image_h as f32
    };
    let x_scale = (canvas_aspect / image_aspect).min(1.0);
    let y_scale = (image_aspect / canvas_aspect).min(1.0);

    let scale = params.zoom.get();
    let width = x_scale / scale;
    let height = y_scale / scale;

    let x = params.position.x - width / 2.0;
    let y = params.position.y - height / 2.0;

    let (x_min, x_max, y_min, y_max) = if width > 1.0 || height > 1.0 {
        (-width, 1.0, -height, 1.0)
    } else {
        (0.0, 1.0 - width, 0.0, 1.0 - height)
    };

    NormRect {
        x: x.min(x_max).max(x_min),
        y: y.min(y_max).max(y_min),
        width,
        height,
    }
}
