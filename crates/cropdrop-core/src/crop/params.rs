use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

use super::geometry::{cropping_rect, EditorGeometry};

/// Render scale of the editor, always within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Zoom(f32);

impl Zoom {
    /// Clamp `value` into range. NaN falls back to the default zoom.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(DEFAULT_ZOOM)
        } else {
            Self(value.clamp(MIN_ZOOM, MAX_ZOOM))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl From<f32> for Zoom {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Zoom> for f32 {
    fn from(zoom: Zoom) -> Self {
        zoom.0
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

/// Centre of the visible window, normalised to the source image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Everything the user can adjust in the editor. Rotation is always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropParams {
    #[serde(default)]
    pub zoom: Zoom,
    #[serde(default)]
    pub position: Position,
}

impl CropParams {
    pub fn set_zoom(&mut self, value: f32) {
        self.zoom = Zoom::new(value);
    }

    /// Move the view by a pointer drag of `(dx, dy)` canvas pixels.
    ///
    /// Dragging right reveals more of the left side of the image. The new
    /// centre is derived from the clamped cropping rect, so dragging past an
    /// edge does not accumulate.
    pub fn pan(&mut self, dx: f32, dy: f32, image_size: (u32, u32), geometry: &EditorGeometry) {
        let (fit_w, fit_h) = geometry.fitted_size(image_size.0, image_size.1);
        let scale = self.zoom.get();
        if fit_w <= 0.0 || fit_h <= 0.0 {
            return;
        }

        let rect = cropping_rect(image_size.0, image_size.1, self, geometry);
        self.position = Position {
            x: rect.x + rect.width / 2.0 - dx / (fit_w * scale),
            y: rect.y + rect.height / 2.0 - dy / (fit_h * scale),
        };
    }
}
