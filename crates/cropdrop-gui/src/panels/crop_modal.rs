use cropdrop_core::consts::{EDITOR_MASK_COLOR, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use cropdrop_core::crop::geometry::{cropping_rect, EditorGeometry, NormRect};

use crate::app::CropDropApp;

/// Width of the zoom slider and confirm button.
const CONTROL_WIDTH: f32 = 300.0;

/// Large enough to cover the whole border from the cut-out edge.
const MASK_STROKE_WIDTH: f32 = 1000.0;

pub fn show(ctx: &egui::Context, app: &mut CropDropApp) {
    if !app.widget.is_cropping() {
        return;
    }

    let mut open = true;
    egui::Window::new("Crop picture")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                editor_canvas(ui, app);
                ui.add_space(30.0);
                zoom_slider(ui, app);
                ui.add_space(30.0);

                let uploading = app.widget.is_uploading();
                if uploading {
                    ui.add(egui::Spinner::new());
                }

                let button = egui::Button::new(app.widget.props().submit_text.as_str())
                    .min_size(egui::vec2(CONTROL_WIDTH, 0.0));
                if ui.add_enabled(!uploading, button).clicked() {
                    app.confirm_crop();
                }
            });
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    if !open || escape {
        app.cancel_crop();
    }
}

fn zoom_slider(ui: &mut egui::Ui, app: &mut CropDropApp) {
    let Some(session) = app.widget.session() else {
        return;
    };
    let mut zoom = session.params.zoom.get();

    ui.spacing_mut().slider_width = CONTROL_WIDTH;
    let slider = egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
        .step_by(ZOOM_STEP as f64)
        .show_value(false);
    if ui.add(slider).changed() {
        app.widget.set_zoom(zoom);
    }
}

fn editor_canvas(ui: &mut egui::Ui, app: &mut CropDropApp) {
    let geometry = *app.widget.geometry();
    let (outer_w, outer_h) = geometry.outer_size();
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(outer_w as f32, outer_h as f32), egui::Sense::drag());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(40));

    let border = geometry.border as f32;
    let canvas = rect.shrink(border);

    let editor = &app.ui_state.editor;
    match (editor.texture.as_ref(), editor.source_size) {
        (Some(texture), Some(size)) => {
            if response.dragged() && !app.widget.is_uploading() {
                let delta = response.drag_delta();
                app.widget.pan(delta.x, delta.y, size);
            }
            if let Some(session) = app.widget.session() {
                let crop = cropping_rect(size.0, size.1, &session.params, &geometry);
                draw_image(&painter, texture.id(), rect, outer_rect(&crop, &geometry));
            }
        }
        _ if editor.decode_error.is_some() => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Cannot preview this image",
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(200),
            );
        }
        _ => {
            ui.put(
                egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)),
                egui::Spinner::new(),
            );
        }
    }

    draw_mask(&painter, canvas, app.widget.props().border_radius);
}

/// Crop rect widened so it maps onto the canvas plus its border.
fn outer_rect(crop: &NormRect, geometry: &EditorGeometry) -> NormRect {
    let bx = crop.width * geometry.border as f32 / geometry.width as f32;
    let by = crop.height * geometry.border as f32 / geometry.height as f32;
    NormRect {
        x: crop.x - bx,
        y: crop.y - by,
        width: crop.width + 2.0 * bx,
        height: crop.height + 2.0 * by,
    }
}

/// Paint the part of the image visible through `view` into `screen`.
fn draw_image(painter: &egui::Painter, texture: egui::TextureId, screen: egui::Rect, view: NormRect) {
    let Some(visible) = view.intersect_unit() else {
        return;
    };

    let to_screen = |u: f32, v: f32| {
        screen.min
            + egui::vec2(
                (u - view.x) / view.width * screen.width(),
                (v - view.y) / view.height * screen.height(),
            )
    };
    let dst = egui::Rect::from_min_max(
        to_screen(visible.x, visible.y),
        to_screen(visible.x + visible.width, visible.y + visible.height),
    );
    let uv = egui::Rect::from_min_size(
        egui::pos2(visible.x, visible.y),
        egui::vec2(visible.width, visible.height),
    );
    painter.image(texture, dst, uv, egui::Color32::WHITE);
}

/// Translucent overlay outside the rounded cut-out.
fn draw_mask(painter: &egui::Painter, canvas: egui::Rect, border_radius: u32) {
    let [r, g, b, a] = EDITOR_MASK_COLOR;
    let color = egui::Color32::from_rgba_unmultiplied(r as u8, g as u8, b as u8, (a * 255.0) as u8);
    let radius = egui::CornerRadius::same(border_radius.min(u8::MAX as u32) as u8);

    painter.rect_stroke(
        canvas,
        radius,
        egui::Stroke::new(MASK_STROKE_WIDTH, color),
        egui::StrokeKind::Outside,
    );
}
