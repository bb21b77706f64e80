use cropdrop_core::consts::ACCEPTED_EXTENSIONS;
use cropdrop_core::io::drop::DroppedFile;

use crate::app::CropDropApp;

pub fn show(ctx: &egui::Context, app: &mut CropDropApp) {
    let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap().shrink(16.0);
        let response = ui.allocate_rect(rect, egui::Sense::click());

        let stroke_color = if hovering || response.hovered() {
            ui.visuals().selection.stroke.color
        } else {
            egui::Color32::from_gray(90)
        };
        ui.painter().rect_stroke(
            rect,
            8.0,
            egui::Stroke::new(2.0, stroke_color),
            egui::StrokeKind::Inside,
        );

        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(drop_text(app));
            });
        });

        if response.clicked() && !app.widget.is_cropping() {
            pick_file(app);
        }
    });
}

fn drop_text(app: &CropDropApp) -> egui::RichText {
    let mut text = String::from("Drop a PNG or JPEG here, or click to choose one");
    if let Some(ref url) = app.ui_state.last_url {
        text.push_str("\n\nLast upload:\n");
        text.push_str(url);
    }
    egui::RichText::new(text)
        .size(18.0)
        .color(egui::Color32::from_gray(160))
}

fn pick_file(app: &mut CropDropApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("Image", ACCEPTED_EXTENSIONS)
        .pick_file()
    else {
        return;
    };

    match DroppedFile::from_path(&path) {
        Ok(file) => app.accept_files(vec![file]),
        Err(e) => app
            .ui_state
            .add_log(format!("ERROR: cannot read {}: {e}", path.display())),
    }
}
