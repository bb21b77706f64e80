use crate::app::CropDropApp;

pub fn show(ctx: &egui::Context, app: &mut CropDropApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if app.widget.is_uploading() {
            ui.add(egui::ProgressBar::new(0.0).text("Uploading...").animate(true));
        } else {
            // Invisible placeholder, same height
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", app.widget.phase()));
            if let Some((w, h)) = app.ui_state.editor.source_size {
                ui.separator();
                ui.label(format!("{w}x{h}"));
            }
            if let Some(session) = app.widget.session() {
                ui.separator();
                ui.label(format!("Zoom: {}", session.params.zoom));
            }
        });

        ui.add_space(2.0);
    });
}
