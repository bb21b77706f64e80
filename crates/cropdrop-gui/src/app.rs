use std::sync::mpsc;

use cropdrop_core::config::AppConfig;
use cropdrop_core::io::drop::DroppedFile;
use cropdrop_core::upload::{build_uploader, AssetUploader, DirectoryStore};
use cropdrop_core::widget::ImageUpload;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

pub struct CropDropApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub widget: ImageUpload,
    pub ui_state: UIState,
}

impl CropDropApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let mut ui_state = UIState::default();

        let uploader: Box<dyn AssetUploader> = match build_uploader(&config.uploader) {
            Ok(u) => u,
            Err(e) => {
                ui_state.add_log(format!("ERROR: uploader unavailable ({e}); storing to ./uploads"));
                Box::new(DirectoryStore::new("uploads", None))
            }
        };

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(uploader, result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            widget: ImageUpload::new(config.props),
            ui_state,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded {
                    generation,
                    image,
                    source_size,
                } => {
                    if generation != self.ui_state.editor.generation {
                        continue;
                    }
                    let texture = ctx.load_texture("editor", image, egui::TextureOptions::LINEAR);
                    self.ui_state.editor.texture = Some(texture);
                    self.ui_state.editor.source_size = Some(source_size);
                }
                WorkerResult::DecodeFailed {
                    generation,
                    message,
                } => {
                    if generation != self.ui_state.editor.generation {
                        continue;
                    }
                    self.ui_state.add_log(format!("ERROR: cannot preview image: {message}"));
                    self.ui_state.editor.decode_error = Some(message);
                }
                WorkerResult::UploadSettled {
                    ticket,
                    outcome,
                    elapsed,
                } => {
                    tracing::debug!(ticket = ticket.id(), ?elapsed, "upload settled");
                    self.widget.settle(ticket, outcome, &mut self.ui_state);
                    if !self.widget.is_cropping() {
                        self.ui_state.editor.reset();
                    }
                }
            }
        }
    }

    /// Feed OS-dropped files to the widget.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let files: Vec<DroppedFile> = dropped
            .into_iter()
            .filter_map(|f| match to_dropped_file(f) {
                Ok(file) => Some(file),
                Err(msg) => {
                    self.ui_state.add_log(format!("ERROR: {msg}"));
                    None
                }
            })
            .collect();
        self.accept_files(files);
    }

    pub fn accept_files(&mut self, files: Vec<DroppedFile>) {
        let outcome = self.widget.drop_files(files);
        for name in &outcome.rejected {
            self.ui_state.add_log(format!("Ignored {name}: only PNG and JPEG are accepted"));
        }

        if let Some(file) = outcome.accepted {
            self.ui_state.add_log(format!("Editing {}", file.name));
            let generation = self.ui_state.editor.reset();
            self.send_command(WorkerCommand::Decode {
                generation,
                bytes: file.bytes,
            });
        }
    }

    /// Confirm the crop and hand rendering and upload to the worker.
    pub fn confirm_crop(&mut self) {
        if let Some(pending) = self.widget.confirm() {
            self.send_command(WorkerCommand::Upload(pending));
        }
    }

    pub fn cancel_crop(&mut self) {
        if self.widget.is_uploading() {
            self.ui_state.add_log("Editor closed; upload continues in background".into());
        }
        self.widget.cancel();
        self.ui_state.editor.reset();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for CropDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::status::show(ctx, self);
        panels::drop_zone::show(ctx, self);
        panels::crop_modal::show(ctx, self);
    }
}

/// egui hands over either the bytes (web) or a path (native).
fn to_dropped_file(file: egui::DroppedFile) -> Result<DroppedFile, String> {
    let mut dropped = match (file.bytes, file.path) {
        (Some(bytes), path) => {
            let name = if file.name.is_empty() {
                path.as_deref()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                file.name
            };
            DroppedFile::new(name, bytes.to_vec())
        }
        (None, Some(path)) => DroppedFile::from_path(&path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        (None, None) => return Err(format!("dropped file {} has no content", file.name)),
    };

    if !file.mime.is_empty() {
        dropped = dropped.with_mime(file.mime);
    }
    Ok(dropped)
}
