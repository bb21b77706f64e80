use std::sync::mpsc;
use std::time::Instant;

use cropdrop_core::io::image_io::decode_image;
use cropdrop_core::upload::AssetUploader;
use tracing::debug;

use crate::convert::preview_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    uploader: Box<dyn AssetUploader>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("cropdrop-worker".into())
        .spawn(move || {
            worker_loop(uploader, cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    uploader: Box<dyn AssetUploader>,
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Decode { generation, bytes } => {
                handle_decode(generation, &bytes, &tx, &ctx);
            }
            WorkerCommand::Upload(pending) => {
                let start = Instant::now();
                let outcome = pending.run(uploader.as_ref());
                send(&tx, &ctx, WorkerResult::UploadSettled {
                    ticket: pending.ticket,
                    outcome,
                    elapsed: start.elapsed(),
                });
            }
        }
    }
    debug!("worker channel closed");
}

fn handle_decode(
    generation: u64,
    bytes: &[u8],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match decode_image(bytes) {
        Ok(img) => {
            let image = preview_color_image(&img);
            send(tx, ctx, WorkerResult::Decoded {
                generation,
                image,
                source_size: (img.width(), img.height()),
            });
        }
        Err(e) => send(tx, ctx, WorkerResult::DecodeFailed {
            generation,
            message: e.to_string(),
        }),
    }
}
