use std::time::Duration;

use cropdrop_core::upload::{Asset, UploadError};
use cropdrop_core::widget::{PendingUpload, UploadTicket};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode the selected file for the editor preview.
    Decode { generation: u64, bytes: Vec<u8> },

    /// Render a confirmed crop and send it to the asset store.
    Upload(PendingUpload),
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    Decoded {
        generation: u64,
        image: egui::ColorImage,
        /// Full source size, which may exceed the preview texture.
        source_size: (u32, u32),
    },
    DecodeFailed {
        generation: u64,
        message: String,
    },
    UploadSettled {
        ticket: UploadTicket,
        outcome: Result<Asset, UploadError>,
        elapsed: Duration,
    },
}
