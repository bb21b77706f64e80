//! Drop → crop → upload state machine.
//!
//! `ImageUpload` owns the widget mode. A front end feeds it drops, editor
//! adjustments and button presses. Confirming hands back a [`PendingUpload`]
//! holding everything needed to render and send the crop, so the heavy work
//! can run off the UI thread; its outcome is reported through
//! [`ImageUpload::settle`].

mod listener;
mod state;

use tracing::{debug, info, warn};

pub use listener::{Callbacks, UploadListener};
pub use state::{CropSession, Phase, UploadTicket};

use crate::config::UploadProps;
use crate::crop::geometry::EditorGeometry;
use crate::crop::params::CropParams;
use crate::crop::render::render_blob;
use crate::io::drop::{filter_drop, DropOutcome, DroppedFile, SelectedFile};
use crate::upload::{Asset, AssetUploader, UploadError};

/// Snapshot of a confirmed session, taken when the widget enters `Uploading`.
#[derive(Clone, Debug)]
pub struct PendingUpload {
    pub ticket: UploadTicket,
    pub file: SelectedFile,
    pub params: CropParams,
    pub geometry: EditorGeometry,
}

impl PendingUpload {
    /// Name of the originally dropped file.
    pub fn filename(&self) -> &str {
        &self.file.name
    }

    /// Decode, crop and encode the selected file as a PNG blob.
    pub fn render(&self) -> crate::error::Result<Vec<u8>> {
        render_blob(&self.file.bytes, &self.params, &self.geometry)
    }

    /// Render the crop and send it. A render failure is returned as
    /// [`UploadError::Render`] without contacting the store.
    pub fn run(&self, uploader: &dyn AssetUploader) -> Result<Asset, UploadError> {
        let blob = self.render().inspect_err(|e| {
            warn!(ticket = self.ticket.id(), name = %self.file.name, "failed to render crop: {e}");
        })?;
        info!(ticket = self.ticket.id(), filename = %self.file.name, bytes = blob.len(), "crop rendered");
        uploader.upload(&blob, &self.file.name)
    }
}

pub struct ImageUpload {
    props: UploadProps,
    geometry: EditorGeometry,
    phase: Phase,
    next_ticket: u64,
}

impl ImageUpload {
    pub fn new(props: UploadProps) -> Self {
        Self::with_geometry(props, EditorGeometry::default())
    }

    pub fn with_geometry(props: UploadProps, geometry: EditorGeometry) -> Self {
        Self {
            props,
            geometry,
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }

    pub fn props(&self) -> &UploadProps {
        &self.props
    }

    pub fn geometry(&self) -> &EditorGeometry {
        &self.geometry
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session(&self) -> Option<&CropSession> {
        self.phase.session()
    }

    /// Editor visible (uploading implies cropping).
    pub fn is_cropping(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, Phase::Uploading { .. })
    }

    /// Handle a drop or picker selection.
    ///
    /// The first PNG/JPEG becomes the selected file and opens (or restarts)
    /// the editor. Drops with no acceptable file change nothing. Drops while
    /// an upload is in flight are ignored.
    pub fn drop_files(&mut self, files: Vec<DroppedFile>) -> DropOutcome {
        if self.is_uploading() {
            warn!(count = files.len(), "drop ignored while uploading");
            return DropOutcome::default();
        }

        let outcome = filter_drop(files);
        if let Some(ref file) = outcome.accepted {
            debug!(name = %file.name, bytes = file.bytes.len(), from = %self.phase, "-> Cropping");
            self.phase = Phase::Cropping(CropSession::new(file.clone()));
        } else if !outcome.rejected.is_empty() {
            debug!(rejected = outcome.rejected.len(), "no acceptable file in drop");
        }
        outcome
    }

    /// Set the editor zoom, clamped to the slider range.
    pub fn set_zoom(&mut self, value: f32) {
        if let Phase::Cropping(ref mut session) = self.phase {
            session.params.set_zoom(value);
        }
    }

    /// Set the normalised centre of the visible window directly.
    pub fn set_position(&mut self, x: f32, y: f32) {
        if let Phase::Cropping(ref mut session) = self.phase {
            session.params.position.x = x;
            session.params.position.y = y;
        }
    }

    /// Pan by a pointer drag of `(dx, dy)` canvas pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, image_size: (u32, u32)) {
        let geometry = self.geometry;
        if let Phase::Cropping(ref mut session) = self.phase {
            session.params.pan(dx, dy, image_size, &geometry);
        }
    }

    /// Confirm the crop and move to `Uploading`.
    ///
    /// Only honoured while `Cropping`; any other call returns `None` and
    /// issues nothing. Rendering happens later in [`PendingUpload::run`], and
    /// its failures arrive through [`settle`](Self::settle) like any other.
    pub fn confirm(&mut self) -> Option<PendingUpload> {
        let Phase::Cropping(_) = self.phase else {
            debug!(phase = %self.phase, "confirm ignored");
            return None;
        };
        let Phase::Cropping(session) = std::mem::take(&mut self.phase) else {
            return None;
        };

        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;

        let pending = PendingUpload {
            ticket,
            file: session.file.clone(),
            params: session.params,
            geometry: self.geometry,
        };
        info!(ticket = ticket.id(), filename = %pending.file.name, "Cropping -> Uploading");
        self.phase = Phase::Uploading { session, ticket };
        Some(pending)
    }

    /// Report the outcome of an upload started by [`confirm`](Self::confirm).
    ///
    /// The listener is called first, then the widget returns to `Idle`. A
    /// ticket that no longer matches the current upload (the editor was
    /// closed meanwhile) is still reported but leaves the state untouched.
    pub fn settle(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<Asset, UploadError>,
        listener: &mut dyn UploadListener,
    ) {
        let current = matches!(self.phase, Phase::Uploading { ticket: t, .. } if t == ticket);
        if !current {
            warn!(ticket = ticket.id(), phase = %self.phase, "upload settled after its editor closed");
        }

        match outcome {
            Ok(asset) => {
                info!(ticket = ticket.id(), url = %asset.url, "upload complete");
                listener.on_success(&asset.url);
            }
            Err(e) => {
                let message = e.message();
                warn!(ticket = ticket.id(), "upload failed: {message}");
                listener.on_error(&message);
            }
        }

        if current {
            debug!("Uploading -> Idle");
            self.phase = Phase::Idle;
        }
    }

    /// Close the editor without uploading.
    ///
    /// Closing during an upload does not abort it; its settlement will be
    /// treated as stale.
    pub fn cancel(&mut self) {
        if self.is_cropping() {
            debug!(from = %self.phase, "-> Idle (cancelled)");
        }
        self.phase = Phase::Idle;
    }

    /// Run a whole confirm → render → upload → settle cycle on the calling
    /// thread. Returns `false` when the confirm was not honoured.
    pub fn crop_and_upload(
        &mut self,
        uploader: &dyn AssetUploader,
        listener: &mut dyn UploadListener,
    ) -> bool {
        let Some(pending) = self.confirm() else {
            return false;
        };
        let outcome = pending.run(uploader);
        self.settle(pending.ticket, outcome, listener);
        true
    }
}

impl Default for ImageUpload {
    fn default() -> Self {
        Self::new(UploadProps::default())
    }
}
