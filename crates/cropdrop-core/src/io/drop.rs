use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use crate::consts::{ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES};
use crate::error::Result;

/// A file handed to the drop surface, either by an OS drop or a file picker.
#[derive(Clone, Debug)]
pub struct DroppedFile {
    pub name: String,
    /// MIME type reported by the source, if any.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk. The name is the final path component.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, bytes))
    }
}

/// The single image chosen for a crop session.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl From<DroppedFile> for SelectedFile {
    fn from(file: DroppedFile) -> Self {
        Self {
            name: file.name,
            bytes: file.bytes,
        }
    }
}

/// Result of filtering a drop.
#[derive(Debug, Default)]
pub struct DropOutcome {
    /// First accepted file, if any.
    pub accepted: Option<SelectedFile>,
    /// Names of files that did not pass the PNG/JPEG filter.
    pub rejected: Vec<String>,
}

/// Whether a file passes the PNG/JPEG accept filter.
///
/// A reported MIME type decides on its own. Without one the extension is
/// used, and without an extension the leading bytes are sniffed.
pub fn is_accepted(file: &DroppedFile) -> bool {
    if let Some(mime) = file.mime.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        let mime = mime.to_ascii_lowercase();
        return ACCEPTED_MIME_TYPES.contains(&mime.as_str());
    }

    match Path::new(&file.name).extension().and_then(|e| e.to_str()) {
        Some(ext) => ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => matches!(
            image::guess_format(&file.bytes),
            Ok(ImageFormat::Png | ImageFormat::Jpeg)
        ),
    }
}

/// Split a drop into the first accepted file and the rejected names.
pub fn filter_drop(files: Vec<DroppedFile>) -> DropOutcome {
    let mut outcome = DropOutcome::default();

    for file in files {
        if !is_accepted(&file) {
            debug!(name = %file.name, mime = ?file.mime, "rejected dropped file");
            outcome.rejected.push(file.name);
        } else if outcome.accepted.is_none() {
            outcome.accepted = Some(file.into());
        }
    }

    outcome
}
