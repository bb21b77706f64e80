pub mod directory;
pub mod http;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::UploaderConfig;
use crate::consts::GENERIC_UPLOAD_ERROR;
use crate::error::CropDropError;

pub use directory::DirectoryStore;
pub use http::HttpUploader;

/// A stored asset, addressed by its public URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub url: String,
}

/// Failure of a single upload. `Display` is the message shown to the user.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid upload response: {0}")]
    InvalidResponse(String),

    #[error("Upload response did not include an asset URL")]
    MissingUrl,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The crop could not be rendered, so nothing was sent.
    #[error("{0}")]
    Render(#[from] CropDropError),

    #[error("{0}")]
    Other(String),
}

impl UploadError {
    /// Human-readable message, never empty.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_UPLOAD_ERROR.to_string()
        } else {
            msg
        }
    }
}

/// Sends a blob to an asset store. One call, one outcome: no retries.
pub trait AssetUploader: Send + Sync {
    fn upload(&self, blob: &[u8], filename: &str) -> Result<Asset, UploadError>;
}

/// Build the uploader described by the config.
pub fn build_uploader(config: &UploaderConfig) -> Result<Box<dyn AssetUploader>, UploadError> {
    match config {
        UploaderConfig::Http {
            endpoint,
            token,
            timeout_secs,
        } => Ok(Box::new(HttpUploader::new(
            endpoint.clone(),
            token.clone(),
            Duration::from_secs(*timeout_secs),
        )?)),
        UploaderConfig::Directory { path, base_url } => {
            Ok(Box::new(DirectoryStore::new(path.clone(), base_url.clone())))
        }
    }
}
