use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BORDER_RADIUS, DEFAULT_SUBMIT_TEXT, DEFAULT_UPLOAD_TIMEOUT_SECS};
use crate::error::{CropDropError, Result};

/// Caller-facing options of the upload widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadProps {
    /// Label of the confirm button.
    pub submit_text: String,
    /// Corner radius of the mask cut-out, in canvas pixels.
    pub border_radius: u32,
}

impl Default for UploadProps {
    fn default() -> Self {
        Self {
            submit_text: DEFAULT_SUBMIT_TEXT.to_string(),
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }
}

/// Where cropped images are sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploaderConfig {
    Http {
        endpoint: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    Directory {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self::Directory {
            path: PathBuf::from("uploads"),
            base_url: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_UPLOAD_TIMEOUT_SECS
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub props: UploadProps,
    #[serde(default)]
    pub uploader: UploaderConfig,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CropDropError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CropDropError::Config(e.to_string()))
    }
}
