use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::{Asset, AssetUploader, UploadError};

/// Asset store backed by a local directory.
///
/// Each upload gets a fresh `<stem>.png` (or `<stem>-N.png`) file. The URL is
/// `base_url/<name>` when a base URL is configured, otherwise a `file://` URL.
pub struct DirectoryStore {
    root: PathBuf,
    base_url: Option<String>,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>, base_url: Option<String>) -> Self {
        Self {
            root: root.into(),
            base_url,
        }
    }

    fn url_for(&self, path: &Path, name: &str) -> Result<String, UploadError> {
        match self.base_url {
            Some(ref base) => Ok(format!("{}/{}", base.trim_end_matches('/'), name)),
            None => {
                let abs = path.canonicalize()?;
                Ok(format!("file://{}", abs.display()))
            }
        }
    }
}

impl AssetUploader for DirectoryStore {
    fn upload(&self, blob: &[u8], filename: &str) -> Result<Asset, UploadError> {
        std::fs::create_dir_all(&self.root)?;
        let stem = sanitize_stem(filename);

        for n in 0u32.. {
            let name = if n == 0 {
                format!("{stem}.png")
            } else {
                format!("{stem}-{n}.png")
            };
            let path = self.root.join(&name);

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(f) => f,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };
            file.write_all(blob)?;
            file.flush()?;

            info!(path = %path.display(), bytes = blob.len(), "stored asset");
            let url = self.url_for(&path, &name)?;
            return Ok(Asset { url });
        }

        Err(UploadError::Other("No free asset name".into()))
    }
}

/// File stem reduced to `[A-Za-z0-9_-]`, `image` when nothing usable is left.
fn sanitize_stem(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    let cleaned: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned
    }
}
