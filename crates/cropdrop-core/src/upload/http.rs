use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

use crate::consts::UPLOAD_MIME_TYPE;

use super::{Asset, AssetUploader, UploadError};

/// Posts the blob as `multipart/form-data` (field `file`) to an endpoint
/// that answers with JSON holding the asset URL.
pub struct HttpUploader {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpUploader {
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UploadError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint, token))
    }

    /// Use a preconfigured client (proxy, TLS, timeouts).
    pub fn with_client(client: Client, endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token,
        }
    }
}

impl AssetUploader for HttpUploader {
    fn upload(&self, blob: &[u8], filename: &str) -> Result<Asset, UploadError> {
        let part = Part::bytes(blob.to_vec())
            .file_name(filename.to_string())
            .mime_str(UPLOAD_MIME_TYPE)?;
        let form = Form::new().part("file", part);

        let mut request = self.client.post(&self.endpoint).multipart(form);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        info!(endpoint = %self.endpoint, filename, bytes = blob.len(), "uploading");
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        debug!(%status, body_len = body.len(), "upload response");

        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }

        parse_asset(&body)
    }
}

/// Extract the asset URL from `{"url": ..}` or `{"data": {"url": ..}}`.
pub fn parse_asset(body: &str) -> Result<Asset, UploadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    value
        .get("url")
        .or_else(|| value.get("data").and_then(|d| d.get("url")))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(|url| Asset {
            url: url.to_string(),
        })
        .ok_or(UploadError::MissingUrl)
}

/// Prefer the server's own `message`/`error` text over the bare status line.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status.to_string())
}
