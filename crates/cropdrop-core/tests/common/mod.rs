use std::io::Cursor;
use std::sync::Mutex;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use cropdrop_core::upload::{Asset, AssetUploader, UploadError};
use cropdrop_core::widget::UploadListener;

/// RGB image whose pixel at (x, y) is `[x % 256, y % 256, 128]`.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(gradient_image(width, height), ImageFormat::Png)
}

pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(gradient_image(width, height), ImageFormat::Jpeg)
}

fn encode(img: RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .expect("encode test image");
    buf.into_inner()
}

/// Listener that records every callback.
#[derive(Default)]
pub struct RecordingListener {
    pub successes: Vec<String>,
    pub errors: Vec<String>,
}

impl UploadListener for RecordingListener {
    fn on_success(&mut self, url: &str) {
        self.successes.push(url.to_string());
    }

    fn on_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Uploader returning a fixed outcome and recording what it was sent.
pub struct MockUploader {
    outcome: Result<String, String>,
    pub calls: Mutex<Vec<(Vec<u8>, String)>>,
}

impl MockUploader {
    pub fn ok(url: &str) -> Self {
        Self {
            outcome: Ok(url.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl AssetUploader for MockUploader {
    fn upload(&self, blob: &[u8], filename: &str) -> Result<Asset, UploadError> {
        self.calls
            .lock()
            .unwrap()
            .push((blob.to_vec(), filename.to_string()));
        match self.outcome {
            Ok(ref url) => Ok(Asset { url: url.clone() }),
            Err(ref message) => Err(UploadError::Other(message.clone())),
        }
    }
}
