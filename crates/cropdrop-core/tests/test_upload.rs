use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use cropdrop_core::config::UploaderConfig;
use cropdrop_core::upload::http::parse_asset;
use cropdrop_core::upload::{build_uploader, AssetUploader, DirectoryStore, HttpUploader, UploadError};

// ---------------------------------------------------------------------------
// DirectoryStore
// ---------------------------------------------------------------------------

#[test]
fn test_directory_store_with_base_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path(), Some("https://cdn.example.com/avatars/".into()));

    let first = store.upload(b"one", "photo.jpg").unwrap();
    let second = store.upload(b"two", "photo.jpg").unwrap();

    assert_eq!(first.url, "https://cdn.example.com/avatars/photo.png");
    assert_eq!(second.url, "https://cdn.example.com/avatars/photo-1.png");
    assert_eq!(std::fs::read(dir.path().join("photo.png")).unwrap(), b"one");
    assert_eq!(std::fs::read(dir.path().join("photo-1.png")).unwrap(), b"two");
}

#[test]
fn test_directory_store_file_url() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path().join("nested"), None);

    let asset = store.upload(b"data", "me.png").unwrap();
    assert!(asset.url.starts_with("file://"), "got: {}", asset.url);
    assert!(asset.url.ends_with("me.png"), "got: {}", asset.url);
}

#[test]
fn test_build_uploader_from_directory_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = UploaderConfig::Directory {
        path: dir.path().to_path_buf(),
        base_url: Some("http://localhost".into()),
    };
    let uploader = build_uploader(&config).unwrap();
    let asset = uploader.upload(b"x", "a.jpeg").unwrap();
    assert_eq!(asset.url, "http://localhost/a.png");
}

// ---------------------------------------------------------------------------
// Error messages and response parsing
// ---------------------------------------------------------------------------

#[test]
fn test_error_message_is_verbatim() {
    let err = UploadError::Status {
        status: 504,
        message: "network timeout".into(),
    };
    assert_eq!(err.message(), "network timeout");
}

#[test]
fn test_error_message_never_empty() {
    assert_eq!(UploadError::Other(String::new()).message(), "Upload failed");
    assert!(!UploadError::MissingUrl.message().is_empty());
}

#[test]
fn test_parse_asset_top_level() {
    let asset = parse_asset(r#"{"url": "https://assets.example.com/abc.png"}"#).unwrap();
    assert_eq!(asset.url, "https://assets.example.com/abc.png");
}

#[test]
fn test_parse_asset_nested_data() {
    let asset = parse_asset(r#"{"data": {"url": "https://a/b.png", "size": 3}}"#).unwrap();
    assert_eq!(asset.url, "https://a/b.png");
}

#[test]
fn test_parse_asset_missing_url() {
    let err = parse_asset(r#"{"ok": true}"#).unwrap_err();
    assert!(matches!(err, UploadError::MissingUrl));
}

#[test]
fn test_parse_asset_invalid_json() {
    let err = parse_asset("<html>").unwrap_err();
    assert!(matches!(err, UploadError::InvalidResponse(_)));
}

// ---------------------------------------------------------------------------
// HttpUploader against a one-shot local server
// ---------------------------------------------------------------------------

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn content_length(head: &str) -> Option<usize> {
    head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Read one full HTTP request (headers plus body).
fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = find(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_string();
            let body_len = buf.len() - (end + 4);
            match content_length(&head) {
                Some(len) if body_len >= len => break,
                None if buf.ends_with(b"0\r\n\r\n") => break,
                _ => {}
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve a single canned response. The join handle yields the raw request.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{addr}/upload"), handle)
}

fn local_uploader(endpoint: String, token: Option<String>) -> HttpUploader {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();
    HttpUploader::with_client(client, endpoint, token)
}

#[test]
fn test_http_upload_success() {
    let (endpoint, server) = serve_once("200 OK", r#"{"url":"https://assets.example.com/abc.png"}"#);
    let uploader = local_uploader(endpoint, Some("secret".into()));

    let asset = uploader.upload(b"\x89PNGfake", "photo.jpg").unwrap();
    assert_eq!(asset.url, "https://assets.example.com/abc.png");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /upload"), "got: {request}");
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains("name=\"file\""));
    assert!(request.contains("filename=\"photo.jpg\""));
    assert!(request.contains("image/png"));
    assert!(request.to_ascii_lowercase().contains("authorization: bearer secret"));
}

#[test]
fn test_http_upload_error_status_uses_server_message() {
    let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"message":"quota exceeded"}"#);
    let uploader = local_uploader(endpoint, None);

    let err = uploader.upload(b"x", "photo.jpg").unwrap_err();
    match err {
        UploadError::Status { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.message(), "quota exceeded");

    let request = server.join().unwrap();
    assert!(!request.to_ascii_lowercase().contains("authorization:"));
}

#[test]
fn test_http_upload_error_status_without_body() {
    let (endpoint, server) = serve_once("404 Not Found", "");
    let uploader = local_uploader(endpoint, None);

    let err = uploader.upload(b"x", "photo.jpg").unwrap_err();
    assert_eq!(err.message(), "404 Not Found");
    server.join().unwrap();
}

#[test]
fn test_http_upload_unreachable_has_message() {
    // Bind then drop to get a port nobody listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let uploader = local_uploader(format!("http://127.0.0.1:{port}/upload"), None);

    let err = uploader.upload(b"x", "photo.jpg").unwrap_err();
    assert!(matches!(err, UploadError::Http(_)));
    assert!(!err.message().is_empty());
}
