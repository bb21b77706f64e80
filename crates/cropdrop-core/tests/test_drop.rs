mod common;

use std::io::Write;

use cropdrop_core::io::drop::{filter_drop, is_accepted, DroppedFile};

use common::png_bytes;

#[test]
fn test_accepts_png_and_jpeg_mime() {
    assert!(is_accepted(&DroppedFile::new("a.bin", vec![]).with_mime("image/png")));
    assert!(is_accepted(&DroppedFile::new("a.bin", vec![]).with_mime("IMAGE/JPEG")));
}

#[test]
fn test_mime_decides_over_extension() {
    let gif = DroppedFile::new("looks.png", vec![]).with_mime("image/gif");
    assert!(!is_accepted(&gif));
}

#[test]
fn test_extension_is_case_insensitive() {
    assert!(is_accepted(&DroppedFile::new("photo.JPG", vec![])));
    assert!(is_accepted(&DroppedFile::new("photo.jpeg", vec![])));
    assert!(!is_accepted(&DroppedFile::new("anim.gif", vec![])));
    assert!(!is_accepted(&DroppedFile::new("notes.txt", vec![])));
}

#[test]
fn test_sniffs_when_no_extension() {
    assert!(is_accepted(&DroppedFile::new("pasted", png_bytes(4, 4))));
    assert!(!is_accepted(&DroppedFile::new("pasted", b"hello".to_vec())));
}

#[test]
fn test_filter_takes_first_accepted() {
    let outcome = filter_drop(vec![
        DroppedFile::new("anim.gif", vec![1]),
        DroppedFile::new("first.png", vec![2]),
        DroppedFile::new("second.jpg", vec![3]),
    ]);

    let accepted = outcome.accepted.expect("a file is accepted");
    assert_eq!(accepted.name, "first.png");
    assert_eq!(accepted.bytes, vec![2]);
    assert_eq!(outcome.rejected, vec!["anim.gif".to_string()]);
}

#[test]
fn test_filter_all_rejected() {
    let outcome = filter_drop(vec![DroppedFile::new("doc.pdf", vec![])]);
    assert!(outcome.accepted.is_none());
    assert_eq!(outcome.rejected.len(), 1);
}

#[test]
fn test_filter_empty_drop() {
    let outcome = filter_drop(Vec::new());
    assert!(outcome.accepted.is_none());
    assert!(outcome.rejected.is_empty());
}

#[test]
fn test_from_path_uses_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("avatar.png");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&png_bytes(2, 2)).unwrap();

    let dropped = DroppedFile::from_path(&path).unwrap();
    assert_eq!(dropped.name, "avatar.png");
    assert!(dropped.mime.is_none());
    assert!(is_accepted(&dropped));
}
