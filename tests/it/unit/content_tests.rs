//! Unit tests for image import.

use crate::helpers::png_bytes;
use postercanvas::{ContentRef, EditorError};

#[test]
fn test_from_file_reads_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, png_bytes(3, 2)).unwrap();

    let content = ContentRef::from_file(&path).unwrap();
    assert_eq!(content.mime(), Some("image/png"));
    assert!(content.uri().ends_with("photo.png"));
    assert_eq!(content.bytes(), Some(png_bytes(3, 2).as_slice()));
}

#[test]
fn test_from_file_rejects_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.png");
    std::fs::write(&path, "definitely not an image").unwrap();

    let err = ContentRef::from_file(&path).unwrap_err();
    assert!(matches!(err, EditorError::UnsupportedContent(_)));
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentRef::from_file(&dir.path().join("gone.png")).unwrap_err();
    assert!(matches!(err, EditorError::Io(_)));
}

#[test]
fn test_clones_share_bytes() {
    let content = ContentRef::from_bytes("a.png", png_bytes(1, 1)).unwrap();
    let copy = content.clone();
    assert_eq!(
        content.bytes().map(<[u8]>::as_ptr),
        copy.bytes().map(<[u8]>::as_ptr)
    );
}
