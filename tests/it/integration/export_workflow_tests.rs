//! Export Workflow Integration Tests

use crate::helpers::{TestEditorBuilder, image_ref, solid_image};
use image::RgbaImage;
use postercanvas::editor::EXPORT_FAILED_MESSAGE;
use postercanvas::notifications::ToastVariant;
use postercanvas::{Scene, SnapshotRenderer};
use std::sync::Arc;

fn canvas_renderer() -> Arc<dyn SnapshotRenderer> {
    Arc::new(|scene: &Scene| -> anyhow::Result<RgbaImage> {
        Ok(solid_image(scene.canvas_size.0, scene.canvas_size.1))
    })
}

fn failing_renderer() -> Arc<dyn SnapshotRenderer> {
    Arc::new(|_: &Scene| -> anyhow::Result<RgbaImage> { anyhow::bail!("canvas tainted") })
}

#[test]
fn test_scene_reflects_board() {
    let mut editor = TestEditorBuilder::new().with_text().build();
    editor.create_image_item(image_ref("a.png"));

    let scene = editor.scene();
    assert_eq!(scene.canvas_size, (480, 600));
    assert_eq!(scene.items, editor.board().snapshot());
}

#[test]
fn test_scene_paints_background_first() {
    let mut editor = TestEditorBuilder::new().with_text().with_background().build();
    let image = editor.create_image_item(image_ref("a.png"));

    let scene = editor.scene();
    assert!(scene.items[0].is_background());

    let rest: Vec<u64> = scene.items[1..].iter().map(|item| item.id).collect();
    assert_eq!(rest, vec![1, image]);
}

#[test]
fn test_export_success_shows_toast() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().build();
    let path = editor.export_path_in(dir.path());

    let written = editor.export_to(canvas_renderer().as_ref(), &path).unwrap();

    assert_eq!(written.file_name().unwrap(), "poster.png");
    let decoded = image::open(&written).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (480, 600));

    let toast = &editor.toasts().toasts()[0];
    assert_eq!(toast.variant, ToastVariant::Success);
    assert_eq!(toast.message, "Saved poster.png");
}

#[test]
fn test_export_failure_shows_error_toast() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().build();
    let path = editor.export_path_in(dir.path());

    assert!(editor.export_to(failing_renderer().as_ref(), &path).is_err());

    assert!(!path.exists());
    let toast = &editor.toasts().toasts()[0];
    assert_eq!(toast.variant, ToastVariant::Error);
    assert_eq!(toast.message, EXPORT_FAILED_MESSAGE);
}

#[test]
fn test_export_does_not_mutate_items() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().with_background().build();
    let before = editor.board().snapshot();
    let revision = editor.board().revision();

    let path = editor.export_path_in(dir.path());
    editor.export_to(canvas_renderer().as_ref(), &path).unwrap();

    assert_eq!(editor.board().snapshot(), before);
    assert_eq!(editor.board().revision(), revision);
}

#[test]
fn test_background_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().build();
    let path = editor.export_path_in(dir.path());

    assert!(editor.start_export(canvas_renderer(), path.clone()));
    assert!(editor.is_exporting());

    // Already running: a second request is refused
    assert!(!editor.start_export(canvas_renderer(), path.clone()));

    let result = editor.wait_for_export().unwrap();
    assert_eq!(result.unwrap(), path);
    assert!(!editor.is_exporting());
    assert_eq!(editor.toasts().count(), 1);
}

#[test]
fn test_background_export_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().build();
    let path = editor.export_path_in(dir.path());

    assert!(editor.start_export(failing_renderer(), path));
    assert!(editor.wait_for_export().unwrap().is_err());
    assert_eq!(editor.toasts().toasts()[0].message, EXPORT_FAILED_MESSAGE);
}

#[test]
fn test_editing_continues_during_export() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = TestEditorBuilder::new().with_text().build();
    let path = editor.export_path_in(dir.path());

    assert!(editor.start_export(canvas_renderer(), path));
    crate::helpers::drag(
        &mut editor,
        1,
        crate::helpers::vec2(60.0, 60.0),
        crate::helpers::vec2(110.0, 110.0),
    );
    assert_eq!(editor.board().get_item(1).unwrap().position, (100.0, 100.0));

    assert!(editor.wait_for_export().unwrap().is_ok());
}

#[test]
fn test_poll_without_export() {
    let mut editor = TestEditorBuilder::new().build();
    assert!(editor.poll_export().is_none());
    assert!(editor.wait_for_export().is_none());
}
