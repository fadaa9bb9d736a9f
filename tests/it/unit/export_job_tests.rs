//! Unit tests for export module.

use crate::helpers::solid_image;
use image::RgbaImage;
use postercanvas::EditorError;
use postercanvas::export::{ExportJob, Scene, SnapshotRenderer, export_png};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Helper to poll for job completion with a timeout.
/// This is much faster than sleeping because it checks frequently
/// and returns as soon as the result is available.
fn wait_for_completion(job: &ExportJob, timeout: Duration) -> Option<postercanvas::EditorResult<std::path::PathBuf>> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Some(result) = job.try_finish() {
            return Some(result);
        }
        // Yield to allow the worker thread to run
        std::thread::yield_now();
    }
    job.try_finish()
}

fn empty_scene(width: u32, height: u32) -> Scene {
    Scene {
        canvas_size: (width, height),
        items: Vec::new(),
    }
}

fn canvas_renderer() -> impl SnapshotRenderer {
    |scene: &Scene| -> anyhow::Result<RgbaImage> {
        Ok(solid_image(scene.canvas_size.0, scene.canvas_size.1))
    }
}

#[test]
fn test_export_png_writes_decodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");

    let written = export_png(&canvas_renderer(), &empty_scene(48, 60), &path).unwrap();
    assert_eq!(written, path);

    let decoded = image::open(&path).unwrap();
    assert_eq!(decoded.width(), 48);
    assert_eq!(decoded.height(), 60);
}

#[test]
fn test_export_png_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");
    std::fs::write(&path, b"stale").unwrap();

    export_png(&canvas_renderer(), &empty_scene(8, 8), &path).unwrap();
    assert!(image::open(&path).is_ok());
}

#[test]
fn test_renderer_failure_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");
    let failing = |_: &Scene| -> anyhow::Result<RgbaImage> { anyhow::bail!("no graphics context") };

    let err = export_png(&failing, &empty_scene(8, 8), &path).unwrap_err();
    assert!(matches!(err, EditorError::Export(_)));
    assert!(err.to_string().contains("no graphics context"));
    assert!(!path.exists());
}

#[test]
fn test_empty_image_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");

    let err = export_png(&canvas_renderer(), &empty_scene(0, 0), &path).unwrap_err();
    assert!(matches!(err, EditorError::Export(_)));
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("poster.png");

    let err = export_png(&canvas_renderer(), &empty_scene(4, 4), &path).unwrap_err();
    assert!(matches!(err, EditorError::Io(_)));
}

#[test]
fn test_job_completes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("poster.png");
    let renderer: Arc<dyn SnapshotRenderer> = Arc::new(canvas_renderer());

    let job = ExportJob::spawn(renderer, empty_scene(16, 16), path.clone()).unwrap();
    assert_eq!(job.path(), path.as_path());

    let result = wait_for_completion(&job, Duration::from_secs(5));
    assert_eq!(result.unwrap().unwrap(), path);
    assert!(path.exists());
}

#[test]
fn test_job_renders_on_worker_thread() {
    let dir = tempfile::tempdir().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = Arc::clone(&calls);

    let renderer: Arc<dyn SnapshotRenderer> = Arc::new(move |scene: &Scene| -> anyhow::Result<RgbaImage> {
        assert_eq!(
            std::thread::current().name(),
            Some("postercanvas-export")
        );
        calls_clone.fetch_add(1, Ordering::SeqCst);
        Ok(solid_image(scene.canvas_size.0, scene.canvas_size.1))
    });

    let job = ExportJob::spawn(renderer, empty_scene(4, 4), dir.path().join("a.png")).unwrap();
    job.wait().unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_job_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    let renderer: Arc<dyn SnapshotRenderer> =
        Arc::new(|_: &Scene| -> anyhow::Result<RgbaImage> { anyhow::bail!("renderer crashed") });

    let job = ExportJob::spawn(renderer, empty_scene(4, 4), dir.path().join("a.png")).unwrap();
    assert!(job.wait().is_err());
}
