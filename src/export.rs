//! Snapshot export.
//!
//! Rasterizing the poster is the renderer's job; the core hands it a
//! [`Scene`] (a copy of the items plus the canvas size) and encodes the
//! returned pixels as PNG. Export only ever reads the model.
//!
//! Exports can run on a worker thread via [`ExportJob`] so the UI thread
//! keeps processing pointer events while the file is written.

use crate::board::Board;
use crate::error::{EditorError, EditorResult};
use crate::types::CanvasItem;
use image::{ImageFormat, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, error, info};

/// Everything a renderer needs to draw the poster.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Canvas size in whole pixels
    pub canvas_size: (u32, u32),
    /// Items in paint order, back to front
    pub items: Vec<CanvasItem>,
}

impl Scene {
    /// Snapshot `board` for rendering.
    ///
    /// The background is painted first regardless of when it was set. The
    /// remaining items follow in insertion order.
    pub fn from_board(board: &Board) -> Self {
        let (w, h) = board.canvas_size();
        let (backgrounds, others): (Vec<_>, Vec<_>) = board
            .items()
            .iter()
            .cloned()
            .partition(CanvasItem::is_background);

        Self {
            canvas_size: (w.round().max(0.0) as u32, h.round().max(0.0) as u32),
            items: backgrounds.into_iter().chain(others).collect(),
        }
    }
}

/// External rasterizer turning a scene into pixels.
pub trait SnapshotRenderer: Send + Sync {
    fn render(&self, scene: &Scene) -> anyhow::Result<RgbaImage>;
}

impl<F> SnapshotRenderer for F
where
    F: Fn(&Scene) -> anyhow::Result<RgbaImage> + Send + Sync,
{
    fn render(&self, scene: &Scene) -> anyhow::Result<RgbaImage> {
        self(scene)
    }
}

/// Render `scene` and write it to `path` as PNG.
///
/// The file is written to a temporary sibling first and moved into place,
/// so a failed export never leaves a truncated PNG behind.
pub fn export_png(renderer: &dyn SnapshotRenderer, scene: &Scene, path: &Path) -> EditorResult<PathBuf> {
    let image = renderer.render(scene)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(EditorError::Export("renderer produced an empty image".to_string()));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp = tempfile::NamedTempFile::new_in(&dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| EditorError::Io(e.error))?;

    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Exported poster"
    );
    Ok(path.to_path_buf())
}

/// An export running on a worker thread.
pub struct ExportJob {
    path: PathBuf,
    rx: Receiver<EditorResult<PathBuf>>,
}

impl ExportJob {
    /// Start exporting `scene` in the background.
    pub fn spawn(renderer: Arc<dyn SnapshotRenderer>, scene: Scene, path: PathBuf) -> EditorResult<Self> {
        let (tx, rx) = mpsc::channel();
        let target = path.clone();

        std::thread::Builder::new()
            .name("postercanvas-export".to_string())
            .spawn(move || {
                let result = export_png(renderer.as_ref(), &scene, &target);
                // Receiver gone means the editor was dropped; nothing to report to
                let _ = tx.send(result);
            })?;

        debug!(path = %path.display(), "Export started");
        Ok(Self { path, rx })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for completion.
    pub fn try_finish(&self) -> Option<EditorResult<PathBuf>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!(path = %self.path.display(), "Export worker exited without a result");
                Some(Err(EditorError::Export("export worker exited".to_string())))
            }
        }
    }

    /// Block until the export finishes.
    pub fn wait(self) -> EditorResult<PathBuf> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(EditorError::Export("export worker exited".to_string())))
    }
}
