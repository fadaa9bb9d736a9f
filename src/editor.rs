//! The editor controller - the single object the UI shell talks to.
//!
//! `PosterEditor` owns the item model, the input state machine, settings,
//! the toast queue and any running export. Item operations live here; the
//! pointer entry points are implemented in the `input` module.
//!
//! Everything runs on the shell's UI thread. Each call completes before the
//! next event is handled, so no mutation ever interleaves with another.

use crate::board::Board;
use crate::content::ContentRef;
use crate::error::EditorResult;
use crate::export::{ExportJob, Scene, SnapshotRenderer, export_png};
use crate::input::InputState;
use crate::notifications::{Toast, ToastManager};
use crate::settings::EditorSettings;
use crate::types::{CanvasItem, ItemPatch};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Message shown when an export fails, whatever the cause
pub const EXPORT_FAILED_MESSAGE: &str = "Export failed. Please try again.";

pub struct PosterEditor {
    pub(crate) board: Board,
    pub(crate) input_state: InputState,
    settings: EditorSettings,
    toasts: ToastManager,
    pending_export: Option<ExportJob>,
}

impl Default for PosterEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl PosterEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            board: Board::new(&settings),
            input_state: InputState::Idle,
            settings,
            toasts: ToastManager::new(),
            pending_export: None,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Current items in render order.
    pub fn items(&self) -> &[CanvasItem] {
        self.board.items()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    /// True while a drag or resize is in progress
    pub fn is_interacting(&self) -> bool {
        !self.input_state.is_idle()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Drop toasts that have timed out by `now`. Call from the UI tick.
    pub fn expire_toasts(&mut self, now: Instant) -> bool {
        self.toasts.remove_expired(now)
    }

    /// The user closed a toast.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        self.toasts.dismiss(id)
    }

    // ========================================================================
    // Item operations
    // ========================================================================

    pub fn create_text_item(&mut self) -> u64 {
        self.board.add_text()
    }

    pub fn create_image_item(&mut self, content: ContentRef) -> u64 {
        self.board.add_image(content)
    }

    pub fn set_background_item(&mut self, content: ContentRef) -> u64 {
        self.board.set_background(content)
    }

    /// Read an image file and place it. Unreadable or non-image files are
    /// logged and ignored.
    pub fn import_image_file(&mut self, path: &Path) -> Option<u64> {
        let content = Self::load_content(path)?;
        Some(self.create_image_item(content))
    }

    /// Read an image file and use it as the background. Unreadable or
    /// non-image files are logged and ignored.
    pub fn import_background_file(&mut self, path: &Path) -> Option<u64> {
        let content = Self::load_content(path)?;
        Some(self.set_background_item(content))
    }

    fn load_content(path: &Path) -> Option<ContentRef> {
        match ContentRef::from_file(path) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!(path = %path.display(), "Ignoring file selection: {}", e);
                None
            }
        }
    }

    /// Delete an item. If it was being dragged or resized the operation ends.
    pub fn delete_item(&mut self, id: u64) {
        if self.input_state.active_item_id() == Some(id) {
            debug!(item_id = id, "Active item deleted, returning to idle");
            self.input_state.reset();
        }
        self.board.remove_item(id);
    }

    pub fn update_item_color(&mut self, id: u64, color: impl Into<String>) {
        self.board.update_item(id, ItemPatch::color(color));
    }

    pub fn update_item_content(&mut self, id: u64, text: impl Into<String>) {
        self.board.update_item(id, ItemPatch::text(text));
    }

    /// Apply an arbitrary partial update. No-op for unknown ids.
    pub fn update_item(&mut self, id: u64, patch: ItemPatch) {
        self.board.update_item(id, patch);
    }

    /// Clear the whole poster and abandon any pointer operation.
    pub fn reset_all(&mut self) {
        info!("Resetting canvas");
        self.input_state.reset();
        self.board.clear();
    }

    /// Change the canvas dimensions; items are re-clamped into the new bounds.
    pub fn resize_canvas(&mut self, width: f32, height: f32) {
        self.settings.canvas.width = width;
        self.settings.canvas.height = height;
        self.board.set_canvas_size((width, height));
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Snapshot of the current poster for a renderer.
    pub fn scene(&self) -> Scene {
        Scene::from_board(&self.board)
    }

    /// Default export location inside `dir`.
    pub fn export_path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.settings.export.file_name)
    }

    /// Export synchronously, reporting the outcome as a toast.
    pub fn export_to(&mut self, renderer: &dyn SnapshotRenderer, path: &Path) -> EditorResult<PathBuf> {
        let result = export_png(renderer, &self.scene(), path);
        self.report_export(&result);
        result
    }

    /// Start an export on a worker thread. Returns false if one is already
    /// running or the worker couldn't be started (reported as a toast).
    pub fn start_export(&mut self, renderer: Arc<dyn SnapshotRenderer>, path: PathBuf) -> bool {
        if self.pending_export.is_some() {
            debug!("Export already in progress");
            return false;
        }

        match ExportJob::spawn(renderer, self.scene(), path) {
            Ok(job) => {
                self.pending_export = Some(job);
                true
            }
            Err(e) => {
                let result = Err(e);
                self.report_export(&result);
                false
            }
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.pending_export.is_some()
    }

    /// Collect a finished background export, if any. Call from the UI tick.
    pub fn poll_export(&mut self) -> Option<EditorResult<PathBuf>> {
        let result = self.pending_export.as_ref()?.try_finish()?;
        self.pending_export = None;
        self.report_export(&result);
        Some(result)
    }

    /// Block until a running background export completes.
    pub fn wait_for_export(&mut self) -> Option<EditorResult<PathBuf>> {
        let job = self.pending_export.take()?;
        let result = job.wait();
        self.report_export(&result);
        Some(result)
    }

    fn report_export(&mut self, result: &EditorResult<PathBuf>) {
        match result {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.toasts.push(Toast::success(format!("Saved {}", name)));
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.toasts.push(Toast::error(EXPORT_FAILED_MESSAGE));
            }
        }
    }
}
