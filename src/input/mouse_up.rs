//! Pointer up handling - finalize the active operation.

use crate::editor::PosterEditor;
use tracing::debug;

impl PosterEditor {
    /// Pointer released, anywhere on the page.
    ///
    /// The shell must forward releases that happen outside the canvas
    /// element too, otherwise a drag stays open until the next press.
    pub fn on_pointer_up(&mut self) {
        let Some(item_id) = self.input_state.active_item_id() else {
            return;
        };

        debug!(
            item_id,
            resizing = self.input_state.is_resizing(),
            "Pointer operation finished"
        );
        self.input_state.reset();
        self.board.clear_interaction();
    }
}
