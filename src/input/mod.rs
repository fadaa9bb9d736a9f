//! Pointer input handling for the poster canvas.
//!
//! This module implements the interaction state machine: the shell forwards
//! pointer down, move and up events, and the editor turns them into item
//! drags and resizes.
//!
//! ## Architecture
//!
//! The active operation is an explicit enum (`InputState`) rather than
//! per-item booleans; the items' `is_dragging`/`is_resizing` flags mirror it
//! for rendering.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `mouse_down` - Pointer down (hit testing, drag/resize start)
//! - `drag` - Pointer move (drag and resize steps)
//! - `mouse_up` - Pointer up (finish the operation)
//! - `coords` - Page to canvas coordinate conversion

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use coords::CanvasOrigin;
pub use state::InputState;
