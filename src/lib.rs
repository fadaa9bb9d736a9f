//! Postercanvas - the interactive core of a poster editor.
//!
//! Users place text blocks and images on a fixed-size canvas, drag and
//! resize them with the pointer, edit text and color inline and export the
//! result as PNG. This crate holds everything with state and invariants:
//!
//! - [`board`] - the item model
//! - [`geometry`] - pure drag/resize geometry
//! - [`input`] - the pointer-driven interaction state machine
//! - [`editor`] - [`PosterEditor`], the controller the UI shell drives
//!
//! Rendering, file dialogs and rasterization stay in the shell; the core
//! only exchanges [`ContentRef`]s and [`Scene`] snapshots with it.

pub mod board;
pub mod constants;
pub mod content;
pub mod editor;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use content::ContentRef;
pub use editor::PosterEditor;
pub use error::{EditorError, EditorResult};
pub use export::{Scene, SnapshotRenderer};
pub use types::{CanvasItem, HandleKind, HitTarget, ItemContent, ItemKind, ItemPatch};
