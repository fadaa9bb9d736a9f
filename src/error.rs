//! Error types for the editor core.
//!
//! Interaction and model operations never fail (stale ids and degenerate
//! geometry are ignored). Errors only come from the edges: reading image
//! files, loading settings and exporting snapshots.

use thiserror::Error;

/// Errors that can occur at the editor's I/O boundaries
#[derive(Error, Debug)]
pub enum EditorError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings (de)serialization error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoding or decoding error from the image crate
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Selected data is not an image we can display
    #[error("Unsupported content: {0}")]
    UnsupportedContent(String),

    /// The snapshot renderer failed
    #[error("Export failed: {0}")]
    Export(String),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

impl From<anyhow::Error> for EditorError {
    fn from(e: anyhow::Error) -> Self {
        EditorError::Export(format!("{:#}", e))
    }
}
