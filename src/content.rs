//! Opaque references to displayable image data.
//!
//! The editor never interprets image content. A `ContentRef` is either a
//! reference handed over by the shell (an object URL, a path it manages) or
//! bytes imported through [`ContentRef::from_file`] / [`ContentRef::from_bytes`],
//! which are sniffed once so non-image selections can be rejected up front.

use crate::error::{EditorError, EditorResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// A handle to image data shown by `Image` and `Background` items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    /// Display reference (object URL, file path or caller-supplied label)
    uri: String,
    /// MIME type detected at import, if the bytes went through the editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime: Option<String>,
    /// Raw image bytes, shared between item snapshots
    #[serde(skip)]
    data: Option<Arc<[u8]>>,
}

impl ContentRef {
    /// Wrap a reference the shell already resolved (e.g. `blob:` URL).
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime: None,
            data: None,
        }
    }

    /// Import in-memory image bytes, rejecting anything that isn't an image.
    pub fn from_bytes(label: impl Into<String>, bytes: Vec<u8>) -> EditorResult<Self> {
        let label = label.into();
        if bytes.is_empty() {
            return Err(EditorError::UnsupportedContent(format!("{}: empty file", label)));
        }

        let format = image::guess_format(&bytes).map_err(|_| {
            EditorError::UnsupportedContent(format!("{}: not a recognized image", label))
        })?;

        Ok(Self {
            uri: label,
            mime: Some(format.to_mime_type().to_string()),
            data: Some(Arc::from(bytes)),
        })
    }

    /// Read an image file from disk.
    pub fn from_file(path: &Path) -> EditorResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(path.display().to_string(), bytes)
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Imported bytes, if this reference owns its data
    pub fn bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }
}
