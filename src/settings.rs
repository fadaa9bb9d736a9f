//! Editor settings.
//!
//! Settings are stored as JSON. Every field has a default, so a partial file
//! (or none at all) still produces a complete configuration.

use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_EXPORT_FILE_NAME, DEFAULT_FONT_SIZE,
    DEFAULT_IMAGE_POSITION, DEFAULT_IMAGE_SIZE, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_CONTENT,
    DEFAULT_TEXT_POSITION, DEFAULT_TEXT_SIZE,
};
use crate::error::EditorResult;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas: CanvasSettings,
    pub text: TextSettings,
    pub image: ImageSettings,
    pub export: ExportSettings,
}

/// Poster canvas dimensions in pixels
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSettings {
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Defaults for newly created text items
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    pub content: String,
    pub font_size: f32,
    pub color: String,
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            content: DEFAULT_TEXT_CONTENT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: DEFAULT_TEXT_COLOR.to_string(),
            position: DEFAULT_TEXT_POSITION,
            size: DEFAULT_TEXT_SIZE,
        }
    }
}

/// Defaults for newly created image items
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            position: DEFAULT_IMAGE_POSITION,
            size: DEFAULT_IMAGE_SIZE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// File name used when the shell doesn't pick one
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl EditorSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> EditorResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file doesn't exist.
    /// A file that exists but can't be parsed is still an error.
    pub fn load_or_default(path: &Path) -> EditorResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// `<config dir>/postercanvas/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postercanvas").join("settings.json"))
}
