//! User settings store.
//!
//! A JSON file at an OS-specific per-user config location holding the
//! appearance/language preferences the desktop shell persists. The gateway
//! itself consumes only [`Settings::request_language()`]; everything else
//! is read and written on behalf of the UI layers.
//!
//! `load()` is deliberately infallible: any I/O or parse fault is logged
//! and degrades to defaults, and a missing file is created with defaults
//! on first load — the shell must always come up with a usable theme.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::types::MediaCategory;

/// User preferences, serialized with the camelCase field names the
/// settings file has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: String,
    pub accent_color: String,
    /// UI language ("pt" or "en").
    pub language: String,
    pub list_density: String,
    /// Hub ordering of the category lists.
    pub list_order: Vec<String>,
    /// Per-category visibility on the hub.
    pub list_visibility: BTreeMap<String, bool>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "theme-dark".to_owned(),
            accent_color: "blue".to_owned(),
            language: system_language(),
            list_density: "default".to_owned(),
            list_order: MediaCategory::ALL
                .iter()
                .map(|c| c.as_str().to_owned())
                .collect(),
            list_visibility: MediaCategory::ALL
                .iter()
                .map(|c| (c.as_str().to_owned(), true))
                .collect(),
        }
    }
}

impl Settings {
    /// The response language for providers that localize (TMDB).
    pub fn request_language(&self) -> &'static str {
        if self.language.starts_with("pt") {
            "pt-BR"
        } else {
            "en-US"
        }
    }
}

/// Pick the default UI language from the process locale.
fn system_language() -> String {
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_default();
    if locale.starts_with("pt") {
        "pt".to_owned()
    } else {
        "en".to_owned()
    }
}

/// Reads and writes the settings file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the OS per-user config location
    /// (e.g. `~/.config/metafetch/settings.json` on Linux).
    ///
    /// Returns `None` when no config directory can be determined.
    pub fn new() -> Option<Self> {
        let path = dirs::config_dir()?.join("metafetch").join("settings.json");
        Some(Self { path })
    }

    /// Store at an explicit path (tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, creating the file with defaults on first run.
    ///
    /// Saved fields override defaults; fields a newer version added fall
    /// back to their defaults. Any fault degrades to defaults.
    pub fn load(&self) -> Settings {
        if self.path.exists() {
            match std::fs::read_to_string(&self.path)
                .map_err(|e| e.to_string())
                .and_then(|data| serde_json::from_str(&data).map_err(|e| e.to_string()))
            {
                Ok(settings) => settings,
                Err(err) => {
                    error!(path = %self.path.display(), error = %err, "failed to load settings");
                    Settings::default()
                }
            }
        } else {
            let defaults = Settings::default();
            if let Err(err) = self.save(&defaults) {
                error!(path = %self.path.display(), error = %err, "failed to create settings file");
            }
            defaults
        }
    }

    /// Write settings as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn save(&self, settings: &Settings) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, data)
    }
}
