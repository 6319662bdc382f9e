use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CadranApp;

/// Errors from reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings JSON invalid: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the path to the settings file: `~/.config/cadran-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("cadran-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // UI
    pub show_settings: bool,

    // Stroke
    pub line_width: f32,

    // Colors (stored as u8 triples since Color32 isn't serde-friendly)
    pub base_r: u8,
    pub base_g: u8,
    pub base_b: u8,
    pub current_r: u8,
    pub current_g: u8,
    pub current_b: u8,
    pub past_hour_r: u8,
    pub past_hour_g: u8,
    pub past_hour_b: u8,
    pub past_minute_r: u8,
    pub past_minute_g: u8,
    pub past_minute_b: u8,
    pub past_second_r: u8,
    pub past_second_g: u8,
    pub past_second_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_settings: true,

            line_width: 2.0,

            base_r: 255,
            base_g: 255,
            base_b: 255,
            current_r: 255,
            current_g: 255,
            current_b: 0,
            past_hour_r: 0,
            past_hour_g: 255,
            past_hour_b: 0,
            past_minute_r: 0,
            past_minute_g: 0,
            past_minute_b: 255,
            past_second_r: 255,
            past_second_g: 0,
            past_second_b: 0,
            background_r: 10,
            background_g: 10,
            background_b: 14,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match Self::try_load(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        if let Err(e) = self.try_save(&settings_path()) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    fn try_save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &CadranApp) -> Self {
        let settings = &app.face.settings;
        let style = &settings.style;

        Self {
            show_settings: app.show_settings,

            line_width: style.line_width,

            base_r: style.base.r(),
            base_g: style.base.g(),
            base_b: style.base.b(),
            current_r: style.current.r(),
            current_g: style.current.g(),
            current_b: style.current.b(),
            past_hour_r: style.past_hour.r(),
            past_hour_g: style.past_hour.g(),
            past_hour_b: style.past_hour.b(),
            past_minute_r: style.past_minute.r(),
            past_minute_g: style.past_minute.g(),
            past_minute_b: style.past_minute.b(),
            past_second_r: style.past_second.r(),
            past_second_g: style.past_second.g(),
            past_second_b: style.past_second.b(),
            background_r: settings.background.r(),
            background_g: settings.background.g(),
            background_b: settings.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut CadranApp) {
        app.show_settings = self.show_settings;

        let settings = &mut app.face.settings;
        settings.style.line_width = self.line_width;
        settings.style.base = Color32::from_rgb(self.base_r, self.base_g, self.base_b);
        settings.style.current = Color32::from_rgb(self.current_r, self.current_g, self.current_b);
        settings.style.past_hour =
            Color32::from_rgb(self.past_hour_r, self.past_hour_g, self.past_hour_b);
        settings.style.past_minute =
            Color32::from_rgb(self.past_minute_r, self.past_minute_g, self.past_minute_b);
        settings.style.past_second =
            Color32::from_rgb(self.past_second_r, self.past_second_g, self.past_second_b);
        settings.background =
            Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}
