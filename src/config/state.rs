// src/config/state.rs
use std::path::PathBuf;

use super::options::{self, AppOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Thumbnail width in the combination grid
    pub thumb_w: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100.0,
            window_h: 700.0,
            thumb_w: 180.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
    pub settings_path: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
            settings_path: options::settings_path(),
        }
    }
}

impl AppState {
    /// Options from `.store/settings.json`, defaults otherwise.
    pub fn load() -> Self {
        let settings_path = options::settings_path();
        Self {
            options: AppOptions::load(&settings_path),
            gui: GuiState::default(),
            settings_path,
        }
    }

    pub fn save(&self) {
        match self.options.save(&self.settings_path) {
            Ok(()) => logd!("Settings: saved {}", self.settings_path.display()),
            Err(e) => loge!("Settings: save failed {}: {}", self.settings_path.display(), e),
        }
    }
}
