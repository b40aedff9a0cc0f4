use serde::{Deserialize, Serialize};

/// Editor preferences. The element document itself is never persisted;
/// only the chrome-level defaults below survive a restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    pub show_grid: bool,
    pub grid_size: f32,
    pub default_frame_device: String,
    pub left_panel_open: bool,
    pub right_panel_open: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            show_grid: false,
            grid_size: 20.0,
            default_frame_device: "iphone-14-15-pro-standard".to_string(),
            left_panel_open: true,
            right_panel_open: true,
        }
    }
}

pub(super) fn load_settings(path: &str) -> Option<AppSettings> {
    let s = std::fs::read_to_string(path).ok()?;
    if path.ends_with(".toml") {
        toml::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| serde_json::from_str::<AppSettings>(&s).ok())
    } else {
        serde_json::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| toml::from_str::<AppSettings>(&s).ok())
    }
}

pub(super) fn save_settings(path: &str, settings: &AppSettings) -> Result<(), String> {
    if path.ends_with(".toml") {
        let toml = toml::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, toml).map_err(|e| e.to_string())
    } else {
        let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| e.to_string())
    }
}

impl super::CanvasApp {
    pub(super) fn settings_snapshot(&self) -> AppSettings {
        AppSettings {
            show_grid: self.show_grid,
            grid_size: self.grid_size,
            default_frame_device: self.default_frame_device.clone(),
            left_panel_open: self.left_panel_open,
            right_panel_open: self.right_panel_open,
        }
    }

    pub(super) fn persist_settings(&mut self) {
        let snapshot = self.settings_snapshot();
        if let Err(e) = save_settings(&self.settings_path, &snapshot) {
            log::warn!("settings save failed: {e}");
            self.status = Some(format!("Settings save failed: {e}"));
        }
    }
}
