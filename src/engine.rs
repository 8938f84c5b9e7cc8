use std::path::{Path, PathBuf};

use crate::settings::PainterSettings;

pub const SETTINGS_FILE: &str = "painter.json";

/// Process-level state owned by the top-level loop and handed to subsystems
/// by reference.
#[derive(Debug, Clone)]
pub struct EngineContext {
    application_name: String,
    operating_system: String,
    native_path: PathBuf,
    settings: PainterSettings,
}

impl EngineContext {
    /// Uses the host OS name and the current directory as the native path.
    pub fn new(application_name: impl Into<String>) -> Self {
        let native_path = std::env::current_dir().unwrap_or_else(|err| {
            log::warn!("Could not read current directory ({}); using '.'", err);
            PathBuf::from(".")
        });
        Self {
            application_name: application_name.into(),
            operating_system: std::env::consts::OS.to_string(),
            native_path,
            settings: PainterSettings::default(),
        }
    }

    pub fn with_native_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.native_path = path.into();
        self
    }

    pub fn with_operating_system(mut self, name: impl Into<String>) -> Self {
        self.operating_system = name.into();
        self
    }

    /// Reloads painter settings from `<native_path>/painter.json`.
    pub fn load_settings(&mut self) -> &PainterSettings {
        self.settings = PainterSettings::load_from_path(self.painter_settings_path());
        &self.settings
    }

    pub fn painter_settings_path(&self) -> PathBuf {
        self.native_path.join(SETTINGS_FILE)
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn operating_system(&self) -> &str {
        &self.operating_system
    }

    pub fn native_path(&self) -> &Path {
        &self.native_path
    }

    pub fn settings(&self) -> &PainterSettings {
        &self.settings
    }
}
