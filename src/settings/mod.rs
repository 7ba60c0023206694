pub mod io;

use bevy::prelude::{warn, Resource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::layout::language::LanguageTag;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "edited_layout.json";

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// UI language; also the remap target of the next load.
    pub language: LanguageTag,
    /// Directory of the last loaded or exported file, used to seed dialogs.
    pub last_directory: Option<PathBuf>,
    pub export_file_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: LanguageTag::default(),
            last_directory: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Settings for startup; any read or parse problem falls back to defaults.
pub fn load_app_settings() -> AppSettings {
    match io::load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("AppSettings: Using defaults, could not load settings: {}", e);
            AppSettings::default()
        }
    }
}
