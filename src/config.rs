use std::{
    fs::File,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    AgrobotError,
    i18n::Language,
    robot::{scheduler::DEFAULT_TICK_INTERVAL_MS, simulator::DEFAULT_EVENT_PROBABILITY},
};

const APP_DIR_NAME: &str = "agrobot";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub tick_interval_ms: u64,
    pub event_probability: f64,
    pub language: Language,
    pub dark_mode: bool,
    pub window_position: WindowPosition,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            event_probability: DEFAULT_EVENT_PROBABILITY,
            language: Language::default(),
            dark_mode: false,
            window_position: WindowPosition::default(),
        }
    }
}

impl AppConfig {
    fn local_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config saved in the user's config directory, if there is a usable one.
    pub fn from_local_file() -> Option<Self> {
        Self::from_file(&Self::local_path()?)
    }

    pub fn from_file(config_path: &Path) -> Option<Self> {
        if !config_path.exists() {
            debug!("No config file at {:?}", config_path);
            return None;
        }

        let file = match File::open(config_path) {
            Ok(file) => file,
            Err(e) => {
                warn!("Could not open config file {:?}: {}", config_path, e);
                return None;
            }
        };
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Could not parse config file {:?}: {}", config_path, e);
                None
            }
        }
    }

    pub fn save(&self) -> Result<(), AgrobotError> {
        let config_path = Self::local_path().ok_or(AgrobotError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AgrobotError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AgrobotError::ConfigIOError { source: e })?;
        }

        let file =
            File::create(config_path).map_err(|e| AgrobotError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| AgrobotError::ConfigSerializeError { source: e })
    }
}
