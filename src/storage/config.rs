use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::booking::{RoomType, DEFAULT_ID_LENGTH};
use crate::form::ValidationPolicy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    WriteError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub bookings: BookingsConfig,
    #[serde(default)]
    pub validation: ValidationPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub first_day_of_week: String,
    pub date_format: String,
    pub default_view: String,
    pub theme: String,
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingsConfig {
    pub id_length: usize,
    pub default_color: RoomColors,
}

/// Colour drawn for a booking that has none of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomColors {
    pub unassigned: String,
    pub meeting: String,
    pub conference: String,
    pub event: String,
}

impl RoomColors {
    pub fn for_room(&self, room: RoomType) -> &str {
        match room {
            RoomType::Unassigned => &self.unassigned,
            RoomType::Meeting => &self.meeting,
            RoomType::Conference => &self.conference,
            RoomType::Event => &self.event,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: "Monday".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            default_view: "Month".to_string(),
            theme: "default".to_string(),
            locale: "en".to_string(),
        }
    }
}

impl Default for BookingsConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            default_color: RoomColors::default(),
        }
    }
}

impl Default for RoomColors {
    fn default() -> Self {
        Self {
            unassigned: "#3788d8".to_string(),
            meeting: "#33b679".to_string(),
            conference: "#f6bf26".to_string(),
            event: "#e67c73".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("room-booker")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}
