// Configuration management for the CellBridge CLI
//
// Cross-platform config stored in:
// - macOS: ~/.config/cellbridge/config.json
// - Linux: ~/.config/cellbridge/config.json
// - Windows: %APPDATA%\cellbridge\config.json

use anyhow::{Context, Result};
use cellbridge_core::BoardConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Board type tag reported through the status descriptor
    pub board_type: String,

    /// Serial link speed in baud
    pub link_speed: u32,

    /// AT command tracing in the modem driver
    pub debug_at: bool,

    /// Logical channel the secured transports bind by default
    pub default_channel: u8,
}

impl Default for Config {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            board_type: board.board_type,
            link_speed: board.link_speed,
            debug_at: board.debug_at,
            default_channel: board.default_channel,
        }
    }
}

impl Config {
    /// Get the config directory path (cross-platform)
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("cellbridge");

        // Create directory if it doesn't exist
        std::fs::create_dir_all(&config_dir)
            .context("Failed to create config directory")?;

        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            tracing::debug!(
                "no config at {}, writing defaults",
                config_file.display()
            );
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file()?)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents).context("Failed to write config file")?;
        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// The board parameters this config describes
    pub fn board(&self) -> BoardConfig {
        BoardConfig {
            board_type: self.board_type.clone(),
            link_speed: self.link_speed,
            debug_at: self.debug_at,
            default_channel: self.default_channel,
        }
    }

    /// Set a config value; the caller decides when to save
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "board_type" => {
                if value.is_empty() {
                    anyhow::bail!("board_type must not be empty");
                }
                self.board_type = value.to_string();
            }
            "link_speed" => {
                let speed: u32 = value.parse().context("Invalid baud rate")?;
                if speed == 0 {
                    anyhow::bail!("link_speed must be non-zero");
                }
                self.link_speed = speed;
            }
            "debug_at" => {
                self.debug_at = value.parse().context("Invalid boolean value")?;
            }
            "default_channel" => {
                self.default_channel = value.parse().context("Invalid channel index")?;
            }
            _ => anyhow::bail!("Unknown config key: {}", key),
        }
        Ok(())
    }

    /// Get a config value
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "board_type" => Some(self.board_type.clone()),
            "link_speed" => Some(self.link_speed.to_string()),
            "debug_at" => Some(self.debug_at.to_string()),
            "default_channel" => Some(self.default_channel.to_string()),
            _ => None,
        }
    }

    /// List all config values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            ("board_type".to_string(), self.board_type.clone()),
            ("link_speed".to_string(), self.link_speed.to_string()),
            ("debug_at".to_string(), self.debug_at.to_string()),
            (
                "default_channel".to_string(),
                self.default_channel.to_string(),
            ),
        ]
    }
}
