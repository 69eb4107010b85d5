use std::path::Path;

use crate::error::ConfigError;
use crate::game::DEFAULT_FOUR_CHANCE_DIVIDER;
use crate::ui::input::KeyMap;
use crate::ui::palette::{Palette, MAX_PALETTE_LEN};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub display: DisplayConfig,
    pub controls: KeyMap,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// A new tile is a 4 with probability 1 / four_chance_divider
    pub four_chance_divider: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            four_chance_divider: DEFAULT_FOUR_CHANCE_DIVIDER,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colour tiles by value; turn off for terminals without ANSI colour
    pub color: bool,
    pub palette: Palette,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            palette: Palette::standard(),
        }
    }
}

impl DisplayConfig {
    /// The palette to draw with, or `None` when colour is off
    pub fn active_palette(&self) -> Option<Palette> {
        self.color.then(|| self.palette.clone())
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.four_chance_divider == 0 {
            return Err(ConfigError::Validation(
                "game.four_chance_divider must be >= 1".into(),
            ));
        }

        let palette = self.display.palette.entries();
        if palette.is_empty() || palette.len() > MAX_PALETTE_LEN {
            return Err(ConfigError::Validation(format!(
                "display.palette must have 1 to {MAX_PALETTE_LEN} entries"
            )));
        }
        if let Some(entry) = palette.iter().find(|e| e.color > 7) {
            return Err(ConfigError::Validation(format!(
                "display.palette color {} is outside 0..=7",
                entry.color
            )));
        }

        let c = &self.controls;
        let keys = [c.up, c.down, c.left, c.right];
        for (i, key) in keys.iter().enumerate() {
            if *key == 'q' {
                return Err(ConfigError::Validation(
                    "controls may not use 'q', it is reserved for quit".into(),
                ));
            }
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::Validation(format!(
                    "controls bind '{key}' to more than one direction"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
