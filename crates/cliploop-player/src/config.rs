//! Player configuration for cliploop-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/cliploop/config.yaml

use anyhow::{Context, Result};
use cliploop_core::types::{RepeatOptions, Seconds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerConfig {
    /// Repeat range duration limits
    pub repeat: RepeatOptions,
    /// Media collaborator settings
    pub media: MediaConfig,
    /// Transport button behavior
    pub transport: TransportConfig,
}

/// Media collaborator section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Clip length in seconds fed to the clock transport.
    /// `null` models a clip whose metadata never loads.
    pub duration_secs: Option<Seconds>,
    /// Title shown in the window header
    pub title: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            duration_secs: Some(30.0),
            title: "Sample clip".to_string(),
        }
    }
}

/// Transport button section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Seconds the skip buttons and arrow keys jump
    pub skip_seconds: Seconds,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { skip_seconds: 1.0 }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/cliploop/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("cliploop")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - repeat [{:.1}, {:.1}] s, skip {:.1} s",
                    config.repeat.min_duration,
                    config.repeat.max_duration,
                    config.transport.skip_seconds
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist. Used to write the
/// default config on first run so users have a file to edit.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.repeat.min_duration, 1.0);
        assert_eq!(config.repeat.max_duration, 2.0);
        assert_eq!(config.media.duration_secs, Some(30.0));
        assert_eq!(config.transport.skip_seconds, 1.0);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PlayerConfig {
            repeat: RepeatOptions {
                min_duration: 0.5,
                max_duration: 4.0,
            },
            media: MediaConfig {
                duration_secs: None,
                title: "Test clip".to_string(),
            },
            transport: TransportConfig { skip_seconds: 2.5 },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.repeat.min_duration, 0.5);
        assert_eq!(parsed.repeat.max_duration, 4.0);
        assert_eq!(parsed.media.duration_secs, None);
        assert_eq!(parsed.transport.skip_seconds, 2.5);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let parsed: PlayerConfig =
            serde_yaml::from_str("transport:\n  skip_seconds: 5.0\n").unwrap();
        assert_eq!(parsed.transport.skip_seconds, 5.0);
        assert_eq!(parsed.repeat.min_duration, 1.0);
        assert_eq!(parsed.media.duration_secs, Some(30.0));
    }
}
