use crate::keymap::Keymap;
use crate::nav::Route;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Tool configuration, stored at ~/.config/condor/config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Colour palette: "dark", "light" or "nocolor"
    #[serde(default)]
    pub theme: ThemeType,
    /// Key bindings (preset plus overrides)
    #[serde(default)]
    pub keymap: Keymap,
    /// Route path shown at launch (default: inicio)
    #[serde(default = "default_start_route")]
    pub start_route: String,
    /// Event poll interval in milliseconds (default: 250)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_start_route() -> String {
    Route::Splash.path()
}

fn default_tick_rate_ms() -> u64 {
    250
}

const MIN_TICK_RATE_MS: u64 = 16;

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeType::default(),
            keymap: Keymap::default(),
            start_route: default_start_route(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults when it is missing
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            Ok(config)
        } else {
            info!("No config at {:?}, writing defaults", config_path);
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with owner-only permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// The configured start route, falling back to the splash screen
    pub fn start(&self) -> Route {
        match Route::parse(&self.start_route) {
            Ok(route) => route,
            Err(e) => {
                warn!("Ignoring start_route {:?}: {}", self.start_route, e);
                Route::Splash
            }
        }
    }

    /// Poll interval, never below one frame at 60 Hz
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.start_route, "inicio");
        assert_eq!(config.start(), Route::Splash);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            theme: ThemeType::Light,
            start_route: "home".to_string(),
            ..Config::default()
        };
        config.save(&config_path).unwrap();

        let loaded = Config::load_or_create(&config_path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.start(), Route::Home);
    }

    #[test]
    fn test_missing_file_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config = Config::load_or_create(&config_path).unwrap();
        assert!(config_path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "theme = \"light\"\n[keymap]\npreset = \"vim\"\n").unwrap();

        let config = Config::load_or_create(&config_path).unwrap();
        assert_eq!(config.theme, ThemeType::Light);
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_bad_start_route_falls_back() {
        let config = Config {
            start_route: "nowhere".to_string(),
            ..Config::default()
        };
        assert_eq!(config.start(), Route::Splash);
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 1,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(16));
    }

    #[cfg(unix)]
    #[test]
    fn test_config_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default().save(&config_path).unwrap();
        let mode = std::fs::metadata(&config_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
