//! Configuration management for hidg-media-keys
//!
//! Defaults for the device path, wake behaviour and verbosity can be kept in
//! a config file so scripts only need to pass the key name.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/hidg-media-keys/config.toml` |
//! | macOS | `~/Library/Application Support/hidg-media-keys/config.toml` |
//! | Windows | `%APPDATA%\hidg-media-keys\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use hidg_media_keys::Config;
//!
//! // Load existing config or use defaults
//! let mut config = Config::load().unwrap_or_default();
//!
//! // Always wake the host first
//! config.device.wake = true;
//!
//! // Save to disk
//! config.save().expect("Failed to save config");
//! ```

use crate::device::DEFAULT_DEVICE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "hidg-media-keys";

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the path to the config file.
///
/// The directory is not created here; see [`Config::save_to`].
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Gadget device settings
    #[serde(default)]
    pub device: DeviceConfig,
    /// Diagnostic output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Gadget device configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceConfig {
    /// Path of the HID gadget character device
    pub path: PathBuf,
    /// Send the wake report before every command
    #[serde(default)]
    pub wake: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DEVICE),
            wake: false,
        }
    }
}

/// Diagnostic output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Trace each write and wait
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command line overrides.
    ///
    /// A device path replaces the configured one; `wake` and `verbose` can
    /// only switch options on.
    pub fn apply_overrides(&mut self, device: Option<PathBuf>, wake: bool, verbose: bool) {
        if let Some(path) = device {
            self.device.path = path;
        }
        self.device.wake |= wake;
        self.output.verbose |= verbose;
    }

    /// Save configuration to the default config file.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config_path(tag: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "hidg-media-keys-test-{}-{}.toml",
            tag,
            std::process::id()
        ))
    }

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.device.path, PathBuf::from("/dev/hidg0"));
        assert!(!config.device.wake);
        assert!(!config.output.verbose);
    }

    #[test]
    fn config_save_and_load_roundtrip() {
        let path = temp_config_path("roundtrip");

        let mut config = Config::default();
        config.device.path = PathBuf::from("/dev/hidg1");
        config.device.wake = true;

        config.save_to(&path).expect("Failed to save config");
        let loaded = Config::load_from(&path).expect("Failed to load config");

        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_load_missing_file_is_error() {
        let path = PathBuf::from("/nonexistent/path/config.toml");
        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn config_load_malformed_is_parse_error() {
        let path = temp_config_path("malformed");
        fs::write(&path, "[device\npath = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");

        assert!(toml_str.contains("[device]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("path = \"/dev/hidg0\""));
        assert!(toml_str.contains("wake = false"));
    }

    #[test]
    fn config_deserializes_partial_toml() {
        let toml_str = r#"
[device]
path = "/dev/hidg2"
"#;

        let config: Config = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(config.device.path, PathBuf::from("/dev/hidg2"));
        assert!(!config.device.wake);
        assert!(!config.output.verbose);
    }

    #[test]
    fn overrides_replace_device_path() {
        let mut config = Config::default();
        config.device.path = PathBuf::from("/dev/hidg1");

        config.apply_overrides(Some(PathBuf::from("/dev/hidg3")), false, false);

        assert_eq!(config.device.path, PathBuf::from("/dev/hidg3"));
    }

    #[test]
    fn overrides_switch_options_on() {
        let mut config = Config::default();

        config.apply_overrides(None, true, true);

        assert!(config.device.wake);
        assert!(config.output.verbose);
        assert_eq!(config.device.path, PathBuf::from("/dev/hidg0"));
    }

    #[test]
    fn omitted_overrides_keep_config_values() {
        let mut config = Config::default();
        config.device.path = PathBuf::from("/dev/hidg2");
        config.device.wake = true;
        config.output.verbose = true;
        let expected = config.clone();

        config.apply_overrides(None, false, false);

        assert_eq!(config, expected);
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::NoConfigDir;
        assert_eq!(err.to_string(), "Could not determine config directory");

        let io_err = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(io_err.to_string().contains("IO error"));
    }

    #[test]
    fn config_path_names_app_dir() {
        if let Ok(path) = config_path() {
            assert!(path.to_string_lossy().contains("hidg-media-keys"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
