//! TOML configuration file I/O
//!
//! Handles loading and saving generator defaults to/from TOML files
//! in the user's configuration directory.

use crate::config::TotpConfig;
use crate::error::{ConfigError, TotpgenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete TOML configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Generator settings
    #[serde(rename = "totp", default)]
    pub totp: TotpConfig,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(totp: TotpConfig) -> Self {
        Self { totp }
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "TOTPGEN_CONFIG_DIR";

/// Get the default configuration directory
///
/// Returns ~/.config/totpgen, or TOTPGEN_CONFIG_DIR environment variable if set
pub fn get_config_dir() -> Result<PathBuf, TotpgenError> {
    // Allow tests to override config directory via environment variable
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        TotpgenError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("totpgen"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, TotpgenError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
pub fn load_config() -> Result<TotpConfig, TotpgenError> {
    let config_path = get_config_path()?;
    load_config_from_path(&config_path)
}

/// Load configuration from the default TOML file, falling back to
/// defaults when no file has been written yet
pub fn load_config_or_default() -> Result<TotpConfig, TotpgenError> {
    match load_config() {
        Err(TotpgenError::Config(ConfigError::LoadFailed { path })) => {
            debug!(%path, "No config file, using defaults");
            Ok(TotpConfig::default())
        }
        result => result,
    }
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<TotpConfig, TotpgenError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TotpgenError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => TotpgenError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config: TomlConfig = toml::from_str(&contents).map_err(|e| {
        TotpgenError::Config(ConfigError::IoError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    // Validate the loaded configuration
    config
        .totp
        .validate()
        .map_err(|e| TotpgenError::Config(ConfigError::ValidationError { message: e }))?;

    debug!(
        algorithm = %config.totp.algorithm,
        digits = config.totp.digits,
        "Loaded configuration"
    );

    Ok(config.totp)
}

/// Save configuration to the default TOML file
pub fn save_config(config: &TotpConfig) -> Result<PathBuf, TotpgenError> {
    let config_path = get_config_path()?;
    save_config_to_path(config, &config_path)?;
    Ok(config_path)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(
    config: &TotpConfig,
    path: P,
) -> Result<(), TotpgenError> {
    // Validate configuration before saving
    config
        .validate()
        .map_err(|e| TotpgenError::Config(ConfigError::ValidationError { message: e }))?;

    // Ensure config directory exists
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            TotpgenError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    let contents = toml::to_string_pretty(&TomlConfig::new(config.clone()))?;

    std::fs::write(&path, contents).map_err(|_e| {
        TotpgenError::Config(ConfigError::SaveFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        })
    })?;

    Ok(())
}
