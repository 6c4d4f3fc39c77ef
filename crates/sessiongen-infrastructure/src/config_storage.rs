use sessiongen_core::{PresenterConfig, Result, SessionGenError};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "sessiongen";
const CONFIG_FILE: &str = "config.toml";

/// Returns `~/.config/sessiongen/config.toml`, if a config dir exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Loads the presenter config from the default config file path.
///
/// Falls back to [`PresenterConfig::default`] when no config directory can
/// be resolved.
pub fn load_config() -> Result<PresenterConfig> {
    match default_config_path() {
        Some(config_path) => load_config_from_path(&config_path),
        None => {
            tracing::debug!("No config directory found, using default presenter config");
            Ok(PresenterConfig::default())
        }
    }
}

/// Loads the presenter config from `config_path`.
///
/// # Returns
///
/// - `Ok(PresenterConfig::default())` if the file does not exist or is empty.
/// - `Ok(config)` if the file parses and validates.
/// - `Err(_)` if the file exists but cannot be read, parsed or validated.
pub fn load_config_from_path(config_path: &Path) -> Result<PresenterConfig> {
    if !config_path.exists() {
        tracing::debug!("Config file {:?} not found, using defaults", config_path);
        return Ok(PresenterConfig::default());
    }

    tracing::debug!("Loading presenter config from {:?}", config_path);
    let content = fs::read_to_string(config_path).map_err(|e| {
        SessionGenError::io(format!(
            "Failed to read config file at {:?}: {}",
            config_path, e
        ))
    })?;

    if content.trim().is_empty() {
        return Ok(PresenterConfig::default());
    }

    let config: PresenterConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Saves the presenter config to `config_path` as pretty TOML.
///
/// Counterpart to [`load_config_from_path`] for tooling that seeds or edits a
/// config file; the presenter itself only reads configs.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_config_to_path(config_path: &Path, config: &PresenterConfig) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(config_path, toml_string)?;
    Ok(())
}
