use super::defaults::DEFAULT_CONFIG;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "canvas-studio";

#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write file {path}: {source}")]
    WriteFileError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    dirs::config_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.toml");
    Ok(config_dir)
}

/// Default location of the canvas data files
///
/// Falls back to a hidden directory under the working directory when the platform has no
/// data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|mut path| {
            path.push(APP_DIR);
            path
        })
        .unwrap_or_else(|| PathBuf::from(".canvas-studio"))
}

/// Write the default configuration to `target`, or to the standard config file path.
///
/// An existing file is never overwritten; `Ok(None)` reports that nothing was written.
pub fn initialize_config(target: Option<&Path>) -> Result<Option<PathBuf>, SetupError> {
    let path = match target {
        Some(path) => path.to_path_buf(),
        None => get_config_file_path()?,
    };

    if path.exists() {
        log::info!("Config file already exists: {}", path.display());
        return Ok(None);
    }

    if let Some(parent) = path.parent() {
        create_dir_if_not_exists(parent)?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|source| SetupError::WriteFileError {
        path: path.clone(),
        source,
    })?;

    log::info!("Config file initialized: {}", path.display());
    Ok(Some(path))
}

/// Create directory if it doesn't exist
pub fn create_dir_if_not_exists(path: &Path) -> Result<(), SetupError> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path).map_err(|source| SetupError::CreateDirError {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
