use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::{AppConfig, ExportConfig, GenerationConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Load configuration from every source, lowest priority first:
///
/// 1. `<config dir>/canvas-studio/config.toml`
/// 2. `./canvas.toml`
/// 3. `explicit`, when given (must exist)
/// 4. `CANVAS_*` environment variables, `__` between section and key
///
/// A `.env` file in the working directory is read into the environment first.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();

    if let Ok(user_config) = setup::get_config_file_path() {
        builder = builder.add_source(File::from(user_config).required(false));
    }
    builder = builder.add_source(File::with_name("canvas").required(false));
    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path).required(true));
    }

    let env_source = Environment::with_prefix("CANVAS")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your canvas.toml file and environment variables."
            ));
        }
    };

    finish(config)
}

/// Load configuration from TOML text alone, ignoring files and the environment.
pub fn load_config_from_str(text: &str) -> ConfigLoadResult {
    match Config::builder()
        .add_source(File::from_str(text, FileFormat::Toml))
        .build()
    {
        Ok(config) => finish(config),
        Err(e) => ConfigLoadResult::LoadError(format!("Configuration loading failed: {e}")),
    }
}

fn finish(config: Config) -> ConfigLoadResult {
    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                return ConfigLoadResult::ValidationError(validation_errors);
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
