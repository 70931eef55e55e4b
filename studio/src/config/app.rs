use super::{LoggingConfig, limits::*, setup, validation::ConfigValidationError};
use engine::export::DEFAULT_EXPORT_NAME;
use engine::generation::{DeviceType, ModelId};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    data_dir: Option<PathBuf>,
    autosave_debounce_ms: Option<u64>,

    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    generation: GenerationConfig,
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let debounce = self.autosave_debounce_ms();
        if !(MIN_AUTOSAVE_DEBOUNCE_MS..=MAX_AUTOSAVE_DEBOUNCE_MS).contains(&debounce) {
            errors.push(ConfigValidationError::AutosaveDebounce {
                configured: debounce,
                min_limit: MIN_AUTOSAVE_DEBOUNCE_MS,
                max_limit: MAX_AUTOSAVE_DEBOUNCE_MS,
            });
        }

        let timeout = self.generation.timeout_secs();
        if !(MIN_GENERATION_TIMEOUT_SECS..=MAX_GENERATION_TIMEOUT_SECS).contains(&timeout) {
            errors.push(ConfigValidationError::GenerationTimeout {
                configured: timeout,
                min_limit: MIN_GENERATION_TIMEOUT_SECS,
                max_limit: MAX_GENERATION_TIMEOUT_SECS,
            });
        }

        let endpoint = self.generation.endpoint();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            errors.push(ConfigValidationError::GenerationEndpoint {
                configured: endpoint.to_string(),
            });
        }

        if let Err(reason) = self.generation.try_model() {
            errors.push(ConfigValidationError::GenerationModel { reason });
        }

        if let Err(reason) = self.generation.try_device() {
            errors.push(ConfigValidationError::GenerationDevice { reason });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Directory holding the canvas state, theme library and host appearance files
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(setup::default_data_dir)
    }

    pub fn autosave_debounce_ms(&self) -> u64 {
        self.autosave_debounce_ms
            .unwrap_or(DEFAULT_AUTOSAVE_DEBOUNCE_MS)
    }

    pub fn autosave_window(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms())
    }

    // Configuration section accessors
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn generation(&self) -> &GenerationConfig {
        &self.generation
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

/// Remote generation service settings
#[derive(Debug, Deserialize, Default, Clone)]
pub struct GenerationConfig {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
    model: Option<String>,
    device: Option<String>,
}

impl GenerationConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_GENERATION_ENDPOINT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }

    /// Configured model, or the service default when unset or unknown
    pub fn model(&self) -> ModelId {
        self.try_model().unwrap_or_default()
    }

    /// Configured device, or the service default when unset or unknown
    pub fn device(&self) -> DeviceType {
        self.try_device().unwrap_or_default()
    }

    fn try_model(&self) -> Result<ModelId, String> {
        match self.model.as_deref() {
            Some(model) => model.parse(),
            None => Ok(ModelId::default()),
        }
    }

    fn try_device(&self) -> Result<DeviceType, String> {
        match self.device.as_deref() {
            Some(device) => device.parse(),
            None => Ok(DeviceType::default()),
        }
    }
}

/// Export defaults
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ExportConfig {
    default_name: Option<String>,
    css_output: Option<PathBuf>,
}

impl ExportConfig {
    pub fn default_name(&self) -> &str {
        self.default_name.as_deref().unwrap_or(DEFAULT_EXPORT_NAME)
    }

    pub fn css_output(&self) -> PathBuf {
        self.css_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSS_OUTPUT))
    }
}
