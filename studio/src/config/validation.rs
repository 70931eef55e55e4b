use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid autosave_debounce_ms: {configured} (min: {min_limit}, max: {max_limit})")]
    AutosaveDebounce {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid generation.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    GenerationTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid generation.endpoint: {configured}")]
    GenerationEndpoint { configured: String },
    #[error("Invalid generation.model: {reason}")]
    GenerationModel { reason: String },
    #[error("Invalid generation.device: {reason}")]
    GenerationDevice { reason: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::AutosaveDebounce {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Autosave window out of range!\n\n\
                    Your configured value: {configured} ms\n\
                    Valid range: {min_limit} - {max_limit} ms\n\n\
                    Please update autosave_debounce_ms in canvas.toml to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::GenerationTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Generation timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update timeout_secs in the [generation] section."
                )
            }
            ConfigValidationError::GenerationEndpoint { configured } => {
                format!(
                    "Generation endpoint is not an HTTP URL!\n\n\
                    Your configured value: {configured}\n\n\
                    Please set endpoint in the [generation] section to an http:// or https:// URL."
                )
            }
            ConfigValidationError::GenerationModel { reason } => {
                format!(
                    "Unknown generation model!\n\n\
                    {reason}\n\n\
                    Please update model in the [generation] section."
                )
            }
            ConfigValidationError::GenerationDevice { reason } => {
                format!(
                    "Unknown generation device!\n\n\
                    {reason}\n\n\
                    Please update device in the [generation] section."
                )
            }
        }
    }
}

/// Configuration loading result
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
    ValidationError(Vec<ConfigValidationError>),
}

impl ConfigLoadResult {
    /// Combined message for every failure kind; `None` on success
    pub fn error_message(&self) -> Option<String> {
        match self {
            ConfigLoadResult::Success(_) => None,
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Some(msg.clone())
            }
            ConfigLoadResult::ValidationError(errors) => {
                let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
                Some(format!(
                    "Configuration validation failed:\n{}",
                    messages.join("\n\n")
                ))
            }
        }
    }
}
