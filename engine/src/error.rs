use thiserror::Error;

/// Errors produced by the canvas engine.
///
/// Parse failures on the load paths are usually logged and replaced by defaults by the caller;
/// they surface as errors only where a user asked for the operation (import, generation).
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to parse {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Failed to serialize canvas document: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage error for key '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("Generation service returned HTTP {status}: {message}")]
    Generation { status: u16, message: String },

    #[error("Generation request failed: {0}")]
    Http(String),
}

impl CanvasError {
    pub fn storage(key: impl Into<String>, source: std::io::Error) -> Self {
        CanvasError::Storage {
            key: key.into(),
            source,
        }
    }

    /// Short message suitable for showing to the person editing the theme.
    pub fn user_message(&self) -> String {
        match self {
            CanvasError::Parse { context, .. } => format!("The {context} is not valid JSON."),
            CanvasError::InvalidFormat(detail) => format!("Invalid format: {detail}"),
            CanvasError::Serialize(_) => "The theme could not be serialized.".to_string(),
            CanvasError::Storage { key, .. } => format!("Could not access saved data '{key}'."),
            CanvasError::SnapshotNotFound(id) => format!("No saved theme with id '{id}'."),
            CanvasError::Generation { status, message } => {
                format!("The generation service failed ({status}): {message}")
            }
            CanvasError::Http(detail) => {
                format!("Could not reach the generation service: {detail}")
            }
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CanvasError::Parse { .. } | CanvasError::InvalidFormat(_)
        )
    }
}

impl From<reqwest::Error> for CanvasError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CanvasError::Generation {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => CanvasError::Http(err.to_string()),
        }
    }
}

pub type CanvasResult<T> = Result<T, CanvasError>;
