use crate::error::AppError;
use engine::export::ExportFormat;
use std::path::Path;

/// Core validation trait that all validators must implement.
///
/// Validators run before a command touches the canvas, so a rejected input never causes a
/// partial change.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Validation errors for command-line input
#[derive(Debug, Clone, PartialEq)]
pub enum InputValidationError {
    InvalidThemeName { name: String, reason: String },
    InvalidPath { path: String, reason: String },
    InvalidFileExtension { path: String, expected: String },
}

impl InputValidationError {
    pub fn user_message(&self) -> String {
        match self {
            InputValidationError::InvalidThemeName { name, reason } => {
                format!("Invalid theme name '{name}': {reason}")
            }
            InputValidationError::InvalidPath { path, reason } => {
                format!("Invalid path '{path}': {reason}")
            }
            InputValidationError::InvalidFileExtension { path, expected } => {
                format!("Invalid file extension for '{path}': expected a .{expected} file")
            }
        }
    }
}

impl From<InputValidationError> for AppError {
    fn from(error: InputValidationError) -> Self {
        AppError::Validation(error.user_message())
    }
}

/// Maximum theme name length, in characters
pub const MAX_THEME_NAME_LEN: usize = 80;

/// Validator for saved theme names
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = InputValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        let invalid = |reason: &str| InputValidationError::InvalidThemeName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        if input.trim().is_empty() {
            return Err(invalid("Name cannot be empty"));
        }

        if input.chars().count() > MAX_THEME_NAME_LEN {
            return Err(invalid(&format!(
                "Name too long (max {MAX_THEME_NAME_LEN} characters)"
            )));
        }

        if input.chars().any(char::is_control) {
            return Err(invalid("Name cannot contain control characters"));
        }

        if input != input.trim() {
            return Err(invalid("Name cannot start or end with whitespace"));
        }

        Ok(())
    }
}

/// Validator for files read by `import`
pub struct ImportPathValidator;

impl Validator<Path> for ImportPathValidator {
    type Error = InputValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if !input.exists() {
            return Err(InputValidationError::InvalidPath {
                path: input.display().to_string(),
                reason: "Path does not exist".to_string(),
            });
        }

        if !input.is_file() {
            return Err(InputValidationError::InvalidPath {
                path: input.display().to_string(),
                reason: "Path is not a file".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some(ExportFormat::Json.as_str()) {
            return Err(InputValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: ExportFormat::Json.as_str().to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for export destinations of one format
pub struct ExportPathValidator {
    pub format: ExportFormat,
}

impl Validator<Path> for ExportPathValidator {
    type Error = InputValidationError;

    fn validate(&self, input: &Path) -> Result<(), Self::Error> {
        if input.is_dir() {
            return Err(InputValidationError::InvalidPath {
                path: input.display().to_string(),
                reason: "Path is a directory".to_string(),
            });
        }

        if input.extension().and_then(|s| s.to_str()) != Some(self.format.as_str()) {
            return Err(InputValidationError::InvalidFileExtension {
                path: input.display().to_string(),
                expected: self.format.as_str().to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use tempfile::TempDir;

    #[test]
    fn test_theme_names() {
        assert_ok!(ThemeNameValidator.validate("Midnight Ember"));
        assert_err!(ThemeNameValidator.validate("   "));
        assert_err!(ThemeNameValidator.validate(" padded"));
        assert_err!(ThemeNameValidator.validate("tab\tname"));
        assert_err!(ThemeNameValidator.validate(&"x".repeat(MAX_THEME_NAME_LEN + 1)));
    }

    #[test]
    fn test_import_path_must_be_existing_json_file() {
        let dir = TempDir::new().unwrap();
        let theme = dir.path().join("theme.json");
        std::fs::write(&theme, "{}").unwrap();
        let css = dir.path().join("theme.css");
        std::fs::write(&css, "").unwrap();

        assert_ok!(ImportPathValidator.validate(&theme));
        assert_err!(ImportPathValidator.validate(dir.path()));
        assert_err!(ImportPathValidator.validate(&dir.path().join("missing.json")));
        assert!(matches!(
            ImportPathValidator.validate(&css),
            Err(InputValidationError::InvalidFileExtension { .. })
        ));
    }

    #[test]
    fn test_export_path_extension_follows_format() {
        let validator = ExportPathValidator {
            format: ExportFormat::Css,
        };
        assert_ok!(validator.validate(Path::new("out/theme.css")));
        assert_err!(validator.validate(Path::new("out/theme.json")));
    }
}
