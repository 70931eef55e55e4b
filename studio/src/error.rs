use crate::config::ConfigValidationError;
use engine::CanvasError;
use std::fmt::Display;

/// Application-wide error types for the canvas studio.
///
/// Engine errors are converted at the command boundary, keeping their user-facing message, so
/// that every failure reaching `main` can be rendered the same way.
///
/// # Error Categories
///
/// - [`Config`] - Configuration loading and validation errors
/// - [`Engine`] - Canvas engine failures that fit no narrower category
/// - [`Io`] - Reading or writing files named on the command line
/// - [`Storage`] - Failures of the canvas data directory
/// - [`Generation`] - The remote generation service failed or was unreachable
/// - [`Validation`] - Invalid user input; nothing was changed
///
/// [`Config`]: AppError::Config
/// [`Engine`]: AppError::Engine
/// [`Io`]: AppError::Io
/// [`Storage`]: AppError::Storage
/// [`Generation`]: AppError::Generation
/// [`Validation`]: AppError::Validation
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration loading and validation errors.
    ///
    /// The studio refuses to start with an invalid configuration.
    Config(String),

    /// Canvas engine failures, e.g. a document that could not be serialized.
    Engine(String),

    /// File system errors for paths supplied by the user.
    Io(String),

    /// Errors reading or writing the durable canvas keys.
    Storage(String),

    /// Generation service errors. Requests are never retried.
    Generation(String),

    /// Rejected input: malformed JSON, unknown sections, bad names or paths.
    Validation(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Engine(msg) => write!(f, "Canvas Error: {msg}"),
            AppError::Io(msg) => write!(f, "File Error: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Generation(msg) => write!(f, "Generation Error: {msg}"),
            AppError::Validation(msg) => write!(f, "Validation Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CanvasError> for AppError {
    fn from(err: CanvasError) -> Self {
        let message = err.user_message();
        match err {
            CanvasError::Parse { .. } | CanvasError::InvalidFormat(_) => {
                AppError::Validation(message)
            }
            CanvasError::SnapshotNotFound(_) => AppError::Validation(message),
            CanvasError::Storage { .. } => AppError::Storage(message),
            CanvasError::Generation { .. } | CanvasError::Http(_) => AppError::Generation(message),
            CanvasError::Serialize(_) => AppError::Engine(message),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(err: ConfigValidationError) -> Self {
        AppError::Config(err.user_message())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Error severity levels for appropriate reporting
#[derive(Debug, Clone)]
pub enum ErrorSeverity {
    /// Warning severity - report and continue
    Warning,
    /// High severity - report, the command fails
    Error,
    /// Critical severity - report, the studio cannot start
    Critical,
}

/// Context information for errors
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub user_message: String,
    pub technical_details: Option<String>,
    pub suggestion: Option<String>,
    pub severity: ErrorSeverity,
}

impl ErrorContext {
    /// Create new error context with component and operation
    /// Uses generic message based on component/operation. Use .with_message() for custom messages.
    pub fn new(component: &str, operation: &str) -> Self {
        Self {
            component: component.to_string(),
            operation: operation.to_string(),
            user_message: Self::generate_fallback_message(component),
            technical_details: None,
            suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }

    fn generate_fallback_message(component: &str) -> String {
        format!("An error occurred in {component}. Please try again.")
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.user_message = message.to_string();
        self
    }

    pub fn with_technical_details(mut self, details: &str) -> Self {
        self.technical_details = Some(details.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Contextual error with rich information
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub error: AppError,
    pub context: ErrorContext,
}

impl ContextualError {
    pub fn new(error: AppError, context: ErrorContext) -> Self {
        Self { error, context }
    }
}

impl Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            self.context.user_message, self.context.component, self.error
        )
    }
}

/// Central error reporting: logs with context, prints a readable summary to stderr
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    /// Report error with full context
    pub fn report(&self, error: AppError, context: ErrorContext) {
        let contextual_error = ContextualError::new(error.clone(), context.clone());

        match context.severity {
            ErrorSeverity::Warning => {
                log::warn!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Error => {
                log::error!(
                    "[{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
            ErrorSeverity::Critical => {
                log::error!(
                    "[CRITICAL] [{}:{}] {} {}",
                    context.component,
                    context.operation,
                    contextual_error,
                    self.format_additional_context(&context)
                );
            }
        }

        eprintln!("{}", self.render(&error, &context));
    }

    /// Report a failed command, choosing a suggestion from the error kind
    pub fn report_command_error(&self, command: &str, error: AppError) {
        let suggestion = match &error {
            AppError::Config(_) => "Fix the configuration file, or run `canvas-studio init`",
            AppError::Validation(_) => "Check the command arguments; nothing was changed",
            AppError::Generation(_) => {
                "Check that the generation service is running at the configured endpoint"
            }
            AppError::Storage(_) => "Check that the data directory exists and is writable",
            AppError::Io(_) => "Check the file path and its permissions",
            AppError::Engine(_) => "Try again; if it keeps failing, reset the canvas",
        };
        let message = match &error {
            AppError::Config(msg)
            | AppError::Engine(msg)
            | AppError::Io(msg)
            | AppError::Storage(msg)
            | AppError::Generation(msg)
            | AppError::Validation(msg) => msg.clone(),
        };

        let context = ErrorContext::new("Command", command)
            .with_message(&message)
            .with_suggestion(suggestion);
        self.report(error, context);
    }

    /// Report configuration errors; the studio exits afterwards
    pub fn report_config_error(&self, error: impl Display) {
        let context = ErrorContext::new("Configuration", "load_config")
            .with_message("Failed to load the studio configuration")
            .with_technical_details(&error.to_string())
            .with_suggestion("Check your canvas.toml file and CANVAS_* environment variables")
            .with_severity(ErrorSeverity::Critical);

        let app_error = AppError::Config(error.to_string());
        self.report(app_error, context);
    }

    /// Format additional context information for logging
    fn format_additional_context(&self, context: &ErrorContext) -> String {
        let mut parts = Vec::new();

        if let Some(ref technical_details) = context.technical_details {
            parts.push(format!("Technical: {technical_details}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            parts.push(format!("Suggestion: {suggestion}"));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("\n{}", parts.join("\n"))
        }
    }

    /// Terminal rendering of an error: title, message, details and suggestion
    pub fn render(&self, error: &AppError, context: &ErrorContext) -> String {
        let mut formatted_message = match context.severity {
            ErrorSeverity::Warning => "Warning".to_string(),
            ErrorSeverity::Error | ErrorSeverity::Critical => self.get_error_title(error),
        };

        formatted_message.push_str(&format!("\n  {}", context.user_message));

        if let Some(ref technical) = context.technical_details {
            formatted_message.push_str(&format!("\n  Details: {technical}"));
        }

        if let Some(ref suggestion) = context.suggestion {
            formatted_message.push_str(&format!("\n  Suggestion: {suggestion}"));
        }

        formatted_message
    }

    fn get_error_title(&self, error: &AppError) -> String {
        match error {
            AppError::Config(_) => "Configuration Error".to_string(),
            AppError::Engine(_) => "Canvas Error".to_string(),
            AppError::Io(_) => "File Error".to_string(),
            AppError::Storage(_) => "Storage Error".to_string(),
            AppError::Generation(_) => "Generation Error".to_string(),
            AppError::Validation(_) => "Invalid Input".to_string(),
        }
    }
}
