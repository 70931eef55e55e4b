use engine::CanvasError;
use studio::AppError;
use studio::error::{ErrorContext, ErrorReporter, ErrorSeverity};

/// Runs an engine operation the way a command does and converts its failure.
fn run_engine_step(step: impl FnOnce() -> Result<(), CanvasError>) -> Result<(), AppError> {
    step().map_err(AppError::from)
}

#[test]
fn engine_failures_keep_their_user_message() {
    let err = run_engine_step(|| Err(CanvasError::InvalidFormat("missing palette".to_string())))
        .unwrap_err();
    assert_eq!(
        err,
        AppError::Validation("Invalid format: missing palette".to_string())
    );
    assert_eq!(
        err.to_string(),
        "Validation Error: Invalid format: missing palette"
    );
}

#[test]
fn storage_failures_are_storage_errors() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let err = run_engine_step(|| Err(CanvasError::storage("starseed-saved-themes", io)))
        .unwrap_err();
    assert!(matches!(err, AppError::Storage(ref msg) if msg.contains("starseed-saved-themes")));
}

#[test]
fn warnings_render_without_an_error_title() {
    let reporter = ErrorReporter::new();
    let error = AppError::Generation("fallback template".to_string());
    let context = ErrorContext::new("Generate", "component")
        .with_message("The service returned its fallback template")
        .with_severity(ErrorSeverity::Warning);

    let rendered = reporter.render(&error, &context);
    assert!(rendered.starts_with("Warning\n"));
    assert!(rendered.contains("fallback template"));
    assert!(!rendered.contains("Suggestion"));
}
