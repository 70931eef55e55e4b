/// Shortest autosave window accepted from configuration
pub const MIN_AUTOSAVE_DEBOUNCE_MS: u64 = 100;

/// Longest autosave window accepted from configuration (one minute)
pub const MAX_AUTOSAVE_DEBOUNCE_MS: u64 = 60_000;

/// Default autosave window, matching the engine's coalescing timer
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 1000;

/// Minimum timeout for a generation request
pub const MIN_GENERATION_TIMEOUT_SECS: u64 = 1;

/// Maximum reasonable timeout for a generation request (10 minutes)
pub const MAX_GENERATION_TIMEOUT_SECS: u64 = 600;

/// Default timeout for a generation request
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

/// Generation endpoint used when none is configured
pub const DEFAULT_GENERATION_ENDPOINT: &str = "http://localhost:3000/api/stitch-generate";

/// File written by `apply` when no CSS output is configured
pub const DEFAULT_CSS_OUTPUT: &str = "canvas-variables.css";
