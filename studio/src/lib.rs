//! # Canvas Studio Library
//!
//! Command-line front end for the StarSeed design canvas. Each command dispatches the same
//! actions a canvas control would, against a session backed by JSON files in the data
//! directory.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line arguments
//! - [`commands`] - Command handlers and session wiring
//! - [`config`] - Configuration loading, validation and first-run setup
//! - [`error`] - Error types and centralized error reporting
//! - [`logger`] - Logging configuration
//! - [`validation`] - Input validation for names and paths
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::{AppError, AppResult};

pub use validation::Validator;
