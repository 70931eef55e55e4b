//! # Canvas Engine
//!
//! Configuration state and style synchronization for the StarSeed design canvas. The canvas
//! edits one nested theme document; this library owns that document, persists it, and
//! translates it into the host application's appearance configuration and CSS variables.
//!
//! ## Modules
//!
//! - [`schema`] - The canvas document and its section patches
//! - [`store`] - Actions, the reducer and the observable store
//! - [`merge`] - Deep merge shared by every bulk-load path
//! - [`persistence`] - Storage port, debounced autosave and the theme library
//! - [`translation`] - Appearance fragment, CSS projection and value ranges
//! - [`host`] - The host application's own appearance store
//! - [`export`] - Theme file import and export
//! - [`generation`] - Client for the remote generation service
//! - [`session`] - Wiring of all of the above for one editing session
//! - [`error`] - Error type shared by the modules

pub mod error;
pub mod export;
pub mod generation;
pub mod host;
pub mod merge;
pub mod persistence;
pub mod schema;
pub mod session;
pub mod store;
pub mod translation;

pub use error::{CanvasError, CanvasResult};
pub use schema::CanvasState;
pub use session::{CanvasSession, SessionSettings};
pub use store::{CanvasAction, CanvasStore};
