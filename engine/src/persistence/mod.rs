//! Durable storage: the storage port, debounced autosave and the saved theme library.
//!
//! Autosave and the library use separate keys and never read each other's data.

pub mod autosave;
pub mod library;
pub mod storage;
pub mod timer;

pub use autosave::{AUTOSAVE_KEY, Autosaver, restore};
pub use library::{LIBRARY_KEY, ThemeLibrary, ThemeSnapshot};
pub use storage::{FileStorage, MemoryStorage, SharedStorage, Storage};
pub use timer::CoalescingTimer;
