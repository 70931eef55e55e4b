use super::storage::SharedStorage;
use crate::error::{CanvasError, CanvasResult};
use crate::export;
use crate::schema::CanvasState;
use crate::translation::{AppearanceFragment, to_appearance_config};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const LIBRARY_KEY: &str = "starseed-saved-themes";
pub const IMPORTED_THEME_NAME: &str = "Imported theme";

/// A named, saved copy of the canvas document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub id: String,
    pub name: String,
    pub date: DateTime<Utc>,
    pub canvas_state: CanvasState,
    #[serde(default)]
    pub appearance_config: AppearanceFragment,
}

impl ThemeSnapshot {
    /// Captures `state` together with its host appearance fragment.
    pub fn capture(name: impl Into<String>, state: &CanvasState) -> Self {
        Self {
            id: new_snapshot_id(),
            name: name.into(),
            date: Utc::now(),
            canvas_state: state.clone(),
            appearance_config: to_appearance_config(state),
        }
    }
}

pub fn new_snapshot_id() -> String {
    format!("theme_{}", Uuid::new_v4().simple())
}

/// Saved themes, stored as one list under [`LIBRARY_KEY`].
///
/// Every mutation reads the whole list, changes it and writes it back.
#[derive(Clone)]
pub struct ThemeLibrary {
    storage: SharedStorage,
}

impl ThemeLibrary {
    pub fn new(storage: SharedStorage) -> Self {
        Self { storage }
    }

    /// All snapshots in insertion order. Unreadable data reads as an empty library.
    pub fn list(&self) -> Vec<ThemeSnapshot> {
        match self.read_list() {
            Ok(themes) => themes,
            Err(err) => {
                log::warn!("Saved theme library is unreadable, treating it as empty: {err}");
                Vec::new()
            }
        }
    }

    pub fn list_newest_first(&self) -> Vec<ThemeSnapshot> {
        let mut themes = self.list();
        themes.sort_by(|a, b| b.date.cmp(&a.date));
        themes
    }

    /// Strict read: fails instead of falling back when the stored list is corrupt.
    pub fn read_list(&self) -> CanvasResult<Vec<ThemeSnapshot>> {
        match self.storage.get(LIBRARY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| CanvasError::Parse {
                context: "saved theme library".to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: &str) -> Option<ThemeSnapshot> {
        self.list().into_iter().find(|theme| theme.id == id)
    }

    pub fn save(&self, name: &str, state: &CanvasState) -> CanvasResult<ThemeSnapshot> {
        let snapshot = ThemeSnapshot::capture(name, state);
        self.append(snapshot.clone())?;
        log::info!("Saved theme '{}' as {}", snapshot.name, snapshot.id);
        Ok(snapshot)
    }

    /// Removes the snapshot with `id`. Returns whether one was removed.
    pub fn delete(&self, id: &str) -> CanvasResult<bool> {
        let mut themes = self.list();
        let before = themes.len();
        themes.retain(|theme| theme.id != id);
        if themes.len() == before {
            return Ok(false);
        }
        self.write_list(&themes)?;
        log::info!("Deleted theme {id}");
        Ok(true)
    }

    pub fn export_snapshot(&self, id: &str) -> CanvasResult<String> {
        let snapshot = self
            .get(id)
            .ok_or_else(|| CanvasError::SnapshotNotFound(id.to_string()))?;
        serde_json::to_string_pretty(&snapshot).map_err(CanvasError::Serialize)
    }

    /// Appends a theme from an exported document.
    ///
    /// Accepts everything [`export::deserialize`] accepts, including exported snapshots. The
    /// name comes from `name`, then the document's own `name`, then a fixed fallback. The
    /// imported copy always gets a fresh id.
    pub fn import_snapshot(&self, text: &str, name: Option<&str>) -> CanvasResult<ThemeSnapshot> {
        let state = export::deserialize(text)?;
        let name = match name {
            Some(name) => name.to_string(),
            None => document_name(text).unwrap_or_else(|| IMPORTED_THEME_NAME.to_string()),
        };
        self.save(&name, &state)
    }

    fn append(&self, snapshot: ThemeSnapshot) -> CanvasResult<()> {
        let mut themes = self.list();
        themes.push(snapshot);
        self.write_list(&themes)
    }

    fn write_list(&self, themes: &[ThemeSnapshot]) -> CanvasResult<()> {
        let raw = serde_json::to_string(themes).map_err(CanvasError::Serialize)?;
        self.storage.set(LIBRARY_KEY, &raw)
    }
}

fn document_name(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    value
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use crate::persistence::storage::Storage;
    use claims::{assert_err, assert_none, assert_ok, assert_some};
    use std::sync::Arc;

    fn library() -> (MemoryStorage, ThemeLibrary) {
        let storage = MemoryStorage::new();
        let library = ThemeLibrary::new(Arc::new(storage.clone()));
        (storage, library)
    }

    #[test]
    fn save_then_get_and_delete() {
        let (_, library) = library();
        let mut state = CanvasState::default();
        state.palette.primary = "#FF00FF".to_string();

        let saved = assert_ok!(library.save("Magenta", &state));
        assert!(saved.id.starts_with("theme_"));
        assert_eq!(saved.appearance_config, to_appearance_config(&state));

        let loaded = assert_some!(library.get(&saved.id));
        assert_eq!(loaded.canvas_state, state);

        assert!(assert_ok!(library.delete(&saved.id)));
        assert!(!assert_ok!(library.delete(&saved.id)));
        assert_none!(library.get(&saved.id));
    }

    #[test]
    fn ids_are_unique() {
        let (_, library) = library();
        let a = assert_ok!(library.save("A", &CanvasState::default()));
        let b = assert_ok!(library.save("A", &CanvasState::default()));
        assert_ne!(a.id, b.id);
        assert_eq!(library.list().len(), 2);
    }

    #[test]
    fn corrupt_list_reads_empty_and_is_replaced_on_write() {
        let (storage, library) = library();
        assert_ok!(storage.set(LIBRARY_KEY, "[{ broken"));

        assert!(library.list().is_empty());
        assert_err!(library.read_list());

        assert_ok!(library.save("Fresh", &CanvasState::default()));
        assert_eq!(assert_ok!(library.read_list()).len(), 1);
    }

    #[test]
    fn exported_snapshot_imports_as_new_record() {
        let (_, library) = library();
        let mut state = CanvasState::default();
        state.typography.base_size = 18.0;
        let original = assert_ok!(library.save("Large type", &state));

        let text = assert_ok!(library.export_snapshot(&original.id));
        let imported = assert_ok!(library.import_snapshot(&text, None));

        assert_ne!(imported.id, original.id);
        assert_eq!(imported.name, "Large type");
        assert_eq!(imported.canvas_state.typography.base_size, 18.0);
    }

    #[test]
    fn export_of_unknown_id_fails() {
        let (_, library) = library();
        let err = library.export_snapshot("theme_missing").unwrap_err();
        assert!(matches!(err, CanvasError::SnapshotNotFound(_)));
    }
}
