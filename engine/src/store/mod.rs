//! The single owner of the canvas document.

mod actions;
mod reducer;

pub use actions::CanvasAction;
pub use reducer::reduce;

use crate::error::CanvasResult;
use crate::schema::CanvasState;
use serde_json::Value;

/// Reacts to every committed state change.
///
/// Observers run synchronously inside [`CanvasStore::dispatch`], in subscription order.
pub trait StateObserver: Send {
    fn state_changed(&mut self, state: &CanvasState);
}

pub struct CanvasStore {
    state: CanvasState,
    observers: Vec<Box<dyn StateObserver>>,
    revision: u64,
}

impl CanvasStore {
    pub fn new(initial: CanvasState) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            revision: 0,
        }
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    /// Number of committed transitions since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Drops all observers and returns them.
    pub fn replace_observers(
        &mut self,
        observers: Vec<Box<dyn StateObserver>>,
    ) -> Vec<Box<dyn StateObserver>> {
        std::mem::replace(&mut self.observers, observers)
    }

    pub fn dispatch(&mut self, action: CanvasAction) -> &CanvasState {
        log::debug!("Dispatching {} (revision {})", action.tag(), self.revision + 1);

        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
        self.revision += 1;

        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
        &self.state
    }

    /// Dispatches a wire-tagged action. Unknown tags leave the state untouched.
    pub fn dispatch_tagged(&mut self, tag: &str, payload: &Value) -> CanvasResult<&CanvasState> {
        match CanvasAction::from_tagged(tag, payload)? {
            Some(action) => Ok(self.dispatch(action)),
            None => {
                log::debug!("Ignoring unknown action tag '{tag}'");
                Ok(&self.state)
            }
        }
    }
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new(CanvasState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl StateObserver for Recorder {
        fn state_changed(&mut self, state: &CanvasState) {
            self.0.lock().unwrap().push(state.palette.primary.clone());
        }
    }

    #[test]
    fn observers_see_every_committed_state() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = CanvasStore::default();
        store.subscribe(Box::new(Recorder(seen.clone())));

        assert_ok!(store.dispatch_tagged("SET_PALETTE", &json!({ "primary": "#010101" })));
        assert_ok!(store.dispatch_tagged("SET_PALETTE", &json!({ "primary": "#020202" })));

        assert_eq!(*seen.lock().unwrap(), vec!["#010101", "#020202"]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn unknown_tag_is_a_silent_no_op() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = CanvasStore::default();
        store.subscribe(Box::new(Recorder(seen.clone())));

        let state = assert_ok!(store.dispatch_tagged("SET_HOLOGRAM", &json!({ "x": 1 })));
        assert_eq!(*state, CanvasState::default());
        assert_eq!(store.revision(), 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_leaves_state_untouched() {
        let mut store = CanvasStore::default();
        assert_err!(store.dispatch_tagged("SET_EFFECTS", &json!({ "backdropBlur": "lots" })));
        assert_eq!(*store.state(), CanvasState::default());
    }

    #[test]
    fn null_clears_nullable_fields() {
        let mut store = CanvasStore::default();
        assert_ok!(store.dispatch_tagged("SET_UI", &json!({ "activeHighlight": "buttons" })));
        assert_eq!(store.state().ui.active_highlight.as_deref(), Some("buttons"));

        assert_ok!(store.dispatch_tagged("SET_UI", &json!({ "activeHighlight": null })));
        assert_eq!(store.state().ui.active_highlight, None);

        assert_ok!(store.dispatch_tagged("SET_BACKGROUNDS", &json!({ "patternOpacity": 0.4 })));
        assert_ok!(store.dispatch_tagged(
            "SET_BACKGROUNDS",
            &json!({ "patternOpacity": null, "blur": 3 })
        ));
        assert_eq!(store.state().backgrounds.pattern_opacity, None);
        assert_eq!(store.state().backgrounds.blur, 3.0);
    }

    #[test]
    fn null_for_a_required_field_is_rejected() {
        let mut store = CanvasStore::default();
        assert_err!(store.dispatch_tagged("SET_PALETTE", &json!({ "primary": null })));
        assert_eq!(*store.state(), CanvasState::default());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn replaced_observers_stop_receiving_changes() {
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        let mut store = CanvasStore::default();
        store.subscribe(Box::new(Recorder(first.clone())));

        let previous = store.replace_observers(vec![Box::new(Recorder(second.clone()))]);
        assert_eq!(previous.len(), 1);
        assert_ok!(store.dispatch_tagged("SET_PALETTE", &json!({ "primary": "#030303" })));

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(*second.lock().unwrap(), vec!["#030303"]);
    }
}
