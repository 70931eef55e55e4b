use super::storage::{SharedStorage, Storage};
use super::timer::CoalescingTimer;
use crate::error::CanvasResult;
use crate::schema::CanvasState;
use crate::store::StateObserver;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub const AUTOSAVE_KEY: &str = "starseed-canvas-state";

/// Reads the autosaved document once at startup.
///
/// Missing or unreadable data falls back to the default document. A partial document is
/// completed from the default.
pub fn restore(storage: &dyn Storage) -> CanvasState {
    let raw = match storage.get(AUTOSAVE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("No autosaved canvas found, starting from defaults");
            return CanvasState::default();
        }
        Err(err) => {
            log::warn!("Failed to read autosaved canvas: {err}");
            return CanvasState::default();
        }
    };

    let restored = serde_json::from_str::<Value>(&raw)
        .map_err(|err| err.to_string())
        .and_then(|value| CanvasState::from_partial(&value).map_err(|err| err.to_string()));

    match restored {
        Ok(state) => {
            log::info!("Restored autosaved canvas ({} bytes)", raw.len());
            state
        }
        Err(err) => {
            log::warn!("Autosaved canvas is corrupt, using defaults: {err}");
            CanvasState::default()
        }
    }
}

/// Debounced writer of the live document.
///
/// Clones share the same timer and pending payload, so one clone can sit in the store's
/// observer list while another is kept for [`Autosaver::flush`].
#[derive(Clone)]
pub struct Autosaver {
    storage: SharedStorage,
    timer: Arc<Mutex<CoalescingTimer>>,
    pending: Arc<Mutex<Option<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Autosaver {
    pub fn new(storage: SharedStorage, window: Duration) -> Self {
        Self {
            storage,
            timer: Arc::new(Mutex::new(CoalescingTimer::new(window))),
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Serializes `state` now and arms the write timer. Only the latest payload is written.
    pub fn schedule(&self, state: &CanvasState) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("Failed to serialize canvas for autosave: {err}");
                return;
            }
        };
        *lock(&self.pending) = Some(payload);

        let storage = self.storage.clone();
        let pending = self.pending.clone();
        lock(&self.timer).schedule(move || {
            if let Err(err) = write_pending(storage.as_ref(), &pending) {
                log::error!("Autosave failed: {err}");
            }
        });
    }

    /// Writes any pending payload immediately and disarms the timer.
    ///
    /// Returns whether something was written.
    pub fn flush(&self) -> CanvasResult<bool> {
        lock(&self.timer).cancel();
        write_pending(self.storage.as_ref(), &self.pending)
    }

    pub fn has_pending(&self) -> bool {
        lock(&self.pending).is_some()
    }
}

/// Holds the pending lock through the write, so writes land in the order they were scheduled.
fn write_pending(storage: &dyn Storage, pending: &Mutex<Option<String>>) -> CanvasResult<bool> {
    let mut slot = lock(pending);
    let Some(payload) = slot.take() else {
        return Ok(false);
    };
    storage.set(AUTOSAVE_KEY, &payload)?;
    log::debug!("Autosaved canvas ({} bytes)", payload.len());
    Ok(true)
}

impl StateObserver for Autosaver {
    fn state_changed(&mut self, state: &CanvasState) {
        self.schedule(state);
    }
}
