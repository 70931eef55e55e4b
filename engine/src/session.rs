use crate::error::{CanvasError, CanvasResult};
use crate::export;
use crate::generation::ComponentGeneration;
use crate::host::HostAppearanceStore;
use crate::persistence::{
    Autosaver, CoalescingTimer, SharedStorage, ThemeLibrary, ThemeSnapshot, restore,
};
use crate::schema::{CanvasState, GenerationKind, GenerationRecord};
use crate::store::{CanvasAction, CanvasStore};
use crate::translation::{
    AppearanceFragment, CssProperties, CssSync, StylePort, apply_css, to_appearance_config,
    to_css_properties,
};
use chrono::Utc;
use serde_json::Value;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub autosave_window: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            autosave_window: CoalescingTimer::DEFAULT_WINDOW,
        }
    }
}

/// One editing session: the live document plus everything that reacts to it.
///
/// Every change goes through the store, whose observers schedule the autosave and refresh the
/// canvas CSS on `style_port` before `dispatch` returns. Opening a session needs a tokio
/// runtime because the autosave timer is spawned on it.
pub struct CanvasSession<P> {
    store: CanvasStore,
    autosaver: Autosaver,
    library: ThemeLibrary,
    host: HostAppearanceStore,
    style_port: P,
}

impl<P> CanvasSession<P>
where
    P: StylePort + Clone + Send + 'static,
{
    pub fn open(storage: SharedStorage, style_port: P, settings: SessionSettings) -> Self {
        let initial = restore(storage.as_ref());
        let host = HostAppearanceStore::load(storage.clone());
        let library = ThemeLibrary::new(storage.clone());
        let autosaver = Autosaver::new(storage, settings.autosave_window);

        let mut css_sync = CssSync::new(style_port.clone());
        css_sync.sync(&initial);

        let mut store = CanvasStore::new(initial);
        store.subscribe(Box::new(autosaver.clone()));
        store.subscribe(Box::new(css_sync));

        log::info!(
            "Canvas session opened (autosave window {:?})",
            settings.autosave_window
        );

        Self {
            store,
            autosaver,
            library,
            host,
            style_port,
        }
    }

    pub fn state(&self) -> &CanvasState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn dispatch(&mut self, action: CanvasAction) -> &CanvasState {
        self.store.dispatch(action)
    }

    pub fn dispatch_tagged(&mut self, tag: &str, payload: &Value) -> CanvasResult<&CanvasState> {
        self.store.dispatch_tagged(tag, payload)
    }

    /// Applies `payload` to the section named by its document key, e.g. `"palette"`.
    pub fn update_section(&mut self, section: &str, payload: &Value) -> CanvasResult<&CanvasState> {
        match CanvasAction::for_section(section, payload)? {
            Some(action) => Ok(self.store.dispatch(action)),
            None => Err(CanvasError::InvalidFormat(format!(
                "unknown canvas section '{section}' (expected one of: {})",
                CanvasAction::section_keys().collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    pub fn reset(&mut self) -> &CanvasState {
        self.store.dispatch(CanvasAction::Reset)
    }

    pub fn css_properties(&self) -> CssProperties {
        to_css_properties(self.store.state())
    }

    pub fn appearance_fragment(&self) -> AppearanceFragment {
        to_appearance_config(self.store.state())
    }

    /// Pushes the current document into the host: merges the appearance fragment into the
    /// host store, then refreshes the host's own styles and the canvas CSS.
    pub fn apply(&mut self) -> CanvasResult<AppearanceFragment> {
        let fragment = self.appearance_fragment();
        self.host.update_config(&fragment)?;
        self.host.apply_styles(&mut self.style_port);
        apply_css(&self.css_properties(), &mut self.style_port);
        log::info!("Applied canvas to host appearance");
        Ok(fragment)
    }

    /// Applies the document and appends it to the theme library.
    pub fn save_theme(&mut self, name: &str) -> CanvasResult<ThemeSnapshot> {
        self.apply()?;
        self.library.save(name, self.store.state())
    }

    /// Replaces the document with a saved snapshot.
    ///
    /// The canvas CSS reflects the snapshot when this returns; only the autosave waits for
    /// its window.
    pub fn load_theme(&mut self, id: &str) -> CanvasResult<&CanvasState> {
        let snapshot = self
            .library
            .get(id)
            .ok_or_else(|| CanvasError::SnapshotNotFound(id.to_string()))?;
        log::info!("Loading theme '{}' ({})", snapshot.name, snapshot.id);
        Ok(self
            .store
            .dispatch(CanvasAction::LoadState(Box::new(snapshot.canvas_state))))
    }

    pub fn delete_theme(&mut self, id: &str) -> CanvasResult<bool> {
        self.library.delete(id)
    }

    pub fn themes(&self) -> Vec<ThemeSnapshot> {
        self.library.list_newest_first()
    }

    /// Replaces the document with an imported theme file. Nothing changes on error.
    pub fn import(&mut self, text: &str) -> CanvasResult<&CanvasState> {
        let state = export::deserialize(text)?;
        Ok(self.store.dispatch(CanvasAction::LoadState(Box::new(state))))
    }

    pub fn export_json(&self, name: &str) -> CanvasResult<String> {
        export::serialize_json(self.store.state(), name, Utc::now())
    }

    pub fn export_css(&self) -> String {
        export::serialize_css(self.store.state())
    }

    /// Deep-merges a generated partial document onto the current one.
    ///
    /// The merge result is checked before anything is dispatched, so a malformed generation
    /// leaves the document untouched.
    pub fn apply_generated_theme(
        &mut self,
        prompt: &str,
        partial: &Value,
    ) -> CanvasResult<&CanvasState> {
        let mut next = self.store.state().merged_with(partial)?;
        let patch = next
            .ai_config
            .record_patch(generation_record(prompt, GenerationKind::Theme));
        next.ai_config.merge(patch);
        Ok(self.store.dispatch(CanvasAction::LoadState(Box::new(next))))
    }

    /// Stores generated component code in the transient fields and records the prompt.
    pub fn apply_generated_component(
        &mut self,
        prompt: &str,
        generation: &ComponentGeneration,
    ) -> &CanvasState {
        let patch = self
            .store
            .state()
            .ai_config
            .record_patch(generation_record(prompt, GenerationKind::Component));
        self.store.dispatch(CanvasAction::SetStitchCode {
            code: generation.best_code().to_string(),
            screen_id: Some(generation.screen_id.clone()).filter(|id| !id.is_empty()),
        });
        self.store.dispatch(CanvasAction::SetAiConfig(patch))
    }

    pub fn host(&self) -> &HostAppearanceStore {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HostAppearanceStore {
        &mut self.host
    }

    pub fn library(&self) -> &ThemeLibrary {
        &self.library
    }

    pub fn autosaver(&self) -> &Autosaver {
        &self.autosaver
    }

    pub fn style_port(&self) -> &P {
        &self.style_port
    }

    /// Writes any pending autosave. Call before the process exits.
    pub fn shutdown(&self) -> CanvasResult<()> {
        if self.autosaver.flush()? {
            log::info!("Flushed pending autosave on shutdown");
        }
        Ok(())
    }
}

fn generation_record(prompt: &str, kind: GenerationKind) -> GenerationRecord {
    GenerationRecord {
        id: format!("gen_{}", Uuid::new_v4().simple()),
        prompt: prompt.to_string(),
        kind,
        timestamp: Utc::now().timestamp_millis(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{AUTOSAVE_KEY, MemoryStorage, Storage};
    use crate::translation::MemoryStylePort;
    use claims::{assert_err, assert_ok, assert_some};
    use serde_json::json;
    use std::sync::Arc;

    fn open() -> (MemoryStorage, MemoryStylePort, CanvasSession<MemoryStylePort>) {
        let storage = MemoryStorage::new();
        let port = MemoryStylePort::new();
        let session = CanvasSession::open(
            Arc::new(storage.clone()),
            port.clone(),
            SessionSettings::default(),
        );
        (storage, port, session)
    }

    #[tokio::test(start_paused = true)]
    async fn open_applies_css_for_the_restored_state() {
        let storage = MemoryStorage::new();
        assert_ok!(storage.set(AUTOSAVE_KEY, r##"{ "palette": { "primary": "#123123" } }"##));
        let port = MemoryStylePort::new();
        let session =
            CanvasSession::open(Arc::new(storage), port.clone(), SessionSettings::default());

        assert_eq!(session.state().palette.primary, "#123123");
        assert_eq!(port.get("--color-primary").as_deref(), Some("#123123"));
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_updates_css_before_autosave_fires() {
        let (storage, port, mut session) = open();
        assert_ok!(session.update_section("palette", &json!({ "accent": "#ABABAB" })));

        assert_eq!(port.get("--color-accent").as_deref(), Some("#ABABAB"));
        assert_eq!(storage.write_count(), 0);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(storage.write_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn apply_merges_fragment_into_host_store() {
        let (_, port, mut session) = open();
        assert_ok!(session.update_section("geometry", &json!({ "radiusMd": 16 })));

        let fragment = assert_ok!(session.apply());
        assert_eq!(fragment.styling.radius, 1.0);
        assert_eq!(session.host().config().styling.radius, 1.0);
        // Host-only fields survive the merge.
        assert_eq!(session.host().config().liquid_glass.distort_width, 0.3);
        assert_eq!(port.get("--radius").as_deref(), Some("1rem"));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_section_is_an_error() {
        let (_, _, mut session) = open();
        let err = assert_err!(session.update_section("sparkles", &json!({})));
        let message = err.to_string();
        assert!(message.contains("'sparkles'"));
        assert!(message.contains("palette, trinity, typography"));
        assert_eq!(session.revision(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn generated_theme_records_history() {
        let (_, _, mut session) = open();
        let state = assert_ok!(session.apply_generated_theme(
            "ocean night",
            &json!({ "palette": { "background": "#001122" } })
        ));
        assert_eq!(state.palette.background, "#001122");
        assert_eq!(state.ai_config.last_prompt, "ocean night");
        let record = assert_some!(state.ai_config.generation_history.last());
        assert_eq!(record.kind, GenerationKind::Theme);
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_generated_theme_is_not_applied() {
        let (_, _, mut session) = open();
        assert_err!(session.apply_generated_theme(
            "broken",
            &json!({ "effects": { "backdropBlur": "very" } })
        ));
        assert_eq!(*session.state(), CanvasState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn generated_component_sets_stitch_code() {
        let (_, _, mut session) = open();
        let generation = ComponentGeneration {
            screen_id: "screen-7".to_string(),
            code: "export function Hero() {}".to_string(),
            ..Default::default()
        };
        let state = session.apply_generated_component("hero", &generation);
        assert_eq!(state.stitch_code, "export function Hero() {}");
        assert_eq!(state.stitch_screen_id, "screen-7");
        assert_eq!(state.ai_config.generation_history.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_autosave() {
        let (storage, _, mut session) = open();
        session.reset();
        assert_ok!(session.shutdown());
        assert_eq!(storage.write_count(), 1);
    }
}
