//! The host application's own appearance store.
//!
//! The canvas never replaces this configuration: it merges its fragment in, and the host keeps
//! every field the canvas does not drive.

mod config;

pub use config::*;

use crate::error::{CanvasError, CanvasResult};
use crate::merge::deep_merge;
use crate::persistence::SharedStorage;
use crate::translation::StylePort;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const APPEARANCE_KEY: &str = "appearance-config";

const SYSTEM_FONT_STACK: &str = "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', \
                                 Roboto, 'Helvetica Neue', Arial, sans-serif";

static FONT_VARIABLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Inter", "var(--font-inter)"),
        ("Roboto", "var(--font-roboto)"),
        ("Outfit", "var(--font-outfit)"),
        ("Space Grotesk", "var(--font-headline)"),
        ("Source Code Pro", "var(--font-code)"),
        ("System", SYSTEM_FONT_STACK),
    ])
});

/// Resolves a font family (or full CSS stack) to the value of `--font-body`.
///
/// Known families map to the host's preloaded font variables, matched on the first family of
/// a stack. Anything else is passed through verbatim.
pub fn font_body_value(family: &str) -> String {
    let first = family
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '\'' || c == '"');

    match FONT_VARIABLES.get(first) {
        Some(variable) => (*variable).to_string(),
        None => family.to_string(),
    }
}

pub struct HostAppearanceStore {
    storage: SharedStorage,
    config: AppearanceConfig,
}

impl HostAppearanceStore {
    /// Loads the stored configuration, completing it from defaults.
    pub fn load(storage: SharedStorage) -> Self {
        let config = match storage.get(APPEARANCE_KEY) {
            Ok(Some(raw)) => Self::parse_stored(&raw).unwrap_or_else(|err| {
                log::error!("Failed to parse appearance config, using defaults: {err}");
                AppearanceConfig::default()
            }),
            Ok(None) => AppearanceConfig::default(),
            Err(err) => {
                log::warn!("Failed to read appearance config, using defaults: {err}");
                AppearanceConfig::default()
            }
        };
        Self { storage, config }
    }

    fn parse_stored(raw: &str) -> CanvasResult<AppearanceConfig> {
        let value: Value = serde_json::from_str(raw).map_err(|source| CanvasError::Parse {
            context: "appearance config".to_string(),
            source,
        })?;
        deep_merge(&AppearanceConfig::default(), &value)
    }

    pub fn config(&self) -> &AppearanceConfig {
        &self.config
    }

    /// Deep-merges `updates` into the configuration and persists the result.
    ///
    /// Nothing changes in memory unless the merged document validates and is written.
    pub fn update_config<P: Serialize + ?Sized>(
        &mut self,
        updates: &P,
    ) -> CanvasResult<&AppearanceConfig> {
        let next = deep_merge(&self.config, updates)?;
        self.persist(&next)?;
        self.config = next;
        Ok(&self.config)
    }

    /// Merges `updates` into one top-level section, e.g. `styling`.
    pub fn update_section(
        &mut self,
        section: &str,
        updates: &Value,
    ) -> CanvasResult<&AppearanceConfig> {
        let current = serde_json::to_value(&self.config).map_err(CanvasError::Serialize)?;
        if current.get(section).is_none() {
            return Err(CanvasError::InvalidFormat(format!(
                "unknown appearance section '{section}'"
            )));
        }

        let mut wrapper = Map::new();
        wrapper.insert(section.to_string(), updates.clone());
        self.update_config(&Value::Object(wrapper))
    }

    pub fn reset(&mut self) -> CanvasResult<()> {
        let defaults = AppearanceConfig::default();
        self.persist(&defaults)?;
        self.config = defaults;
        log::info!("Appearance config reset to defaults");
        Ok(())
    }

    fn persist(&self, config: &AppearanceConfig) -> CanvasResult<()> {
        let raw = serde_json::to_string(config).map_err(CanvasError::Serialize)?;
        self.storage.set(APPEARANCE_KEY, &raw)
    }

    /// Writes the host's own style variables.
    ///
    /// Conditional entries are removed when they do not apply, so re-applying after a change
    /// never leaves an old value behind.
    pub fn apply_styles(&self, port: &mut dyn StylePort) {
        let config = &self.config;

        if config.typography.font_family.is_empty() {
            port.remove_property("--font-body");
        } else {
            port.set_property("--font-body", &font_body_value(&config.typography.font_family));
        }
        port.set_property("--font-scale", &config.typography.font_size_scale.to_string());
        port.set_property("--radius", &format!("{}rem", config.styling.radius));
        port.set_property("--glass-blur", &format!("{}px", config.styling.glass_intensity));
        port.set_property("--glass-opacity", &config.styling.opacity.to_string());

        let background = &config.background;
        let body_background = match background.kind {
            _ if background.value.is_empty() => None,
            HostBackgroundKind::Image => Some(format!("url('{}')", background.value)),
            HostBackgroundKind::Solid | HostBackgroundKind::Gradient => {
                Some(background.value.clone())
            }
            HostBackgroundKind::Video => None,
        };
        match body_background {
            Some(value) => port.set_property("--body-background", &value),
            None => port.remove_property("--body-background"),
        }

        match background.animation {
            BackgroundAnimation::None => port.remove_property("--body-background-animation"),
            animation => port.set_property(
                "--body-background-animation",
                &format!("animate-bg-{animation}"),
            ),
        }

        if config.liquid_glass.apply_to_ui {
            port.set_property("--liquid-ui-enabled", "1");
        } else {
            port.remove_property("--liquid-ui-enabled");
        }
    }
}
