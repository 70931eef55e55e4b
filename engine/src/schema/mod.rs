//! The canvas document: every editable aspect of a theme as one typed, nested value.
//!
//! Each section is a plain record with a hard-coded default and a matching `*Patch` type used
//! by the reducer. The JSON form (camelCase keys) is the portable document format shared by
//! autosave, the theme library and export files.

pub(crate) mod macros;

pub mod assist;
pub mod chrome;
pub mod components;
pub mod controls;
pub mod effects;
pub mod geometry;
pub mod palette;
pub mod typography;

pub use assist::{AiConfig, AiConfigPatch, GenerationKind, GenerationRecord, UiFlags, UiFlagsPatch};
pub use chrome::{
    AUTO_SELECTION_COLOR, Backgrounds, BackgroundsPatch, Iconography, IconographyPatch,
    Secondary, SecondaryPatch, Widgets, WidgetsPatch,
};
pub use components::{ButtonStyle, Components, ComponentsPatch};
pub use controls::{
    Avatars, AvatarsPatch, Dialogs, DialogsPatch, LayoutConfig, LayoutConfigPatch, Nav, NavPatch,
    ProgressBars, ProgressBarsPatch, TabsConfig, TabsConfigPatch, Toasts, ToastsPatch, Toggles,
    TogglesPatch,
};
pub use effects::{Effects, EffectsPatch, Environment, EnvironmentPatch, Shadows, ShadowsPatch};
pub use geometry::{Geometry, GeometryPatch, Positioning, PositioningPatch};
pub use palette::{Palette, PalettePatch, Trinity, TrinityAxis, TrinityAxisPatch};
pub use typography::{Typography, TypographyPatch};

use crate::error::CanvasResult;
use crate::merge;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level keys of the document, in document order.
pub const SECTION_KEYS: &[&str] = &[
    "palette",
    "typography",
    "components",
    "effects",
    "environment",
    "geometry",
    "shadows",
    "iconography",
    "positioning",
    "widgets",
    "backgrounds",
    "secondary",
    "aiConfig",
    "dialogs",
    "tabsConfig",
    "toggles",
    "avatars",
    "progressBars",
    "toasts",
    "nav",
    "ui",
    "layoutConfig",
];

/// Keys holding in-progress generated code. They are never exported.
pub const TRANSIENT_KEYS: &[&str] = &["stitchCode", "stitchScreenId"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasState {
    pub palette: Palette,
    pub typography: Typography,
    pub components: Components,
    pub effects: Effects,
    pub environment: Environment,
    pub geometry: Geometry,
    pub shadows: Shadows,
    pub iconography: Iconography,
    pub positioning: Positioning,
    pub widgets: Widgets,
    pub backgrounds: Backgrounds,
    pub secondary: Secondary,
    pub ai_config: AiConfig,
    pub dialogs: Dialogs,
    pub tabs_config: TabsConfig,
    pub toggles: Toggles,
    pub avatars: Avatars,
    pub progress_bars: ProgressBars,
    pub toasts: Toasts,
    pub nav: Nav,
    pub ui: UiFlags,
    pub layout_config: LayoutConfig,
    pub stitch_code: String,
    pub stitch_screen_id: String,
}

impl CanvasState {
    /// Completes a partial document by deep-merging it onto the default.
    ///
    /// This is the single bulk-load path: import, autosave restore and generated themes all
    /// go through it, so every section is present afterwards.
    pub fn from_partial(partial: &Value) -> CanvasResult<Self> {
        merge::deep_merge(&CanvasState::default(), partial)
    }

    /// Deep-merges `partial` onto a copy of this state.
    pub fn merged_with(&self, partial: &Value) -> CanvasResult<Self> {
        merge::deep_merge(self, partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;
    use serde_json::json;

    #[test]
    fn default_document_contains_every_section() {
        let value = serde_json::to_value(CanvasState::default()).unwrap();
        let object = value.as_object().unwrap();
        for key in SECTION_KEYS.iter().chain(TRANSIENT_KEYS) {
            assert!(object.contains_key(*key), "missing section {key}");
        }
        assert_eq!(object.len(), SECTION_KEYS.len() + TRANSIENT_KEYS.len());
    }

    #[test]
    fn from_partial_fills_missing_sections() {
        let state = assert_ok!(CanvasState::from_partial(&json!({
            "palette": { "primary": "#FF0000" }
        })));
        assert_eq!(state.palette.primary, "#FF0000");
        assert_eq!(state.palette.secondary, Palette::default().secondary);
        assert_eq!(state.geometry, Geometry::default());
    }

    #[test]
    fn trinity_defaults_match_document() {
        let state = CanvasState::default();
        assert_eq!(state.palette.trinity.zenith.active, "#10B981");
        assert_eq!(state.palette.trinity.nucleo.active, "#F59E0B");
        assert_eq!(state.palette.trinity.active(TrinityAxis::Base), "#8B5CF6");
    }
}
