//! Theme files: the JSON document format and a static CSS rendition.

use crate::error::{CanvasError, CanvasResult};
use crate::schema::{CanvasState, TRANSIENT_KEYS};
use crate::translation::{CssValue, to_css_properties};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

pub const SCHEMA_TAG: &str = "starseed-theme/v1";
pub const DEFAULT_EXPORT_NAME: &str = "Custom Canvas Theme";
pub const EXPORT_FILE_STEM: &str = "starseed-canvas-theme";

/// Top-level keys that mark a document as a canvas theme.
const MARKER_KEYS: &[&str] = &["palette", "typography"];

crate::schema::macros::keyword_enum! {
    pub enum ExportFormat {
        Json => "json",
        Css => "css",
    }
    default Json
}

impl ExportFormat {
    pub fn file_name(&self) -> String {
        format!("{EXPORT_FILE_STEM}.{}", self.as_str())
    }
}

/// Renders the exportable document wrapped in the versioned envelope.
///
/// Transient generated-code fields are left out.
pub fn serialize_json(
    state: &CanvasState,
    name: &str,
    generated: DateTime<Utc>,
) -> CanvasResult<String> {
    let Value::Object(document) = serde_json::to_value(state).map_err(CanvasError::Serialize)?
    else {
        return Err(CanvasError::InvalidFormat(
            "canvas state did not serialize to an object".to_string(),
        ));
    };

    let mut envelope = Map::new();
    envelope.insert("$schema".to_string(), Value::from(SCHEMA_TAG));
    envelope.insert("name".to_string(), Value::from(name));
    envelope.insert(
        "generated".to_string(),
        Value::from(generated.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    for (key, value) in document {
        if !TRANSIENT_KEYS.contains(&key.as_str()) {
            envelope.insert(key, value);
        }
    }

    serde_json::to_string_pretty(&Value::Object(envelope)).map_err(CanvasError::Serialize)
}

const CSS_GROUPS: &[(&str, &[&str])] = &[
    (
        "Palette",
        &[
            "--color-primary",
            "--color-secondary",
            "--color-accent",
            "--color-background",
            "--color-surface",
            "--color-text-primary",
            "--color-text-secondary",
            "--color-glass-border",
        ],
    ),
    (
        "Trinity axes",
        &[
            "--trinity-zenith",
            "--trinity-horizonte",
            "--trinity-nucleo",
            "--trinity-base",
        ],
    ),
    (
        "Typography",
        &[
            "--font-main",
            "--font-headline",
            "--font-code",
            "--font-size-base",
            "--font-scale-ratio",
            "--font-weight-header",
            "--font-weight-body",
            "--tracking-header",
            "--tracking-body",
        ],
    ),
    (
        "Effects",
        &[
            "--backdrop-blur",
            "--glass-saturation",
            "--glow-intensity",
            "--noise-opacity",
            "--refraction-index",
            "--chromatic-aberration",
            "--displacement-scale",
            "--elasticity",
        ],
    ),
    (
        "Geometry",
        &[
            "--radius-sm",
            "--radius-md",
            "--radius-lg",
            "--radius-xl",
            "--radius-pill",
            "--golden-ratio",
            "--dock-margin",
            "--dock-icon-size",
            "--dock-magnification",
            "--panel-blur",
        ],
    ),
];

/// Static `:root` block with the palette, typography, effects and geometry.
///
/// Values are formatted exactly as the live projection formats them.
pub fn serialize_css(state: &CanvasState) -> String {
    let properties = to_css_properties(state);
    let mut css = String::from(":root {\n");

    for (index, (title, names)) in CSS_GROUPS.iter().enumerate() {
        if index > 0 {
            css.push('\n');
        }
        css.push_str(&format!("  /* {title} */\n"));
        for name in *names {
            if let Some(CssValue::Set(value)) = properties.get(name) {
                css.push_str(&format!("  {name}: {value};\n"));
            }
        }
    }

    css.push_str("}\n");
    css
}

/// Parses an exported or hand-written theme document into a complete state.
///
/// A snapshot-shaped document (`{ "canvasState": { ... } }`) is unwrapped first. The document
/// must carry at least one marker section; everything it leaves out takes the default.
pub fn deserialize(text: &str) -> CanvasResult<CanvasState> {
    let value: Value = serde_json::from_str(text).map_err(|source| CanvasError::Parse {
        context: "theme file".to_string(),
        source,
    })?;

    let document = match value.get("canvasState") {
        Some(inner) if inner.is_object() => inner,
        _ => &value,
    };

    let Some(object) = document.as_object() else {
        return Err(CanvasError::InvalidFormat(
            "a theme file must be a JSON object".to_string(),
        ));
    };

    if !MARKER_KEYS.iter().any(|key| object.contains_key(*key)) {
        return Err(CanvasError::InvalidFormat(
            "not a canvas theme: expected a 'palette' or 'typography' section".to_string(),
        ));
    }

    CanvasState::from_partial(document)
}
