//! Boundary to the remote generation service.
//!
//! The service is opaque: it receives a prompt and returns either component code or, in theme
//! mode, model text containing a partial canvas document.

mod client;

pub use client::GenerationClient;

use crate::error::{CanvasError, CanvasResult};
use crate::schema::macros::keyword_enum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

keyword_enum! {
    pub enum DeviceType {
        Desktop => "DESKTOP",
        Mobile => "MOBILE",
        Tablet => "TABLET",
    }
    default Desktop
}

keyword_enum! {
    pub enum ModelId {
        Gemini3Pro => "GEMINI_3_PRO",
        Gemini3Flash => "GEMINI_3_FLASH",
    }
    default Gemini3Flash
}

keyword_enum! {
    pub enum GenerationMode {
        Component => "component",
        Theme => "theme",
    }
    default Component
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub device_type: DeviceType,
    pub model_id: ModelId,
    pub mode: GenerationMode,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            device_type: DeviceType::default(),
            model_id: ModelId::default(),
            mode: GenerationMode::default(),
        }
    }

    pub fn with_device(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    pub fn with_model(mut self, model_id: ModelId) -> Self {
        self.model_id = model_id;
        self
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(CanvasError::InvalidFormat("Prompt is required".to_string()));
        }
        Ok(())
    }
}

/// Result of one generation call.
///
/// `fallback` is set when the service could not reach its model and returned a local
/// template instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentGeneration {
    pub screen_id: String,
    pub html: String,
    pub css: String,
    pub code: String,
    pub suggestions: Option<Value>,
    pub fallback: bool,
}

impl ComponentGeneration {
    /// The code to store in the canvas; `html` when `code` is empty.
    pub fn best_code(&self) -> &str {
        if self.code.is_empty() {
            &self.html
        } else {
            &self.code
        }
    }
}

/// Extracts a partial canvas document from model output.
///
/// Takes the first fenced ```json block if there is one, otherwise the whole text. The result
/// must be a JSON object.
pub fn parse_theme_response(text: &str) -> CanvasResult<Value> {
    let body = fenced_json(text).unwrap_or(text).trim();
    let value: Value = serde_json::from_str(body).map_err(|source| CanvasError::Parse {
        context: "generated theme".to_string(),
        source,
    })?;

    if value.is_object() {
        Ok(value)
    } else {
        Err(CanvasError::InvalidFormat(
            "generated theme must be a JSON object".to_string(),
        ))
    }
}

fn fenced_json(text: &str) -> Option<&str> {
    const FENCE: &str = "```json";
    let start = text.find(FENCE)? + FENCE.len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use serde_json::json;

    #[test]
    fn request_uses_wire_names() {
        let request = GenerationRequest::new("pricing table")
            .with_device(DeviceType::Tablet)
            .with_model(ModelId::Gemini3Pro);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "prompt": "pricing table",
                "deviceType": "TABLET",
                "modelId": "GEMINI_3_PRO",
                "mode": "component"
            })
        );
    }

    #[test]
    fn blank_prompt_is_rejected() {
        assert_err!(GenerationRequest::new("   ").validate());
        assert_ok!(GenerationRequest::new("hero").validate());
    }

    #[test]
    fn theme_response_extracts_fenced_block() {
        let text = "Here is your theme:\n```json\n{ \"palette\": { \"primary\": \"#00D4FF\" } }\n```\nEnjoy.";
        let value = assert_ok!(parse_theme_response(text));
        assert_eq!(value["palette"]["primary"], json!("#00D4FF"));
    }

    #[test]
    fn theme_response_accepts_bare_json_and_rejects_non_objects() {
        assert_ok!(parse_theme_response(r#"{"typography": {"baseSize": 15}}"#));
        assert_err!(parse_theme_response("[1, 2, 3]"));
        assert_err!(parse_theme_response("no theme here"));
    }

    #[test]
    fn component_generation_tolerates_missing_fields() {
        let generation: ComponentGeneration =
            serde_json::from_value(json!({ "html": "<main/>", "suggestions": null })).unwrap();
        assert_eq!(generation.best_code(), "<main/>");
        assert!(!generation.fallback);
    }
}
