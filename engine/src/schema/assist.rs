use super::macros::{keyword_enum, section};
use serde::{Deserialize, Serialize};

keyword_enum! {
    pub enum GenerationKind {
        Component => "component",
        Icon => "icon",
        Layout => "layout",
        Theme => "theme",
    }
    default Component
}

keyword_enum! {
    pub enum AssistModel {
        GeminiPro => "gemini-pro",
        GeminiUltra => "gemini-ultra",
    }
    default GeminiPro
}

/// One entry of the generation history. `timestamp` is Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub id: String,
    pub prompt: String,
    #[serde(rename = "type")]
    pub kind: GenerationKind,
    pub timestamp: i64,
}

section! {
    pub struct AiConfig / AiConfigPatch {
        last_prompt: String = String::new(),
        generation_history: Vec<GenerationRecord> = Vec::new(),
        creativity_level: f64 = 0.7,
        model: AssistModel = AssistModel::GeminiPro,
    }
}

impl AiConfig {
    /// Patch that appends `record` and remembers its prompt.
    ///
    /// History is an array field, so the patch carries the whole new list.
    pub fn record_patch(&self, record: GenerationRecord) -> AiConfigPatch {
        let mut history = self.generation_history.clone();
        let prompt = record.prompt.clone();
        history.push(record);
        AiConfigPatch {
            last_prompt: Some(prompt),
            generation_history: Some(history),
            ..Default::default()
        }
    }
}

section! {
    /// Editor-only flags. Nothing here reaches the host application.
    pub struct UiFlags / UiFlagsPatch {
        active_highlight: Option<String> = None,
        settings_open: bool = false,
        last_anim_trigger: u64 = 0,
    }
}
