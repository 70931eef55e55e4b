use super::StudioSession;
use crate::cli::GenerateCommand;
use crate::config::GenerationConfig;
use crate::error::AppResult;
use engine::generation::{GenerationClient, GenerationMode, GenerationRequest};
use serde_json::Value;
use std::io::Write;

pub async fn run(
    session: &mut StudioSession,
    config: &GenerationConfig,
    action: GenerateCommand,
    out: &mut dyn Write,
) -> AppResult<()> {
    let client = GenerationClient::new(config.endpoint(), config.timeout())?;

    match action {
        GenerateCommand::Component {
            prompt,
            device,
            model,
        } => {
            let request = GenerationRequest::new(prompt.as_str())
                .with_device(device.unwrap_or_else(|| config.device()))
                .with_model(model.unwrap_or_else(|| config.model()))
                .with_mode(GenerationMode::Component);
            let generation = client.generate(&request).await?;
            session.apply_generated_component(&prompt, &generation);

            if generation.fallback {
                writeln!(out, "The service returned its fallback template")?;
            }
            writeln!(
                out,
                "Stored {} bytes of generated code (screen {})",
                generation.best_code().len(),
                if generation.screen_id.is_empty() {
                    "none"
                } else {
                    generation.screen_id.as_str()
                }
            )?;
        }
        GenerateCommand::Theme { prompt, model } => {
            let request = GenerationRequest::new(prompt.as_str())
                .with_device(config.device())
                .with_model(model.unwrap_or_else(|| config.model()));
            let partial = client.generate_theme(request).await?;
            session.apply_generated_theme(&prompt, &partial)?;

            let sections: Vec<&str> = match &partial {
                Value::Object(map) => map.keys().map(String::as_str).collect(),
                _ => Vec::new(),
            };
            writeln!(out, "Merged generated theme into: {}", sections.join(", "))?;
        }
    }
    Ok(())
}
