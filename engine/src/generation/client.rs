use super::{ComponentGeneration, GenerationMode, GenerationRequest, parse_theme_response};
use crate::error::{CanvasError, CanvasResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the generation endpoint. Requests are never retried.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> CanvasResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CanvasError::Http(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, request: &GenerationRequest) -> CanvasResult<ComponentGeneration> {
        request.validate()?;
        log::info!(
            "Requesting {} generation ({}, {}) from {}",
            request.mode,
            request.device_type,
            request.model_id,
            self.endpoint
        );

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            log::warn!("Generation failed with HTTP {}: {message}", status.as_u16());
            return Err(CanvasError::Generation {
                status: status.as_u16(),
                message,
            });
        }

        let generation: ComponentGeneration = response.json().await?;
        if generation.fallback {
            log::warn!("Generation service returned its local fallback template");
        }
        Ok(generation)
    }

    /// Runs a theme-mode generation and returns the partial document it produced.
    pub async fn generate_theme(&self, request: GenerationRequest) -> CanvasResult<Value> {
        let request = request.with_mode(GenerationMode::Theme);
        let generation = self.generate(&request).await?;
        parse_theme_response(generation.best_code())
    }
}
