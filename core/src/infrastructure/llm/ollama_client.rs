use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::domain::{
    analysis::ports::LlmClient,
    common::{LlmConfig, entities::app_errors::CoreError},
};

/// Client for an Ollama server. Vision, text generation and embeddings go
/// through the same host with per-concern model ids from config. Calls are
/// bounded by an explicit request timeout; generation against a vision
/// model can legitimately take minutes on constrained hardware.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: LlmConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct EmbedRequest {
    model: String,
    input: String,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Value,
}

impl OllamaClient {
    pub fn new(config: LlmConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    async fn call_generate(&self, request: GenerateRequest) -> Result<String, CoreError> {
        let url = format!("{}/api/generate", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama generate request failed: {}", e);
                CoreError::ExternalService(format!("generation request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Ollama generate error: {} - {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "generation returned {status}: {error_text}"
            )));
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            error!("failed to parse Ollama generate response: {}", e);
            CoreError::ExternalService(format!("unparseable generation response: {e}"))
        })?;

        Ok(generated.response)
    }
}

/// The embed endpoint batches: it returns one row per input. Single-input
/// calls unwrap to that row; anything else is left for the codec to judge.
fn first_embedding(embeddings: Value) -> Value {
    match embeddings {
        Value::Array(mut rows) if matches!(rows.first(), Some(Value::Array(_))) => rows.remove(0),
        other => other,
    }
}

impl LlmClient for OllamaClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        self.call_generate(GenerateRequest {
            model: self.config.vision_model.clone(),
            prompt,
            stream: false,
            images: Some(vec![base64_image]),
        })
        .await
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_generate(GenerateRequest {
            model: self.config.text_model.clone(),
            prompt,
            stream: false,
            images: None,
        })
        .await
    }

    async fn embed(&self, input: String) -> Result<Value, CoreError> {
        let url = format!("{}/api/embed", self.config.base_url);

        let request = EmbedRequest {
            model: self.config.embedding_model.clone(),
            input,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama embed request failed: {}", e);
                CoreError::ExternalService(format!("embedding request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Ollama embed error: {} - {}", status, error_text);
            return Err(CoreError::ExternalService(format!(
                "embedding returned {status}: {error_text}"
            )));
        }

        let embedded: EmbedResponse = response.json().await.map_err(|e| {
            error!("failed to parse Ollama embed response: {}", e);
            CoreError::ExternalService(format!("unparseable embedding response: {e}"))
        })?;

        Ok(first_embedding(embedded.embeddings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_the_single_batch_row() {
        assert_eq!(
            first_embedding(json!([[1.0, 2.0], [3.0, 4.0]])),
            json!([1.0, 2.0])
        );
    }

    #[test]
    fn leaves_flat_and_odd_shapes_to_the_codec() {
        assert_eq!(first_embedding(json!([1.0, 2.0])), json!([1.0, 2.0]));
        assert_eq!(first_embedding(json!("weird")), json!("weird"));
    }
}
