use serde_json::{json, Value};

use crate::config::GenAiConfig;

use super::{PromptBundle, ProviderError, TextCompletionBackend};

/// HTTP adapter for the hosted text-generation service.
///
/// Speaks the foundation-model completion shape (`modelUri`,
/// `completionOptions`, `messages`) and reads the answer out of
/// `result.alternatives[0].message.text`, checking each level defensively
/// because the response schema has drifted across service revisions.
pub struct GenAiGateway {
    client: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiGateway {
    pub fn new(config: GenAiConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        Ok(Self { client, config })
    }

    async fn request_completion(&self, prompt: PromptBundle) -> Result<String, ProviderError> {
        let body = json!({
            "modelUri": self.config.model_uri,
            "completionOptions": {
                "stream": false,
                "temperature": 0.7,
                "maxTokens": 1000,
            },
            "messages": [
                { "role": "system", "text": prompt.system },
                { "role": "user", "text": prompt.user },
            ],
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Api-Key {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|err| ProviderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamStatus {
                code: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?;

        extract_completion_text(&payload)
    }
}

fn extract_completion_text(payload: &Value) -> Result<String, ProviderError> {
    let text = payload
        .get("result")
        .and_then(|result| result.get("alternatives"))
        .and_then(Value::as_array)
        .and_then(|alternatives| alternatives.first())
        .and_then(|alternative| alternative.get("message"))
        .and_then(|message| message.get("text"))
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ProviderError::MalformedResponse(
                "no text at result.alternatives[0].message.text".to_string(),
            )
        })?;

    if text.trim().is_empty() {
        return Err(ProviderError::MalformedResponse(
            "completion text is empty".to_string(),
        ));
    }

    Ok(text.to_string())
}

impl TextCompletionBackend for GenAiGateway {
    fn complete(
        &self,
        prompt: PromptBundle,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send {
        self.request_completion(prompt)
    }
}
