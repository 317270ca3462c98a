use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use std::time::Duration;

use super::{ChatProvider, ProviderError};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Keeps a single reply short enough for a chat bubble.
const MAX_COMPLETION_TOKENS: u32 = 350;

/// Client for the hosted OpenAI-compatible chat completions API.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl OpenAiProvider {
    pub fn new(
        api_key: SecretString,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model: model.into(),
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&json!({
                "model": self.model,
                "messages": [
                    { "role": "system", "content": system },
                    { "role": "user", "content": user },
                ],
                "max_tokens": MAX_COMPLETION_TOKENS,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        let content = payload
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedPayload(
                    "missing choices[0].message.content field".to_string(),
                )
            })?;

        if content.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }

        Ok(content.to_string())
    }
}
