use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::providers::LlmProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai";

/// Client for any OpenAI-compatible chat-completions endpoint.
///
/// Groq exposes the same API under its own base URL, so both are served by
/// this type with different defaults.
pub struct OpenAIProvider {
    name: &'static str,
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create an OpenAI provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Self::from_config(
            "openai",
            config,
            timeout,
            "OPENAI_API_KEY",
            OPENAI_BASE_URL,
            "gpt-4o-mini",
        )
    }

    /// Create a Groq provider from configuration
    pub fn groq(config: &ProviderConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Self::from_config(
            "groq",
            config,
            timeout,
            "GROQ_API_KEY",
            GROQ_BASE_URL,
            "llama-3.3-70b-versatile",
        )
    }

    fn from_config(
        name: &'static str,
        config: &ProviderConfig,
        timeout: Duration,
        key_var: &str,
        default_base_url: &str,
        default_model: &str,
    ) -> Result<Self, ProviderError> {
        // Try config first, then fall back to environment variable
        let api_key = resolve_api_key(config, key_var)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        Ok(OpenAIProvider {
            name,
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            name: "openai",
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.3,
            max_tokens: 512,
        }
    }
}

/// Config key first, then the provider's conventional environment variable.
/// Blank values count as missing.
pub(crate) fn resolve_api_key(
    config: &ProviderConfig,
    key_var: &str,
) -> Result<String, ProviderError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            std::env::var(key_var)
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or_else(|| ProviderError::MissingApiKey(key_var.to_string()))
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        self.name
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ProviderError::UnexpectedShape("missing choices[0].message.content".to_string())
            })?
            .to_string();

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_complete() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer fake_api_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "choices": [{
                        "message": {
                            "content": "{\"title\":\"Chicken Curry\",\"price\":150}"
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "llama-3.3-70b-versatile".to_string(),
        );

        let result = provider.complete("chik cuy 150").await.unwrap();
        assert!(result.contains("Chicken Curry"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Rate limit reached"}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.complete("anything").await;
        assert!(matches!(result, Err(ProviderError::Request(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_unexpected_shape() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let provider = OpenAIProvider::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gpt-4o-mini".to_string(),
        );

        let result = provider.complete("anything").await;
        assert!(matches!(result, Err(ProviderError::UnexpectedShape(_))));
    }

    #[test]
    fn test_groq_defaults() {
        let config = ProviderConfig {
            api_key: Some("test-key".to_string()),
            ..Default::default()
        };
        let provider = OpenAIProvider::groq(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.provider_name(), "groq");
        assert_eq!(provider.base_url, GROQ_BASE_URL);
        assert_eq!(provider.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        let config = ProviderConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        // Config key is blank; only fails if the environment has no key either
        if std::env::var("OPENAI_API_KEY").is_err() {
            let result = OpenAIProvider::new(&config, Duration::from_secs(5));
            assert!(matches!(result, Err(ProviderError::MissingApiKey(_))));
        }
    }
}
