use crate::config::{AiConfig, ProviderConfig};
use crate::error::ProviderError;
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider};
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ProviderError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(ProviderError::Disabled(provider_name.to_string()));
        }

        match provider_name {
            "groq" => Ok(Box::new(OpenAIProvider::groq(config, timeout)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Box::new(AnthropicProvider::new(config, timeout)?)),
            _ => Err(ProviderError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the default provider from configuration.
    ///
    /// A provider with no configuration section still works with its defaults,
    /// so setting only `GROQ_API_KEY` is enough.
    pub fn get_default_provider(config: &AiConfig) -> Result<Box<dyn LlmProvider>, ProviderError> {
        let provider_name = &config.default_provider;
        let provider_config = config
            .providers
            .get(provider_name)
            .cloned()
            .unwrap_or_default();

        Self::create(provider_name, &provider_config, config.request_timeout())
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["groq", "openai", "anthropic"]
    }
}
