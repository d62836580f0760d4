use std::time::Duration;

use crate::config::load_config;
use crate::extractors::AiExtractor;
use crate::{ExtractError, MenuItemDraft};

/// LLM provider selection for the builder
#[derive(Debug, Clone, Copy)]
pub enum ProviderKind {
    Groq,
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Groq => "groq",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }
}

/// Builder for configuring and running a menu item extraction
#[derive(Debug, Default)]
pub struct MenuExtractorBuilder {
    text: Option<String>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    offline: bool,
}

impl MenuExtractorBuilder {
    /// Set the merchant's free-form dish text
    ///
    /// # Example
    /// ```
    /// use yumblock::MenuExtractor;
    ///
    /// let builder = MenuExtractor::builder().text("paner tikka for 180");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Choose the LLM provider instead of the configured default
    ///
    /// # Example
    /// ```
    /// use yumblock::{MenuExtractor, ProviderKind};
    ///
    /// let builder = MenuExtractor::builder()
    ///     .text("chik cuy 150")
    ///     .provider(ProviderKind::Anthropic);
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for the provider request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Skip the LLM entirely and use deterministic extraction
    ///
    /// # Example
    /// ```
    /// use yumblock::MenuExtractor;
    ///
    /// let builder = MenuExtractor::builder()
    ///     .text("Chicken Curry 200")
    ///     .offline();
    /// ```
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Build the extractor and run it
    ///
    /// # Errors
    /// Returns `ExtractError` if:
    /// - No text was specified
    /// - The text is empty
    /// - The fallback path ran and no price could be found
    /// - Configuration could not be loaded
    ///
    /// # Example
    /// ```no_run
    /// # use yumblock::MenuExtractor;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let draft = MenuExtractor::builder()
    ///     .text("paner tikka for 180")
    ///     .build()
    ///     .await?;
    /// println!("{} costs {}", draft.title, draft.price);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<MenuItemDraft, ExtractError> {
        let text = self.text.ok_or_else(|| {
            ExtractError::BuilderError("No input text specified. Use .text()".to_string())
        })?;

        let extractor = if self.offline {
            AiExtractor::offline()
        } else {
            let mut config = load_config()?.ai;

            if let Some(provider) = self.provider {
                config.default_provider = provider.as_str().to_string();
            }
            if let Some(timeout) = self.timeout {
                config.timeout = timeout.as_secs().max(1);
            }

            let provider_config = config
                .providers
                .entry(config.default_provider.clone())
                .or_default();
            if let Some(key) = self.api_key {
                provider_config.api_key = Some(key);
            }
            if let Some(model) = self.model {
                provider_config.model = Some(model);
            }
            if let Some(url) = self.base_url {
                provider_config.base_url = Some(url);
            }

            AiExtractor::from_config(&config)
        };

        extractor.extract(&text).await
    }
}

/// Main entry point for the builder API
pub struct MenuExtractor;

impl MenuExtractor {
    /// Creates a new builder for extracting menu items
    ///
    /// # Example
    /// ```
    /// use yumblock::MenuExtractor;
    ///
    /// let builder = MenuExtractor::builder();
    /// ```
    pub fn builder() -> MenuExtractorBuilder {
        MenuExtractorBuilder::default()
    }
}
