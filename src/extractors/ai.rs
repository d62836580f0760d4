use super::reply::parse_reply;
use super::{
    clean_description, extract_price, infer_category, normalize_dish_name, Extractor,
    FallbackExtractor,
};
use crate::config::AiConfig;
use crate::error::{ExtractError, ProviderError};
use crate::model::{price_in_range, MenuItemDraft, Origin, DEFAULT_PRICE};
use crate::providers::{build_extraction_prompt, LlmProvider, ProviderFactory};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::{Map, Value};

/// Extractor that asks an LLM first and falls back to the local parser.
///
/// The provider is optional: without one (no credential configured) every
/// request goes straight to the fallback path. The fallback defaults to
/// [`FallbackExtractor`].
pub struct AiExtractor {
    provider: Option<Box<dyn LlmProvider>>,
    fallback: Box<dyn Extractor>,
}

impl AiExtractor {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        AiExtractor {
            provider: Some(provider),
            fallback: Box::new(FallbackExtractor),
        }
    }

    /// An extractor that never leaves the process
    pub fn offline() -> Self {
        AiExtractor {
            provider: None,
            fallback: Box::new(FallbackExtractor),
        }
    }

    /// Replace the extractor used when the provider is absent or fails
    pub fn with_fallback(mut self, fallback: Box<dyn Extractor>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Build from configuration. A provider that cannot be constructed
    /// (missing key, disabled, unknown) leaves the extractor offline.
    pub fn from_config(config: &AiConfig) -> Self {
        match ProviderFactory::get_default_provider(config) {
            Ok(provider) => {
                info!("Using '{}' for menu extraction", provider.provider_name());
                AiExtractor::new(provider)
            }
            Err(e) => {
                warn!("No LLM provider available ({}), using fallback extraction", e);
                AiExtractor::offline()
            }
        }
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.provider_name())
    }

    /// Extract a draft from raw text.
    ///
    /// Only two errors can surface: empty input, and a missing price when the
    /// fallback path had to run. Provider failures are logged and absorbed.
    pub async fn extract(&self, text: &str) -> Result<MenuItemDraft, ExtractError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let Some(provider) = &self.provider else {
            debug!("No LLM provider configured, using {}", self.fallback.name());
            return self.fallback.extract(text).await;
        };

        match query(provider.as_ref(), text).await {
            Ok(reply) => {
                let draft = validate_reply(&reply, text);
                info!(
                    "{} extraction produced '{}' at {}",
                    provider.provider_name(),
                    draft.title,
                    draft.price
                );
                Ok(draft)
            }
            Err(e) => {
                warn!(
                    "{} extraction failed, using {}: {}",
                    provider.provider_name(),
                    self.fallback.name(),
                    e
                );
                self.fallback.extract(text).await
            }
        }
    }
}

#[async_trait]
impl Extractor for AiExtractor {
    fn name(&self) -> &str {
        "ai"
    }

    async fn extract(&self, text: &str) -> Result<MenuItemDraft, ExtractError> {
        AiExtractor::extract(self, text).await
    }
}

async fn query(
    provider: &dyn LlmProvider,
    text: &str,
) -> Result<Map<String, Value>, ProviderError> {
    let prompt = build_extraction_prompt(text);
    let response = provider.complete(&prompt).await?;
    debug!("Raw extraction reply: {}", response);

    if response.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    parse_reply(&response)
}

/// Rebuild every field from the model reply without trusting it.
///
/// The model's category is discarded; it is always recomputed from the title.
fn validate_reply(reply: &Map<String, Value>, raw: &str) -> MenuItemDraft {
    let title = reply
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(String::from)
        .unwrap_or_else(|| normalize_dish_name(raw));

    let price = extract_price(raw)
        .or_else(|| model_price(reply.get("price")))
        .filter(|price| price_in_range(*price))
        .unwrap_or(DEFAULT_PRICE);

    let description = clean_description(reply.get("description").and_then(Value::as_str), &title);
    let category = infer_category(&title);

    MenuItemDraft {
        title,
        description,
        price,
        category,
        origin: Origin::Ai,
    }
}

/// Coerce the model's price field: numbers as-is, strings by keeping digits
fn model_price(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|price| u32::try_from(price).ok()),
        Value::String(text) => text
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok(),
        _ => None,
    }
}
