mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_extraction_prompt, MENU_EXTRACTION_PROMPT};

use crate::error::ProviderError;
use async_trait::async_trait;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "groq", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the model's text reply.
    ///
    /// One attempt only; callers treat any error as "use the fallback".
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
