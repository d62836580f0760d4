use thiserror::Error;

/// Errors that can occur while turning free text into a menu item draft
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Raw text was empty or whitespace only
    #[error("Please enter dish details")]
    EmptyInput,

    /// No price could be located and the fallback path requires one
    #[error("Please include a price. Example: \"Chicken Curry 200\" or \"Paneer Tikka Rs. 180\"")]
    PriceNotFound,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// Errors raised by an LLM provider. Every variant sends the extractor down
/// the deterministic fallback path.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key in config or environment
    #[error("{0} not found in config or environment")]
    MissingApiKey(String),

    #[error("Provider '{0}' is not enabled in configuration")]
    Disabled(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Transport, timeout, or non-success HTTP status (auth, quota)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned an empty response")]
    EmptyResponse,

    #[error("No JSON object found in provider response")]
    NoJsonObject,

    #[error("Malformed JSON in provider response: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Response body did not have the expected structure
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}
