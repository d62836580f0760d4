pub mod auth;
pub mod builder;
pub mod config;
pub mod error;
pub mod extractors;
pub mod model;
pub mod providers;
pub mod server;
pub mod share;
pub mod store;

pub use builder::{MenuExtractor, MenuExtractorBuilder, ProviderKind};
pub use error::{ExtractError, ProviderError};
pub use extractors::{compose_fallback, AiExtractor, Extractor, FallbackExtractor};
pub use model::{Category, ExtractResponse, MenuItemDraft, Origin};

/// Extract a menu item draft using the configured LLM provider, falling back
/// to deterministic parsing when the provider is missing or fails.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let draft = yumblock::extract_menu_item("chik cuy 150").await?;
/// println!("{} ({})", draft.title, draft.category);
/// # Ok(())
/// # }
/// ```
pub async fn extract_menu_item(text: &str) -> Result<MenuItemDraft, ExtractError> {
    let config = config::load_config()?;
    AiExtractor::from_config(&config.ai).extract(text).await
}

/// Extract a menu item draft without any network access.
///
/// # Example
/// ```
/// let draft = yumblock::extract_menu_item_offline("Chicken Curry 200").unwrap();
/// assert_eq!(draft.price, 200);
/// ```
pub fn extract_menu_item_offline(text: &str) -> Result<MenuItemDraft, ExtractError> {
    compose_fallback(text)
}
