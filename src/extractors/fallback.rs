use super::{clean_description, extract_price, infer_category, normalize_dish_name, Extractor};
use crate::error::ExtractError;
use crate::model::{MenuItemDraft, Origin};
use async_trait::async_trait;
use log::info;

/// Build a draft from raw text without any network access.
///
/// The price is mandatory here: without an AI backend there is no safe way
/// to guess one, so a missing price is an error carrying the expected format.
pub fn compose_fallback(text: &str) -> Result<MenuItemDraft, ExtractError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let price = extract_price(text).ok_or(ExtractError::PriceNotFound)?;
    let title = normalize_dish_name(text);
    let description = clean_description(None, &title);
    let category = infer_category(&title);

    info!("Fallback extraction produced '{}' at {}", title, price);

    Ok(MenuItemDraft {
        title,
        description,
        price,
        category,
        origin: Origin::Fallback,
    })
}

/// Deterministic extractor built only from the local text primitives
pub struct FallbackExtractor;

#[async_trait]
impl Extractor for FallbackExtractor {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn extract(&self, text: &str) -> Result<MenuItemDraft, ExtractError> {
        compose_fallback(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_compose_complete_draft() {
        let draft = compose_fallback("Chicken Curry 200").unwrap();
        assert_eq!(draft.title, "Chicken Curry");
        assert_eq!(draft.price, 200);
        assert_eq!(draft.category, Category::MainCourse);
        assert_eq!(draft.origin, Origin::Fallback);
        assert!(draft.description.contains("chicken curry"));
    }

    #[test]
    fn test_missing_price_fails() {
        let result = compose_fallback("Chicken Curry");
        assert!(matches!(result, Err(ExtractError::PriceNotFound)));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Chicken Curry 200"));
    }

    #[test]
    fn test_whitespace_input_fails() {
        assert!(matches!(compose_fallback("   "), Err(ExtractError::EmptyInput)));
    }

    #[test]
    fn test_is_deterministic() {
        let first = compose_fallback("Mango Lassi Rs 60").unwrap();
        let second = compose_fallback("Mango Lassi Rs 60").unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_extractor_trait() {
        let extractor = FallbackExtractor;
        assert_eq!(extractor.name(), "fallback");
        let draft = extractor.extract("Masala Dosa for 90").await.unwrap();
        assert_eq!(draft.category, Category::Breakfast);
        assert_eq!(draft.price, 90);
    }
}
