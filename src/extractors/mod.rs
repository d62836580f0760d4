use crate::error::ExtractError;
use crate::model::MenuItemDraft;
use async_trait::async_trait;

mod ai;
mod category;
mod description;
mod fallback;
mod normalize;
mod price;
mod reply;

pub use self::ai::AiExtractor;
pub use self::category::infer_category;
pub use self::description::clean_description;
pub use self::fallback::{compose_fallback, FallbackExtractor};
pub use self::normalize::{normalize_dish_name, PLACEHOLDER_TITLE};
pub use self::price::extract_price;
pub use self::reply::{locate_json_object, parse_reply};

/// Turns raw dish text into a menu item draft
#[async_trait]
pub trait Extractor: Send + Sync {
    fn name(&self) -> &str;
    async fn extract(&self, text: &str) -> Result<MenuItemDraft, ExtractError>;
}
