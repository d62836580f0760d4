use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest price accepted for a menu item
pub const MIN_PRICE: u32 = 10;
/// Highest price accepted for a menu item
pub const MAX_PRICE: u32 = 9999;
/// Price used on the AI path when neither the text nor the model yields one
pub const DEFAULT_PRICE: u32 = 150;

pub fn price_in_range(price: u32) -> bool {
    (MIN_PRICE..=MAX_PRICE).contains(&price)
}

/// Closed set of menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Appetizer,
    #[default]
    #[serde(rename = "Main Course")]
    MainCourse,
    Dessert,
    Beverage,
    Breakfast,
    Breads,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Appetizer,
        Category::MainCourse,
        Category::Dessert,
        Category::Beverage,
        Category::Breakfast,
        Category::Breads,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "Appetizer",
            Category::MainCourse => "Main Course",
            Category::Dessert => "Dessert",
            Category::Beverage => "Beverage",
            Category::Breakfast => "Breakfast",
            Category::Breads => "Breads",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Which path produced a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Ai,
    Fallback,
}

/// A not-yet-persisted menu item candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemDraft {
    pub title: String,
    pub description: String,
    pub price: u32,
    pub category: Category,
    #[serde(skip)]
    pub origin: Origin,
}

impl MenuItemDraft {
    pub fn is_ai_powered(&self) -> bool {
        self.origin == Origin::Ai
    }
}

/// Wire shape returned to callers of the extraction endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub success: bool,
    pub data: MenuItemDraft,
    pub ai_powered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
}

impl From<MenuItemDraft> for ExtractResponse {
    fn from(draft: MenuItemDraft) -> Self {
        let ai_powered = draft.is_ai_powered();
        ExtractResponse {
            success: true,
            data: draft,
            ai_powered,
            fallback: if ai_powered { None } else { Some(true) },
        }
    }
}
