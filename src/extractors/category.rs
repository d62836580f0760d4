use crate::model::Category;

/// Keyword groups in priority order. The first group with a hit wins, so a
/// dish that mentions two groups resolves deterministically.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Appetizer,
        &[
            "tikka", "kebab", "fry", "manchurian", "samosa", "pakora", "wings", "cutlet",
        ],
    ),
    (
        Category::Beverage,
        &["tea", "coffee", "lassi", "juice", "shake", "smoothie", "mojito"],
    ),
    (
        Category::Dessert,
        &["gulab", "kulfi", "dessert", "sweet", "jalebi", "kheer", "rasmalai"],
    ),
    (
        Category::Breads,
        &["naan", "roti", "paratha", "kulcha", "bhatura"],
    ),
    (
        Category::Breakfast,
        &["dosa", "idli", "upma", "uttapam", "vada"],
    ),
];

/// Classify a dish name into one of the fixed categories.
///
/// Never fails: anything without a keyword hit is a main course.
pub fn infer_category(dish: &str) -> Category {
    let dish = dish.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| dish.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group() {
        assert_eq!(infer_category("Paneer Tikka"), Category::Appetizer);
        assert_eq!(infer_category("Mango Lassi"), Category::Beverage);
        assert_eq!(infer_category("Gulab Jamun"), Category::Dessert);
        assert_eq!(infer_category("Butter Naan"), Category::Breads);
        assert_eq!(infer_category("Masala Dosa"), Category::Breakfast);
    }

    #[test]
    fn test_default_is_main_course() {
        assert_eq!(infer_category("Chicken Curry"), Category::MainCourse);
        assert_eq!(infer_category(""), Category::MainCourse);
        assert_eq!(infer_category("Soup"), Category::MainCourse);
    }

    #[test]
    fn test_priority_resolves_overlap() {
        // "tikka" (appetizer) is checked before "shake" (beverage)
        assert_eq!(infer_category("Tikka Shake"), Category::Appetizer);
        // "sweet" (dessert) is checked before "roti" (breads)
        assert_eq!(infer_category("Sweet Roti"), Category::Dessert);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_category("IDLI SAMBAR"), Category::Breakfast);
    }
}
