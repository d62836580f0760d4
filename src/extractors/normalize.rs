use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when nothing usable is left after cleaning
pub const PLACEHOLDER_TITLE: &str = "Special Dish";

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Turn free-form dish text into a word-capitalized title.
///
/// Digits are dropped, punctuation becomes whitespace, and every remaining
/// word gets an upper-case first letter with the rest lower-cased.
pub fn normalize_dish_name(text: &str) -> String {
    let without_digits = DIGITS.replace_all(text, "");
    let cleaned = NOISE.replace_all(&without_digits, " ");

    let words: Vec<String> = cleaned.split_whitespace().map(capitalize).collect();

    if words.is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

// Only the first char of the upper-case expansion stays upper-case
// ("ß" -> "Ss", "ﬁ" -> "Fi"), so a second pass changes nothing.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut title = String::with_capacity(word.len());
    title.extend(upper.next());
    title.extend(upper.chain(chars).flat_map(char::to_lowercase));
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_digits_and_capitalizes() {
        assert_eq!(normalize_dish_name("chicken CURRY 200"), "Chicken Curry");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(normalize_dish_name("paneer-tikka!!(spicy)"), "Paneer Tikka Spicy");
        assert_eq!(normalize_dish_name("Paneer Tikka Rs. 180"), "Paneer Tikka Rs");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_dish_name("  masala \t  dosa \n"), "Masala Dosa");
    }

    #[test]
    fn test_empty_result_uses_placeholder() {
        assert_eq!(normalize_dish_name(""), PLACEHOLDER_TITLE);
        assert_eq!(normalize_dish_name("123 !!! ₹"), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = [
            "chicken curry 200",
            "  BUTTER naan x2 ",
            "gulab-jamun (2 pcs) Rs.60",
            "crème brûlée",
            "ßalat",
            "ﬁsh fry",
            "",
        ];
        for input in inputs {
            let once = normalize_dish_name(input);
            assert_eq!(normalize_dish_name(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_multi_char_uppercase() {
        assert_eq!(normalize_dish_name("ßalat"), "Ssalat");
        assert_eq!(normalize_dish_name("ﬁsh fry"), "Fish Fry");
    }

    #[test]
    fn test_keeps_non_ascii_letters() {
        assert_eq!(normalize_dish_name("CRÈME brûlée"), "Crème Brûlée");
    }
}
