use crate::model::price_in_range;
use once_cell::sync::Lazy;
use regex::Regex;

// 1,200 -> 1200, so a grouped amount is never read as its trailing group
static THOUSANDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{1,3}),([0-9]{3})\b").unwrap());

/// Price patterns, highest confidence first
static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Rs. 180, ₹180, INR 180
        Regex::new(r"(?i)(?:\brs\.?|₹|\binr)\s*([0-9]{2,4})\b").unwrap(),
        // 180 rs, 180 rupees
        Regex::new(r"(?i)\b([0-9]{2,4})\s*(?:rupees?|rs|inr)\b").unwrap(),
        // for 180, price 180
        Regex::new(r"(?i)\b(?:for|price|cost)\s+([0-9]{2,4})\b").unwrap(),
        // bare 180
        Regex::new(r"\b([0-9]{2,4})\b").unwrap(),
    ]
});

/// Find a plausible price in free text.
///
/// Returns `None` when no pattern yields a number in the accepted range.
pub fn extract_price(text: &str) -> Option<u32> {
    let text = THOUSANDS.replace_all(text, "${1}${2}");
    PRICE_PATTERNS
        .iter()
        .find_map(|pattern| first_price_in_range(pattern, &text))
}

fn first_price_in_range(pattern: &Regex, text: &str) -> Option<u32> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .find(|price| price_in_range(*price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_marker_before_number() {
        assert_eq!(extract_price("Paneer Tikka Rs. 180"), Some(180));
        assert_eq!(extract_price("Paneer Tikka rs180"), Some(180));
        assert_eq!(extract_price("Lassi ₹60"), Some(60));
        assert_eq!(extract_price("Biryani INR 350"), Some(350));
    }

    #[test]
    fn test_currency_word_after_number() {
        assert_eq!(extract_price("Kheer 120 rupees"), Some(120));
        assert_eq!(extract_price("Kheer 120rs"), Some(120));
    }

    #[test]
    fn test_price_word_before_number() {
        assert_eq!(extract_price("Masala Dosa for 90"), Some(90));
        assert_eq!(extract_price("Thali price 250"), Some(250));
        assert_eq!(extract_price("Thali COST 250"), Some(250));
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(extract_price("Chicken Curry 200"), Some(200));
    }

    #[test]
    fn test_marker_beats_bare_number() {
        assert_eq!(extract_price("2 plates 65 pieces Rs 499"), Some(499));
        assert_eq!(extract_price("Family pack 12 naan for 300"), Some(300));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(extract_price("Chicken Curry"), None);
        assert_eq!(extract_price(""), None);
        assert_eq!(extract_price("Chicken 65"), Some(65));
        assert_eq!(extract_price("Tea 5"), None);
        assert_eq!(extract_price("Platter 12345"), None);
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(extract_price("Rs 1,200"), Some(1200));
        assert_eq!(extract_price("Veg Thali ₹1,499"), Some(1499));
        assert_eq!(extract_price("Party platter 2,500 rupees"), Some(2500));
        assert_eq!(extract_price("Wedding feast Rs 12,000"), None);
    }

    #[test]
    fn test_out_of_range_is_skipped() {
        assert_eq!(extract_price("Rs 05"), None);
        assert_eq!(extract_price("Rs 05 or 45"), Some(45));
    }
}
