use yumblock::extractors::{clean_description, extract_price, infer_category, normalize_dish_name};
use yumblock::{compose_fallback, extract_menu_item_offline, Category, ExtractError, Origin};

#[test]
fn test_scenario_plain_number() {
    let draft = compose_fallback("Chicken Curry 200").unwrap();

    assert_eq!(draft.title, "Chicken Curry");
    assert_eq!(draft.price, 200);
    assert_eq!(draft.category, Category::MainCourse);
    assert_eq!(draft.origin, Origin::Fallback);
    assert_eq!(
        draft.description,
        "Delicious chicken curry prepared with authentic Indian spices and premium ingredients. A perfect blend of flavors that will tantalize your taste buds."
    );
}

#[test]
fn test_scenario_rupee_marker() {
    let draft = compose_fallback("Paneer Tikka Rs. 180").unwrap();
    assert_eq!(draft.price, 180);
    assert_eq!(draft.category, Category::Appetizer);
}

#[test]
fn test_scenario_whitespace_only() {
    assert!(matches!(compose_fallback("  "), Err(ExtractError::EmptyInput)));
}

#[test]
fn test_scenario_price_word() {
    let draft = compose_fallback("Masala Dosa for 90").unwrap();
    assert_eq!(draft.category, Category::Breakfast);
    assert_eq!(draft.price, 90);
}

#[test]
fn test_no_price_is_an_input_error() {
    for text in ["Chicken Curry", "Tea 5", "Family platter 12345"] {
        assert_eq!(extract_price(text), None, "text: {}", text);
        assert!(matches!(
            extract_menu_item_offline(text),
            Err(ExtractError::PriceNotFound)
        ));
    }
}

#[test]
fn test_marker_prices_are_found() {
    let cases = [
        ("Veg Biryani ₹250", 250),
        ("Veg Biryani Rs 250", 250),
        ("Veg Biryani rs.250", 250),
        ("Veg Biryani INR 250", 250),
        ("Veg Biryani 250 rupees", 250),
        ("Veg Biryani 250rs", 250),
        ("Veg Biryani 9999 inr", 9999),
        ("Veg Biryani ₹10", 10),
        ("Biryani Handi Rs 1,200", 1200),
    ];
    for (text, expected) in cases {
        assert_eq!(extract_price(text), Some(expected), "text: {}", text);
    }
}

#[test]
fn test_description_never_leaks_numbers() {
    let candidates = [
        None,
        Some(""),
        Some("short"),
        Some("Only Rs. 199 for 2 people, ₹199 total"),
        Some("Chef's special with 3 sauces and 12 spices, $4.99"),
        Some("१२३ spicy curry with ৳ and ₩ signs and more words"),
    ];
    for candidate in candidates {
        for title in ["Chicken 65", "Dish ₹99", "Plain"] {
            let description = clean_description(candidate, title);
            assert!(
                !description
                    .chars()
                    .any(|c| c.is_numeric() || "₹$€£¥৳₩".contains(c)),
                "{:?} / {:?} -> {}",
                candidate,
                title,
                description
            );
            assert!(description.chars().count() >= 20);
        }
    }
}

#[test]
fn test_classifier_is_total() {
    let inputs = ["", "   ", "???", "Chicken Curry", "Tomato Soup", "😀", "Filter Coffee"];
    for input in inputs {
        let category = infer_category(input);
        assert!(Category::ALL.contains(&category));
    }
}

#[test]
fn test_normalizer_is_idempotent() {
    let inputs = [
        "Chicken Curry 200",
        "paneer tikka rs. 180",
        "  MASALA   dosa for 90 ",
        "naan-bread (2pc)",
        "ßalat",
        "ﬁsh fry",
        "",
    ];
    for input in inputs {
        let once = normalize_dish_name(input);
        assert_eq!(normalize_dish_name(&once), once);
    }
}
