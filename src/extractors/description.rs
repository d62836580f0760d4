use once_cell::sync::Lazy;
use regex::Regex;

/// Candidates shorter than this are replaced by the long template
const MIN_CANDIDATE_CHARS: usize = 10;
/// Cleaned candidates shorter than this are replaced by the short template
const MIN_CLEANED_CHARS: usize = 20;

static PRICE_PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+\p{N}+").unwrap());
static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{N}+").unwrap());
static CURRENCY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Sc}").unwrap());
static PRICE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:rupees?|price|cost|inr|rs)\b\.?").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Produce a presentable description that never carries a price.
///
/// An absent or very short candidate is replaced by a templated sentence built
/// from the title. Otherwise price phrases, numbers, currency symbols and price
/// words are removed; if too little is left, the short template is used.
pub fn clean_description(candidate: Option<&str>, title: &str) -> String {
    let candidate = match candidate.map(str::trim) {
        Some(text) if text.chars().count() >= MIN_CANDIDATE_CHARS => text,
        _ => return long_template(title),
    };

    let cleaned = PRICE_PHRASE.replace_all(candidate, "");
    let cleaned = NUMERIC.replace_all(&cleaned, "");
    let cleaned = CURRENCY.replace_all(&cleaned, "");
    let cleaned = PRICE_WORDS.replace_all(&cleaned, "");
    let cleaned = collapse_whitespace(&cleaned);

    if cleaned.chars().count() >= MIN_CLEANED_CHARS {
        cleaned
    } else {
        short_template(title)
    }
}

fn long_template(title: &str) -> String {
    format!(
        "Delicious {} prepared with authentic Indian spices and premium ingredients. A perfect blend of flavors that will tantalize your taste buds.",
        template_title(title)
    )
}

fn short_template(title: &str) -> String {
    format!(
        "Delicious {} prepared with authentic Indian spices and premium ingredients.",
        template_title(title)
    )
}

// The title comes from the model on the AI path, so it gets the same
// numeric/currency scrub before it is embedded.
fn template_title(title: &str) -> String {
    let scrubbed = NUMERIC.replace_all(title, "");
    let scrubbed = CURRENCY.replace_all(&scrubbed, "");
    let scrubbed = collapse_whitespace(&scrubbed).to_lowercase();

    if scrubbed.is_empty() {
        "special dish".to_string()
    } else {
        scrubbed
    }
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
