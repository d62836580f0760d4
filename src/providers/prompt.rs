/// The prompt template used for extracting menu items from free text.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains an `{{INPUT}}` placeholder that `build_extraction_prompt` replaces
/// with the merchant's text.
pub const MENU_EXTRACTION_PROMPT: &str = include_str!("prompt.txt");

/// Fill the extraction template with the merchant's text.
pub fn build_extraction_prompt(input: &str) -> String {
    MENU_EXTRACTION_PROMPT.replace("{{INPUT}}", input.trim())
}
