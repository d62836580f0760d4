use crate::error::ProviderError;
use serde_json::{Map, Value};

/// Pull the first JSON object out of a model reply and parse it.
///
/// Code fences are stripped first; the object is the first balanced
/// `{...}` span, so chatter before or after it is ignored.
pub fn parse_reply(reply: &str) -> Result<Map<String, Value>, ProviderError> {
    let unfenced = reply.replace("```json", "").replace("```", "");
    let object = locate_json_object(unfenced.trim()).ok_or(ProviderError::NoJsonObject)?;

    match serde_json::from_str::<Value>(object)? {
        Value::Object(map) => Ok(map),
        other => Err(ProviderError::UnexpectedShape(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Return the first balanced `{...}` substring, honoring JSON string quoting
pub fn locate_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
