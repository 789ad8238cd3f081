use once_cell::sync::Lazy;
use regex::Regex;

// @module: Inline class-tag removal

// @const: `<c>` / `<c.class>` span with its inner text captured
static CLASS_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<c(?:\.[^>]*)?>(.*?)</c>").expect("class tag regex is valid")
});

/// Remove inline class-tag markup from a cue payload.
///
/// When the payload holds at least one `<c...>...</c>` span, the result is
/// only the inner text of the spans, space separated. Text outside the spans
/// is dropped. A payload without spans is returned as is.
pub fn strip_class_tags(payload: &str) -> String {
    if !CLASS_TAG_REGEX.is_match(payload) {
        return payload.to_string();
    }

    let mut result = String::with_capacity(payload.len());
    for caps in CLASS_TAG_REGEX.captures_iter(payload) {
        if let Some(inner) = caps.get(1) {
            result.push_str(inner.as_str());
            result.push(' ');
        }
    }

    result.trim().to_string()
}
