//! Identifier case conversion between backend and frontend conventions.

/// Convert snake_case to camelCase, preserving segments that are already
/// camelCase.
///
/// - `is_private` → `isPrivate`
/// - `alreadyCamelCase` → `alreadyCamelCase`
/// - `_private_field` → `_private_field` (leading underscore: left alone)
pub fn snake_to_camel(input: &str) -> String {
    if input.is_empty() || input.starts_with('_') {
        return input.to_string();
    }

    let mut words = input.split('_');
    let mut out = lower_head(words.next().unwrap_or_default());

    for word in words.filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        let rest = chars.as_str();
        out.extend(first.to_uppercase());
        if rest.chars().any(char::is_uppercase) && rest.chars().any(char::is_lowercase) {
            out.push_str(rest);
        } else {
            out.push_str(&rest.to_lowercase());
        }
    }

    out
}

/// Lowercase a leading word; mixed-case words only lose their initial capital.
fn lower_head(word: &str) -> String {
    if !word.chars().any(char::is_lowercase) {
        return word.to_lowercase();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
