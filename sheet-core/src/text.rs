//! Display-string helpers shared by the sheet views.

/// Uppercase the first character, leaving the rest untouched.
///
/// This is not title-casing: `"bola de fogo"` becomes `"Bola de fogo"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, trims, turns every space into a hyphen and drops anything
/// that is not a word character or a hyphen. Word characters are
/// Unicode-aware (letters, digits, `_`), so accented letters survive:
/// `"Ação Rápida"` becomes `"ação-rápida"`.
pub fn convert_to_slug(name: &str) -> String {
    name.to_lowercase()
        .trim()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|&c| is_word_char(c) || c == '-')
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
