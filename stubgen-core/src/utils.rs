//! Identifier case conversions shared by the target languages.

/// Convert a mixed or camel case identifier to snake_case.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit (`listWidgets` -> `list_widgets`), and before an
/// uppercase letter that opens a capitalized word after an acronym run
/// (`HTTPServer` -> `http_server`). Hyphens become underscores.
///
/// The output never contains uppercase letters, so the conversion is
/// idempotent.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// Uppercase the leading character, leaving the rest untouched
/// (e.g., "listWidgets" -> "ListWidgets").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the leading character, leaving the rest untouched
/// (e.g., "ListWidgets" -> "listWidgets").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Title-case each whitespace separated word: uppercase the first letter and
/// lowercase the rest (e.g., "billing" -> "Billing", "myShop" -> "Myshop").
pub fn to_title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
