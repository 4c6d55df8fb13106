//! Shared string utilities for identifier generation.

const WORD_SEPARATORS: [char; 4] = ['_', '-', ' ', '.'];

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Only the first letter of each word is touched; existing capitals in the
/// tail are kept, so "petID" stays "PetID".
pub fn to_pascal_case(s: &str) -> String {
    s.split(WORD_SEPARATORS)
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Uppercase the first character only (e.g., "findById" -> "FindById")
pub fn initial_caps(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase everything, then capitalize the first character and every
/// character that follows one of `delimiters`.
pub fn capitalize_fully(s: &str, delimiters: &[char]) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if delimiters.contains(&c) {
            result.push(c);
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Replace characters that cannot appear in an identifier with `_`.
///
/// Square brackets are dropped entirely so that `"ids[]"` becomes `"ids"`.
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '[' | ']'))
        .map(|c| {
            if c.is_alphanumeric() || WORD_SEPARATORS.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
