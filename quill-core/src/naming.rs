//! Identifier sanitizing and enum-case synthesis.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::utils::capitalize_fully;

/// Suffix the engine appends to synthesized enum type names.
pub const ENUM_SUFFIX: &str = "Enum";

/// Values that already read like a type-style identifier are kept verbatim.
static WELL_FORMED_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z0-9]+[a-zA-Z0-9]*$").expect("valid enum case regex"));

const CASE_SEPARATORS: [char; 3] = ['-', '_', ' '];

/// Prefix a reserved word with `_` (e.g., "class" -> "_class").
pub fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

/// Profile-specific reserved words and their escape rule.
///
/// Membership is case-insensitive: `"Self"` and `"self"` are both reserved
/// when either is listed.
#[derive(Debug, Clone)]
pub struct NameSanitizer {
    reserved: HashSet<String>,
    escape: fn(&str) -> String,
}

impl NameSanitizer {
    /// Create a sanitizer for the given reserved words, escaping with `_`.
    pub fn new<'a>(reserved_words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            reserved: reserved_words
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            escape: escape_with_underscore,
        }
    }

    /// Replace the escape transform.
    pub fn with_escape(mut self, escape: fn(&str) -> String) -> Self {
        self.escape = escape;
        self
    }

    /// Add more reserved words.
    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        self.reserved.extend(words.into_iter().map(|w| w.to_lowercase()));
    }

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(&name.to_lowercase())
    }

    /// Apply the escape transform unconditionally.
    pub fn escape(&self, name: &str) -> String {
        (self.escape)(name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn sanitize(&self, name: &str) -> String {
        if self.is_reserved(name) {
            self.escape(name)
        } else {
            name.to_string()
        }
    }

    /// Number of reserved words.
    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    /// Returns true if no words are reserved.
    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }
}

/// Synthesize an enum case identifier from a raw allowed value.
///
/// `"Active"` is kept as-is; `"IN_PROGRESS"` becomes `"InProgress"`.
pub fn enum_case_name(raw: &str) -> String {
    if WELL_FORMED_CASE.is_match(raw) {
        return raw.to_string();
    }

    capitalize_fully(&raw.to_lowercase(), &CASE_SEPARATORS)
        .chars()
        .filter(|c| !CASE_SEPARATORS.contains(c))
        .collect()
}

/// Derive the enum container type name from a property's computed type name.
///
/// The trailing [`ENUM_SUFFIX`] is stripped; the result is escaped when it
/// is reserved or collides with the property's own name.
pub fn enum_type_name(sanitizer: &NameSanitizer, type_name: &str, property_name: &str) -> String {
    let stripped = type_name.strip_suffix(ENUM_SUFFIX).unwrap_or(type_name);

    if sanitizer.is_reserved(stripped) || stripped == property_name {
        sanitizer.escape(stripped)
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer() -> NameSanitizer {
        NameSanitizer::new(["class", "Self", "Type", "description"])
    }

    #[test]
    fn test_reserved_is_case_insensitive() {
        let names = sanitizer();
        assert!(names.is_reserved("class"));
        assert!(names.is_reserved("CLASS"));
        assert!(names.is_reserved("self"));
        assert!(!names.is_reserved("pet"));
    }

    #[test]
    fn test_sanitize_escapes_reserved() {
        let names = sanitizer();
        assert_eq!(names.sanitize("class"), "_class");
        assert_eq!(names.sanitize("Type"), "_Type");
        assert_eq!(names.sanitize("pet"), "pet");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let names = sanitizer();
        for word in ["class", "Self", "Type", "description"] {
            let once = names.sanitize(word);
            assert_eq!(names.sanitize(&once), once);
            assert_eq!(names.sanitize(word), once);
        }
    }

    #[test]
    fn test_custom_escape() {
        let names = NameSanitizer::new(["type"]).with_escape(|n| format!("r#{}", n));
        assert_eq!(names.sanitize("type"), "r#type");
    }

    #[test]
    fn test_enum_case_name() {
        assert_eq!(enum_case_name("IN_PROGRESS"), "InProgress");
        assert_eq!(enum_case_name("Active"), "Active");
        assert_eq!(enum_case_name("on-hold"), "OnHold");
        assert_eq!(enum_case_name("not started"), "NotStarted");
        assert_eq!(enum_case_name("available"), "Available");
        assert_eq!(enum_case_name("A"), "A");
    }

    #[test]
    fn test_enum_type_name() {
        let names = sanitizer();
        assert_eq!(enum_type_name(&names, "StatusEnum", "status"), "Status");
        assert_eq!(enum_type_name(&names, "TypeEnum", "type"), "_Type");
        assert_eq!(enum_type_name(&names, "kindEnum", "kind"), "_kind");
        assert_eq!(enum_type_name(&names, "Color", "shade"), "Color");
    }
}
