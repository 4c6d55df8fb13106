//! Swift reserved words.

use quill_core::NameSanitizer;

/// Reserved words shared by every Swift profile.
pub const SWIFT_RESERVED_WORDS: &[&str] = &[
    "Int", "Int32", "Int64", "Float", "Double", "Bool", "Void", "String", "Character",
    "AnyObject", "class", "break", "as", "associativity", "deinit", "case", "dynamicType",
    "convenience", "enum", "continue", "false", "dynamic", "extension", "default", "is", "didSet",
    "func", "do", "nil", "final", "import", "else", "self", "get", "init", "fallthrough", "Self",
    "infix", "internal", "for", "super", "inout", "let", "if", "true", "lazy", "operator", "in",
    "COLUMN", "left", "private", "return", "FILE", "mutating", "protocol", "switch", "FUNCTION",
    "none", "public", "where", "LINE", "nonmutating", "static", "while", "optional", "struct",
    "override", "subscript", "postfix", "typealias", "precedence", "var", "prefix", "Protocol",
    "required", "right", "set", "Type", "unowned", "weak",
];

/// Names the LoopBack runtime and Realm claim on model objects.
pub const LOOPBACK_EXTRA_RESERVED: &[&str] = &["realm", "hash", "description"];

/// Sanitizer for the swift and moya profiles.
pub fn swift_names() -> NameSanitizer {
    NameSanitizer::new(SWIFT_RESERVED_WORDS.iter().copied())
}

/// Sanitizer for the LoopBackSwift profile.
///
/// Type names are not reserved there; generated models may be called
/// `String` or `Int` without escaping.
pub fn loopback_names() -> NameSanitizer {
    let mut names = NameSanitizer::new(
        SWIFT_RESERVED_WORDS
            .iter()
            .copied()
            .filter(|w| !is_builtin_type(w)),
    );
    names.extend(LOOPBACK_EXTRA_RESERVED.iter().copied());
    names
}

fn is_builtin_type(word: &str) -> bool {
    matches!(
        word,
        "Int" | "Int32" | "Int64" | "Float" | "Double" | "Bool" | "Void" | "String" | "Character"
            | "AnyObject"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swift_reserved_words() {
        let names = swift_names();
        assert!(names.is_reserved("class"));
        assert!(names.is_reserved("Protocol"));
        assert!(names.is_reserved("string"));
        assert!(!names.is_reserved("pet"));
        assert_eq!(names.sanitize("self"), "_self");
    }

    #[test]
    fn test_loopback_adds_model_words() {
        let names = loopback_names();
        assert!(names.is_reserved("description"));
        assert!(names.is_reserved("realm"));
        assert!(names.is_reserved("Type"));
        assert!(!names.is_reserved("Int64"));
        assert_eq!(names.sanitize("hash"), "_hash");
    }

    #[test]
    fn test_escaping_is_idempotent() {
        let names = loopback_names();
        for word in ["class", "hash", "pet", "Self"] {
            let once = names.sanitize(word);
            assert_eq!(names.sanitize(&once), once);
        }
    }
}
