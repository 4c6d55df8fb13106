//! Swift type tables.

use quill_core::{ContainerSyntax, TypeClasses, TypeMapper};

/// `[T]` and `[String:T]`.
pub const SWIFT_CONTAINERS: ContainerSyntax = ContainerSyntax {
    list: "[{}]",
    map: "[String:{}]",
};

/// Schema tokens to Swift types for the swift and moya profiles.
pub const SWIFT_TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "Array"),
    ("List", "Array"),
    ("map", "Dictionary"),
    ("date", "NSDate"),
    ("Date", "NSDate"),
    ("DateTime", "NSDate"),
    ("boolean", "Bool"),
    ("string", "String"),
    ("char", "Character"),
    ("short", "Int"),
    ("int", "Int32"),
    ("long", "Int64"),
    ("integer", "Int32"),
    ("Integer", "Int32"),
    ("float", "Float"),
    ("number", "Double"),
    ("double", "Double"),
    ("object", "AnyObject"),
    ("file", "NSURL"),
    ("binary", "NSData"),
    ("ByteArray", "NSData"),
];

/// Schema tokens to Swift types for the LoopBackSwift profile.
pub const LOOPBACK_TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "Array"),
    ("List", "Array"),
    ("map", "Dictionary"),
    ("date", "NSDate"),
    ("Date", "NSDate"),
    ("DateTime", "NSDate"),
    ("boolean", "Bool"),
    ("string", "String"),
    ("char", "Character"),
    ("short", "Int"),
    ("int", "Int"),
    ("int64", "Int64"),
    ("long", "Int"),
    ("integer", "Int64"),
    ("Integer", "Int"),
    ("float", "Float"),
    ("number", "Int64"),
    ("double", "Double"),
    ("object", "AnyObject"),
    ("file", "NSURL"),
    ("binary", "[UInt8]"),
];

pub fn swift_types() -> TypeMapper {
    TypeMapper::new(SWIFT_CONTAINERS).with_mapping(SWIFT_TYPE_MAPPING)
}

pub fn swift_classes() -> TypeClasses {
    TypeClasses::new()
        .integer(&["Int", "Int32"])
        .long(&["Int64"])
        .float(&["Float"])
        .double(&["Double"])
        .boolean(&["Bool"])
        .string(&["String"])
        .primitives(&[
            "Int", "Int32", "Int64", "Float", "Double", "Bool", "Void", "String", "Character",
            "AnyObject",
        ])
        .raw(&["NSData"])
}

pub fn loopback_types() -> TypeMapper {
    TypeMapper::new(SWIFT_CONTAINERS).with_mapping(LOOPBACK_TYPE_MAPPING)
}

/// `Int64` counts as an integer but is not a language primitive; the
/// property hook marks `Int64` properties primitive on their own.
pub fn loopback_classes() -> TypeClasses {
    TypeClasses::new()
        .integer(&["Int", "Int64"])
        .float(&["Float"])
        .double(&["Double"])
        .boolean(&["Bool"])
        .string(&["String"])
        .primitives(&[
            "Int", "Float", "Double", "Bool", "Void", "String", "Character", "AnyObject",
        ])
        .raw(&["NSData"])
}
