//! Engine behavior behind the default [`Profile`](crate::Profile) hooks.
//!
//! Profiles that override a hook can still call into these to layer their
//! own rule on top of the engine's.

use quill_core::{
    ContainerKind, ScalarClass, TypeClasses, initial_caps, sanitize_identifier, to_camel_case,
    to_pascal_case,
};
use quill_ir::{Property, TypeFlags};

use crate::{AnonymousNames, Target};

/// Prefix of generated names for groups without a resource segment.
pub const ANONYMOUS_API_PREFIX: &str = "AnonymousAPI";

pub fn model_name(target: &Target, name: &str) -> String {
    let name = to_pascal_case(&sanitize_identifier(name));
    target.spec.names.sanitize(&name)
}

/// camelCase, keeping one leading underscore, escaped when reserved.
pub fn var_name(target: &Target, name: &str) -> String {
    let name = match name.strip_prefix('_') {
        Some(rest) => format!("_{}", to_camel_case(&sanitize_identifier(rest))),
        None => to_camel_case(&sanitize_identifier(name)),
    };
    target.spec.names.sanitize(&name)
}

/// `<Name>API`, or the next anonymous name when there is no name.
pub fn api_name(base_name: &str, anonymous: &AnonymousNames) -> String {
    if base_name.is_empty() {
        return format!("{}{}", ANONYMOUS_API_PREFIX, anonymous.next());
    }
    format!("{}API", initial_caps(&to_pascal_case(&sanitize_identifier(base_name))))
}

pub fn operation_id(raw: &str) -> String {
    to_camel_case(&sanitize_identifier(raw))
}

/// Escape quotes and drop all whitespace, yielding a one-line literal.
pub fn normalize_example(example: &str) -> String {
    example.replace('"', "\\\"").split_whitespace().collect()
}

/// Classification flags for a resolved type.
pub fn type_flags(classes: &TypeClasses, data_type: &str, base_type: &str) -> TypeFlags {
    let class = classes.classify(data_type);
    let mut flags = TypeFlags {
        is_integer: class == ScalarClass::Integer,
        is_long: class == ScalarClass::Long,
        is_float: class == ScalarClass::Float,
        is_double: class == ScalarClass::Double,
        is_boolean: class == ScalarClass::Boolean,
        is_string: class == ScalarClass::String,
        is_numeric: false,
        is_primitive_type: classes.is_primitive(base_type),
    };
    flags.is_numeric = flags.is_integer
        || flags.is_long
        || flags.is_float
        || flags.is_double
        || flags.is_boolean;
    flags
}

/// Default literal for a property.
///
/// Optional properties get the null literal. Required enums construct a
/// case from the declared default, else from the first allowed value.
/// Other required properties get the zero value of their class; lists
/// and maps get the profile's empty-container literals.
pub fn default_value(target: &Target, property: &Property) -> String {
    let literals = &target.spec.literals;

    if !property.required {
        return literals.null.to_string();
    }

    if property.is_enum {
        let raw = property
            .schema_default
            .as_deref()
            .or_else(|| property.allowable_values.first().map(String::as_str));
        return match raw {
            Some(raw) => literals.enum_case(&property.data_type_with_enum, raw),
            None => literals.null.to_string(),
        };
    }

    let literal = match property.container {
        ContainerKind::List => literals.list,
        ContainerKind::Map => literals.map,
        ContainerKind::None => match target.spec.classes.classify(&property.data_type) {
            class if class.is_numeric() => literals.zero,
            ScalarClass::Boolean => literals.boolean,
            ScalarClass::String => literals.string,
            _ => literals.null,
        },
    };
    literal.to_string()
}
