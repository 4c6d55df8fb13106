//! Core utilities and types for the quill client generator.
//!
//! This crate provides the leaf components every profile builds on:
//! schema type mapping, identifier sanitizing, path templating and
//! whole-file writes.

mod file;
mod naming;
mod path;
mod type_mapper;
mod types;
mod utils;

// File operations
pub use file::{Overwrite, WriteResult, write_file, write_with};
// Identifier handling
pub use naming::{ENUM_SUFFIX, NameSanitizer, enum_case_name, enum_type_name, escape_with_underscore};
// Path templates
pub use path::{PathTemplater, has_malformed_tokens};
// Type mapping
pub use type_mapper::{ContainerSyntax, ENGINE_TYPE_MAPPING, ScalarClass, TypeClasses, TypeMapper};
// Fundamental types
pub use types::{ContainerKind, HttpMethod, SchemaType};
// String utilities
pub use utils::{capitalize_fully, initial_caps, sanitize_identifier, to_camel_case, to_pascal_case};
