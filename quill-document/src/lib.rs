//! API description documents for the quill client generator.
//!
//! A document is a Swagger 2.0 style JSON description: API metadata, named
//! schema `definitions` and `paths` with per-method operations. Maps keep
//! declaration order, which the generator relies on for deterministic
//! output.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod paths;
mod schema;

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::{Error, Result, SourceContext};
pub use paths::{OperationDef, ParameterDef, PathItem, ResponseDef};
pub use schema::{AdditionalProperties, Schema, primitive_token, value_text};

/// Document header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    pub description: Option<String>,
}

/// Root of an API description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub swagger: Option<String>,
    #[serde(default)]
    pub info: Info,
    pub host: Option<String>,
    pub base_path: Option<String>,
    /// Named model schemas, in declaration order.
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,
    /// Path items keyed by path template, in declaration order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl Document {
    /// Parse a document file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "api.json")
    }
}

/// Parse a document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))
}
