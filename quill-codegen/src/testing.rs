//! Test utilities for profiles and pipeline phases.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::str::FromStr;

use quill_core::{ContainerSyntax, NameSanitizer, PathTemplater, TypeClasses, TypeMapper};
use quill_document::Document;

use crate::{
    ConfigOption, Error, Profile, ProfileSpec, Result,
    layout::Layout,
    manifest::{Manifest, ManifestEntry},
    output::{FileRegistry, WriteStats},
    profile::{DefaultLiterals, ReturnHints, TemplateBinding},
};

/// A minimal Swift-flavored profile that overrides no hooks.
///
/// Exercises the engine defaults end to end.
#[derive(Debug, Clone)]
pub struct PlainProfile {
    spec: ProfileSpec,
}

impl PlainProfile {
    pub fn new() -> Self {
        let types = TypeMapper::new(ContainerSyntax {
            list: "[{}]",
            map: "[String:{}]",
        })
        .with_mapping(&[
            ("integer", "Int"),
            ("int", "Int"),
            ("long", "Int64"),
            ("float", "Float"),
            ("double", "Double"),
            ("number", "Double"),
            ("boolean", "Bool"),
            ("string", "String"),
            ("date", "Date"),
            ("DateTime", "Date"),
            ("binary", "Data"),
            ("ByteArray", "Data"),
            ("file", "URL"),
            ("object", "Any"),
        ]);

        let classes = TypeClasses::new()
            .integer(&["Int"])
            .long(&["Int64"])
            .float(&["Float"])
            .double(&["Double"])
            .boolean(&["Bool"])
            .string(&["String"])
            .primitives(&["Int", "Int64", "Float", "Double", "Bool", "String"])
            .raw(&["Data"]);

        let layout = Layout::new("Sources");
        let manifest = [
            ManifestEntry::new("Helper.swift", layout.source_folder.clone(), "Helper.swift"),
            ManifestEntry::new("README.md", "", "README.md"),
        ]
        .into_iter()
        .collect::<Manifest>();

        let spec = ProfileSpec {
            types,
            classes,
            names: NameSanitizer::new(["class", "return", "self", "type", "func"]),
            literals: DefaultLiterals {
                null: "nil",
                zero: "0",
                boolean: "false",
                string: "\"\"",
                list: "[:]",
                map: "[:]",
                enum_pattern: "{type}(rawValue: \"{raw}\")!",
            },
            path: PathTemplater::new("\\(", ")"),
            top_level: vec![ManifestEntry::new(
                "index.swift",
                layout.source_folder.clone(),
                "Index.swift",
            )],
            layout,
            manifest,
            model_templates: vec![TemplateBinding::new("model.swift", ".swift")],
            api_templates: vec![TemplateBinding::new("api.swift", ".swift")],
            options: vec![
                ConfigOption::text("projectName", "Name of the generated project", "PlainClient"),
                ConfigOption::text("primaryKeyFieldName", "Identity property name", "id"),
            ],
            strip_resource_prefix: false,
            return_hints: ReturnHints {
                count: "Int",
                delete: "Bool",
            },
        };

        Self { spec }
    }
}

impl Default for PlainProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl Profile for PlainProfile {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn help(&self) -> &'static str {
        "Engine defaults only"
    }

    fn spec(&self) -> &ProfileSpec {
        &self.spec
    }
}

/// A small pet store document covering models, enums, containers, examples
/// and a wildcard-only response.
pub const PETSTORE_JSON: &str = r##"{
  "swagger": "2.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "host": "petstore.example.com",
  "basePath": "/v2",
  "definitions": {
    "Pet": {
      "type": "object",
      "required": ["name", "tags"],
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "category": { "$ref": "#/definitions/Category" },
        "name": { "type": "string" },
        "tags": { "type": "array", "items": { "type": "string" } },
        "status": { "type": "string", "enum": ["available", "pending", "sold"] }
      }
    },
    "Category": {
      "type": "object",
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "name": { "type": "string" }
      }
    },
    "Order": {
      "type": "object",
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "petId": { "type": "integer", "format": "int64" },
        "quantity": { "type": "integer", "format": "int32" },
        "shipDate": { "type": "string", "format": "date-time" },
        "status": { "type": "string", "enum": ["placed", "approved", "delivered"] },
        "complete": { "type": "boolean", "default": false }
      }
    }
  },
  "paths": {
    "/pets": {
      "get": {
        "operationId": "find",
        "summary": "Find pets",
        "parameters": [
          { "name": "filter", "in": "query", "type": "string" }
        ],
        "responses": {
          "200": {
            "description": "ok",
            "schema": { "type": "array", "items": { "$ref": "#/definitions/Pet" } }
          }
        }
      },
      "post": {
        "operationId": "create",
        "parameters": [
          { "name": "body", "in": "body", "required": true, "schema": { "$ref": "#/definitions/Pet" } }
        ],
        "responses": {
          "200": { "description": "ok", "schema": { "$ref": "#/definitions/Pet" } }
        }
      }
    },
    "/pets/{petId}": {
      "parameters": [
        { "name": "petId", "in": "path", "required": true, "type": "integer", "format": "int64" }
      ],
      "get": {
        "operationId": "findById",
        "responses": {
          "200": {
            "description": "ok",
            "schema": { "$ref": "#/definitions/Pet" },
            "examples": {
              "application/json": { "id": 1, "name": "doggie" },
              "application/xml": "<Pet><id>1</id></Pet>"
            }
          },
          "404": { "description": "not found" }
        }
      },
      "delete": {
        "operationId": "deleteById",
        "responses": { "204": { "description": "deleted" } }
      }
    },
    "/pets/count": {
      "get": {
        "operationId": "count",
        "responses": {
          "200": { "description": "ok", "schema": { "type": "integer" } }
        }
      }
    },
    "/store/order": {
      "post": {
        "operationId": "placeOrder",
        "responses": {
          "200": { "description": "ok", "schema": { "$ref": "#/definitions/Order" } }
        }
      }
    },
    "/store/inventory": {
      "get": {
        "operationId": "getInventory",
        "responses": {
          "default": {
            "description": "counts by status",
            "schema": { "type": "object", "additionalProperties": { "type": "integer" } }
          }
        }
      }
    }
  }
}"##;

/// Parse [`PETSTORE_JSON`].
pub fn petstore() -> Document {
    Document::from_str(PETSTORE_JSON).expect("petstore fixture parses")
}

/// Write a registry into a fresh temporary directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn write_to_temp(registry: &FileRegistry) -> Result<(tempfile::TempDir, WriteStats)> {
    let temp_dir = tempfile::TempDir::new().map_err(|e| Error::io(std::env::temp_dir(), e))?;
    let stats = registry.write_all(temp_dir.path())?;
    Ok((temp_dir, stats))
}
