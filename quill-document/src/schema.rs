//! Schema objects of the `definitions` section.

use indexmap::IndexMap;
use quill_core::SchemaType;
use serde::Deserialize;
use serde_json::Value;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Map a `type`/`format` pair to the engine's primitive schema token.
///
/// Unknown types pass through unchanged so the type mapper can report them.
pub fn primitive_token(kind: Option<&str>, format: Option<&str>) -> String {
    let token = match (kind, format) {
        (Some("integer"), Some("int64")) => "long",
        (Some("integer"), _) => "integer",
        (Some("number"), Some("float")) => "float",
        (Some("number"), Some("double")) => "double",
        (Some("number"), _) => "number",
        (Some("string"), Some("date")) => "date",
        (Some("string"), Some("date-time")) => "DateTime",
        (Some("string"), Some("binary")) => "binary",
        (Some("string"), Some("byte")) => "ByteArray",
        (Some("string"), _) => "string",
        (Some("boolean"), _) => "boolean",
        (Some("file"), _) => "file",
        (None, _) | (Some("object"), _) => "object",
        (Some(other), _) => return other.to_string(),
    };
    token.to_string()
}

/// Render a JSON value as the raw text a schema author wrote.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `additionalProperties`: either a flag or the value schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}

/// A schema object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub format: Option<String>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub items: Option<Box<Schema>>,
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default, rename = "enum")]
    pub enum_values: Vec<Value>,
    pub default: Option<Value>,
}

impl Schema {
    /// Name of the referenced definition, if this is a `$ref`.
    pub fn ref_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .map(|r| r.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(r))
    }

    /// The schema type this object declares.
    pub fn schema_type(&self) -> SchemaType {
        if let Some(name) = self.ref_name() {
            return SchemaType::Model(name.to_string());
        }

        match self.kind.as_deref() {
            Some("array") => SchemaType::List(Box::new(self.items_type())),
            Some("object") | None => match &self.additional_properties {
                Some(AdditionalProperties::Schema(inner)) => {
                    SchemaType::Map(Box::new(inner.schema_type()))
                }
                Some(AdditionalProperties::Allowed(true)) => {
                    SchemaType::Map(Box::new(SchemaType::primitive("object")))
                }
                _ => SchemaType::primitive("object"),
            },
            kind => SchemaType::Primitive(primitive_token(kind, self.format.as_deref())),
        }
    }

    fn items_type(&self) -> SchemaType {
        self.items
            .as_ref()
            .map(|items| items.schema_type())
            .unwrap_or_else(|| SchemaType::primitive("object"))
    }

    /// Allowed values as raw text, in declaration order.
    pub fn enum_strings(&self) -> Vec<String> {
        self.enum_values.iter().map(value_text).collect()
    }

    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    /// The declared default as raw text.
    pub fn default_text(&self) -> Option<String> {
        self.default.as_ref().map(value_text)
    }

    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|r| r == property)
    }
}
