//! Path items, operations, parameters and responses.

use indexmap::IndexMap;
use quill_core::{HttpMethod, SchemaType};
use serde::Deserialize;
use serde_json::Value;

use crate::schema::{Schema, primitive_token};

/// Operations declared for one path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    pub get: Option<OperationDef>,
    pub put: Option<OperationDef>,
    pub post: Option<OperationDef>,
    pub delete: Option<OperationDef>,
    pub options: Option<OperationDef>,
    pub head: Option<OperationDef>,
    pub patch: Option<OperationDef>,
    /// Parameters shared by every operation of this path.
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

impl PathItem {
    pub fn operation(&self, method: HttpMethod) -> Option<&OperationDef> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
        }
    }

    /// Declared operations in method traversal order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &OperationDef)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(|method| self.operation(method).map(|op| (method, op)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDef {
    pub operation_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    /// Responses keyed by status code, in declaration order.
    #[serde(default)]
    pub responses: IndexMap<String, ResponseDef>,
}

impl OperationDef {
    /// Path-level parameters followed by this operation's own.
    ///
    /// An operation parameter overrides a path parameter with the same name
    /// and location.
    pub fn merged_parameters<'a>(&'a self, path: &'a PathItem) -> Vec<&'a ParameterDef> {
        let inherited = path.parameters.iter().filter(|shared| {
            !self
                .parameters
                .iter()
                .any(|own| own.name == shared.name && own.location == shared.location)
        });
        inherited.chain(self.parameters.iter()).collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub format: Option<String>,
    pub items: Option<Box<Schema>>,
    /// Body parameters carry a schema instead of a type.
    pub schema: Option<Schema>,
}

impl ParameterDef {
    pub fn schema_type(&self) -> SchemaType {
        if let Some(schema) = &self.schema {
            return schema.schema_type();
        }

        match self.kind.as_deref() {
            Some("array") => SchemaType::List(Box::new(
                self.items
                    .as_ref()
                    .map(|items| items.schema_type())
                    .unwrap_or_else(|| SchemaType::primitive("string")),
            )),
            kind => SchemaType::Primitive(primitive_token(kind, self.format.as_deref())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseDef {
    pub description: Option<String>,
    pub schema: Option<Schema>,
    /// Example payloads keyed by content type.
    #[serde(default)]
    pub examples: IndexMap<String, Value>,
}
