//! Fundamental schema-level types shared across the generator.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// Container shape of a schema type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// A scalar or model type.
    #[default]
    None,
    /// An ordered list of elements (`array`).
    List,
    /// A string-keyed map (`additionalProperties`).
    Map,
}

impl ContainerKind {
    /// Get the schema token naming this container (`"array"` / `"map"`).
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ContainerKind::None => None,
            ContainerKind::List => Some("array"),
            ContainerKind::Map => Some("map"),
        }
    }
}

/// HTTP methods, in the order operations are visited for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    /// All methods in traversal order.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
    ];

    /// Get the uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown HTTP method '{}'", s))
    }
}

/// A schema type as declared by the input document.
///
/// Primitive tokens are the document's own vocabulary (`"string"`, `"long"`,
/// `"DateTime"`, ...). They are resolved to target tokens by a [`TypeMapper`].
///
/// [`TypeMapper`]: crate::TypeMapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    /// A primitive schema token.
    Primitive(String),
    /// A reference to a named model definition.
    Model(String),
    /// A list of the inner type.
    List(Box<SchemaType>),
    /// A string-keyed map of the inner type.
    Map(Box<SchemaType>),
}

impl SchemaType {
    /// Create a primitive type from a schema token.
    pub fn primitive(token: impl Into<String>) -> Self {
        SchemaType::Primitive(token.into())
    }

    /// The schema token for this type (`"array"` and `"map"` for containers).
    pub fn token(&self) -> &str {
        match self {
            SchemaType::Primitive(token) | SchemaType::Model(token) => token,
            SchemaType::List(_) => "array",
            SchemaType::Map(_) => "map",
        }
    }

    /// The container shape of this type.
    pub fn container(&self) -> ContainerKind {
        match self {
            SchemaType::List(_) => ContainerKind::List,
            SchemaType::Map(_) => ContainerKind::Map,
            _ => ContainerKind::None,
        }
    }

    /// The innermost element type, unwrapping nested containers.
    pub fn innermost(&self) -> &SchemaType {
        match self {
            SchemaType::List(inner) | SchemaType::Map(inner) => inner.innermost(),
            other => other,
        }
    }

    /// Returns true if this is a reference to a model definition.
    pub fn is_model(&self) -> bool {
        matches!(self, SchemaType::Model(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_kind_as_str() {
        assert_eq!(ContainerKind::None.as_str(), None);
        assert_eq!(ContainerKind::List.as_str(), Some("array"));
        assert_eq!(ContainerKind::Map.as_str(), Some("map"));
    }

    #[test]
    fn test_http_method_from_str() {
        assert_eq!(HttpMethod::from_str("get").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::from_str("PATCH").unwrap(), HttpMethod::Patch);
        assert!(HttpMethod::from_str("trace").is_err());
    }

    #[test]
    fn test_schema_type_innermost() {
        let ty = SchemaType::List(Box::new(SchemaType::Map(Box::new(SchemaType::Model(
            "Pet".into(),
        )))));

        assert_eq!(ty.token(), "array");
        assert_eq!(ty.container(), ContainerKind::List);
        assert_eq!(ty.innermost(), &SchemaType::Model("Pet".into()));
        assert!(ty.innermost().is_model());
    }
}
