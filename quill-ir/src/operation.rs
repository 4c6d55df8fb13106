//! Operation, parameter and response IR.

use quill_core::{ContainerKind, HttpMethod};
use serde::Serialize;

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

impl ParameterLocation {
    /// Parse a document `in` value. Unknown locations are treated as query.
    pub fn from_document(location: &str) -> Self {
        match location {
            "path" => ParameterLocation::Path,
            "header" => ParameterLocation::Header,
            "body" => ParameterLocation::Body,
            "formData" => ParameterLocation::FormData,
            _ => ParameterLocation::Query,
        }
    }
}

/// A request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Name as declared in the document.
    pub base_name: String,
    /// Sanitized target identifier.
    pub param_name: String,
    pub location: ParameterLocation,
    pub data_type: String,
    pub required: bool,
    pub description: Option<String>,
}

/// A declared response of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Status code string (`"200"`, `"default"`, ...).
    pub code: String,
    /// Resolved body type; `None` means no body.
    pub data_type: Option<String>,
    /// Resolved innermost element type.
    pub base_type: Option<String>,
    pub container: ContainerKind,
    /// The body is a bare primitive (or absent).
    pub is_primitive: bool,
    /// The body is list-shaped.
    pub is_list_container: bool,
    pub description: Option<String>,
}

impl Response {
    /// Create a response with no body.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            data_type: None,
            base_type: None,
            container: ContainerKind::None,
            is_primitive: true,
            is_list_container: false,
            description: None,
        }
    }

    /// Set a non-primitive body type.
    pub fn with_body(mut self, data_type: impl Into<String>) -> Self {
        let data_type = data_type.into();
        self.base_type = Some(data_type.clone());
        self.data_type = Some(data_type);
        self.is_primitive = false;
        self
    }

    /// A synthesized body-less response typed as `string_type`.
    pub fn generic(string_type: &str) -> Self {
        let mut response = Self::new("");
        response.data_type = Some(string_type.to_string());
        response
    }

    /// Matches any status (`default` or `0`).
    pub fn is_wildcard(&self) -> bool {
        self.code == "default" || self.code == "0"
    }

    /// A `2xx` status code.
    pub fn is_success(&self) -> bool {
        self.code.starts_with('2')
    }
}

/// An example payload attached to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub content_type: String,
    pub example: String,
}

impl Example {
    pub fn new(content_type: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            example: example.into(),
        }
    }
}

/// An API operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(rename = "httpMethod")]
    pub method: HttpMethod,
    /// Path as declared in the document.
    pub raw_path: String,
    /// Normalized path; `None` when it equals the group's resource path.
    pub path: Option<String>,
    /// Target method identifier. Never empty, never reserved.
    pub operation_id: String,
    /// Operation id as declared in the document.
    pub nickname: String,
    pub summary: Option<String>,
    pub notes: Option<String>,
    pub parameters: Vec<Parameter>,
    pub responses: Vec<Response>,
    /// Selected by the operation-group pass.
    pub successful_response: Option<Response>,
    pub examples: Vec<Example>,
}

impl Operation {
    /// Create an operation with no parameters or responses.
    pub fn new(method: HttpMethod, path: impl Into<String>, operation_id: impl Into<String>) -> Self {
        let path = path.into();
        let operation_id = operation_id.into();
        Self {
            method,
            raw_path: path.clone(),
            path: Some(path),
            nickname: operation_id.clone(),
            operation_id,
            summary: None,
            notes: None,
            parameters: Vec::new(),
            responses: Vec::new(),
            successful_response: None,
            examples: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_codes() {
        assert!(Response::new("default").is_wildcard());
        assert!(Response::new("0").is_wildcard());
        assert!(!Response::new("200").is_wildcard());
    }

    #[test]
    fn test_success_codes() {
        assert!(Response::new("200").is_success());
        assert!(Response::new("204").is_success());
        assert!(!Response::new("404").is_success());
        assert!(!Response::new("default").is_success());
    }

    #[test]
    fn test_generic_response() {
        let response = Response::generic("String");
        assert_eq!(response.data_type.as_deref(), Some("String"));
        assert!(response.is_primitive);
    }

    #[test]
    fn test_parameter_location() {
        assert_eq!(ParameterLocation::from_document("path"), ParameterLocation::Path);
        assert_eq!(ParameterLocation::from_document("formData"), ParameterLocation::FormData);
        assert_eq!(ParameterLocation::from_document("cookie"), ParameterLocation::Query);
    }

    #[test]
    fn test_operation_serializes_method() {
        let op = Operation::new(HttpMethod::Get, "/pets", "listPets");
        let json = serde_json::to_value(&op).unwrap();

        assert_eq!(json["httpMethod"], "GET");
        assert_eq!(json["operationId"], "listPets");
        assert_eq!(json["rawPath"], "/pets");
    }
}
