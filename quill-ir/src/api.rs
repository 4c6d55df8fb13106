//! Top-level IR: API metadata, models and operation groups.

use serde::Serialize;

use crate::{Model, Operation};

/// API metadata from the document header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub host: Option<String>,
    pub base_path: Option<String>,
}

/// Group-level flags collected by scanning operation ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub has_create: bool,
    pub has_upsert: bool,
    pub has_find: bool,
    pub has_find_one: bool,
    pub has_find_by_id: bool,
    pub has_count: bool,
    pub has_delete_by_id: bool,
    /// Return type of the `count` operation.
    pub count_return_type: String,
    /// Return type of the `deleteById` operation.
    pub delete_return_type: String,
}

/// All operations sharing a resource path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationGroup {
    /// Resource segment the group was keyed on; empty when anonymous.
    pub base_name: String,
    /// Target type name of the generated API.
    pub class_name: String,
    /// Shared path prefix (`/pets`).
    pub resource_path: Option<String>,
    pub operations: Vec<Operation>,
    #[serde(flatten)]
    pub summary: GroupSummary,
}

impl OperationGroup {
    pub fn new(base_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            class_name: class_name.into(),
            resource_path: None,
            operations: Vec::new(),
            summary: GroupSummary::default(),
        }
    }
}

/// The complete resolved IR of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIR {
    pub meta: ApiMeta,
    /// Models in document order.
    pub models: Vec<Model>,
    /// Operation groups in first-seen order.
    pub groups: Vec<OperationGroup>,
}

impl ApiIR {
    /// Find a model by definition name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Find a group by class name.
    pub fn group(&self, class_name: &str) -> Option<&OperationGroup> {
        self.groups.iter().find(|g| g.class_name == class_name)
    }

    /// Total operations across all groups.
    pub fn operation_count(&self) -> usize {
        self.groups.iter().map(|g| g.operations.len()).sum()
    }
}
