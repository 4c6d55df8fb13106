//! Model and property IR.

use std::collections::BTreeSet;

use quill_core::ContainerKind;
use serde::Serialize;

/// Derived classification flags of a property's resolved type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFlags {
    pub is_integer: bool,
    pub is_long: bool,
    pub is_float: bool,
    pub is_double: bool,
    pub is_boolean: bool,
    pub is_string: bool,
    /// Integer, long, float, double, or boolean.
    pub is_numeric: bool,
    /// A built-in primitive of the target language.
    pub is_primitive_type: bool,
}

/// One case of an enum property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumCase {
    /// Synthesized case identifier (e.g., `InProgress`).
    pub case_name: String,
    /// Raw value as declared in the schema (e.g., `IN_PROGRESS`).
    pub raw_value: String,
}

/// A property of a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Sanitized target identifier.
    pub name: String,
    /// Name as declared in the schema.
    pub base_name: String,
    /// Raw schema type token (`"long"`, `"array"`, a model name, ...).
    pub schema_type: String,
    /// Resolved target type token.
    pub data_type: String,
    /// Resolved innermost element type (the type itself for scalars).
    pub base_type: String,
    /// Type token to declare, with enum types substituted.
    pub data_type_with_enum: String,
    pub required: bool,
    /// Target-language default literal. Always resolved before emission.
    pub default_value: String,
    /// Default declared by the schema, if any.
    pub schema_default: Option<String>,
    pub description: Option<String>,
    pub is_enum: bool,
    /// Raw allowed values, in declaration order.
    pub allowable_values: Vec<String>,
    /// Synthesized enum cases, in declaration order.
    pub enum_cases: Vec<EnumCase>,
    pub container: ContainerKind,
    /// Stored as a raw/binary payload.
    pub is_raw: bool,
    /// More raw properties follow this one in its model.
    pub has_more_raw: bool,
    /// The designated identity property of its model.
    pub is_id: bool,
    #[serde(flatten)]
    pub flags: TypeFlags,
}

impl Property {
    /// Create a scalar, optional property with an empty default.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        let name = name.into();
        let data_type = data_type.into();
        Self {
            base_name: name.clone(),
            name,
            schema_type: data_type.clone(),
            base_type: data_type.clone(),
            data_type_with_enum: data_type.clone(),
            data_type,
            required: false,
            default_value: String::new(),
            schema_default: None,
            description: None,
            is_enum: false,
            allowable_values: Vec::new(),
            enum_cases: Vec::new(),
            container: ContainerKind::None,
            is_raw: false,
            has_more_raw: false,
            is_id: false,
            flags: TypeFlags::default(),
        }
    }
}

/// A data model built from one schema definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Definition name in the input document.
    pub name: String,
    /// Human-readable name (schema title, else the definition name).
    pub display_name: String,
    /// Target type name.
    pub class_name: String,
    pub description: Option<String>,
    /// Properties in schema declaration order.
    pub properties: Vec<Property>,
    /// Designated identity property name.
    pub id: Option<String>,
    /// Names of required properties.
    pub required: BTreeSet<String>,
    /// Referenced type names, deduplicated and sorted.
    pub imports: BTreeSet<String>,
    pub has_properties: bool,
    /// The definition itself is an enum.
    pub is_enum_type: bool,
    pub has_enum_properties: bool,
    /// Cases when the definition itself is an enum.
    pub enum_cases: Vec<EnumCase>,
    /// Indices into `properties` of raw properties, in declaration order.
    #[serde(skip)]
    pub raw_indices: Vec<usize>,
}

impl Model {
    /// Create an empty model.
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            class_name: class_name.into(),
            description: None,
            properties: Vec::new(),
            id: None,
            required: BTreeSet::new(),
            imports: BTreeSet::new(),
            has_properties: false,
            is_enum_type: false,
            has_enum_properties: false,
            enum_cases: Vec::new(),
            raw_indices: Vec::new(),
        }
    }

    /// Find the designated identity property.
    ///
    /// Returns `None` when no id is designated or no property carries that
    /// name; callers treat this as a degraded state, not an error.
    pub fn id_property(&self) -> Option<&Property> {
        let id = self.id.as_deref().filter(|id| !id.is_empty())?;
        self.properties.iter().find(|p| p.name == id)
    }

    /// Mutable access to the designated identity property.
    pub fn id_property_mut(&mut self) -> Option<&mut Property> {
        let id = self.id.as_deref().filter(|id| !id.is_empty())?;
        self.properties.iter_mut().find(|p| p.name == id)
    }

    pub fn has_id(&self) -> bool {
        self.id_property().is_some()
    }

    /// Raw properties, in declaration order.
    pub fn raw_properties(&self) -> impl Iterator<Item = &Property> {
        self.raw_indices.iter().filter_map(|&i| self.properties.get(i))
    }

    pub fn has_raw_properties(&self) -> bool {
        !self.raw_indices.is_empty()
    }

    /// Recompute `has_properties` and `has_enum_properties`.
    pub fn refresh_flags(&mut self) {
        self.has_properties = !self.properties.is_empty();
        self.has_enum_properties = self.properties.iter().any(|p| p.is_enum);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> Model {
        let mut model = Model::new("Pet", "Pet");
        model.properties.push(Property::new("id", "Int64"));
        model.properties.push(Property::new("name", "String"));
        model
    }

    #[test]
    fn test_id_property_found() {
        let mut model = pet();
        model.id = Some("id".into());

        assert!(model.has_id());
        assert_eq!(model.id_property().map(|p| p.data_type.as_str()), Some("Int64"));
    }

    #[test]
    fn test_id_property_absent_is_not_an_error() {
        let mut model = pet();
        assert!(!model.has_id());

        model.id = Some(String::new());
        assert!(!model.has_id());

        model.id = Some("uuid".into());
        assert!(model.id_property().is_none());
    }

    #[test]
    fn test_raw_properties_follow_indices() {
        let mut model = pet();
        model.raw_indices = vec![1];

        let raw: Vec<_> = model.raw_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(raw, vec!["name"]);
        assert!(model.has_raw_properties());
    }

    #[test]
    fn test_refresh_flags() {
        let mut model = pet();
        model.properties[1].is_enum = true;
        model.refresh_flags();

        assert!(model.has_properties);
        assert!(model.has_enum_properties);
    }

    #[test]
    fn test_property_serializes_flat_flags() {
        let mut prop = Property::new("age", "Int");
        prop.flags.is_integer = true;

        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(json["isInteger"], true);
        assert_eq!(json["dataType"], "Int");
        assert_eq!(json["container"], "none");
    }
}
