//! Type mapping between schema types and target-language type tokens.

use std::collections::{HashMap, HashSet};

use crate::types::SchemaType;

/// Engine defaults, consulted when a profile table has no entry.
pub const ENGINE_TYPE_MAPPING: &[(&str, &str)] = &[
    ("array", "List"),
    ("map", "Map"),
    ("List", "List"),
    ("boolean", "Boolean"),
    ("string", "String"),
    ("int", "Integer"),
    ("float", "Float"),
    ("number", "BigDecimal"),
    ("DateTime", "Date"),
    ("long", "Long"),
    ("short", "Short"),
    ("char", "String"),
    ("double", "Double"),
    ("object", "Object"),
    ("integer", "Integer"),
    ("ByteArray", "byte[]"),
    ("binary", "byte[]"),
];

/// How a profile spells list and map types.
///
/// Each pattern contains a single `{}` placeholder for the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSyntax {
    pub list: &'static str,
    pub map: &'static str,
}

impl ContainerSyntax {
    /// Wrap an element type as a list.
    pub fn list_of(&self, element: &str) -> String {
        self.list.replacen("{}", element, 1)
    }

    /// Wrap a value type as a string-keyed map.
    pub fn map_of(&self, value: &str) -> String {
        self.map.replacen("{}", value, 1)
    }
}

/// Resolves schema types to target type tokens.
///
/// Lookup order is the profile table, then [`ENGINE_TYPE_MAPPING`], then the
/// token itself, so unknown schema tokens pass through unchanged.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    mapping: HashMap<String, String>,
    containers: ContainerSyntax,
}

impl TypeMapper {
    /// Create a mapper with an empty profile table.
    pub fn new(containers: ContainerSyntax) -> Self {
        Self {
            mapping: HashMap::new(),
            containers,
        }
    }

    /// Add profile mappings, replacing existing entries.
    pub fn with_mapping(mut self, entries: &[(&str, &str)]) -> Self {
        for (from, to) in entries {
            self.insert(from, to);
        }
        self
    }

    /// Insert or replace one profile mapping.
    pub fn insert(&mut self, from: &str, to: &str) {
        self.mapping.insert(from.to_string(), to.to_string());
    }

    /// The container syntax of this profile.
    pub fn containers(&self) -> ContainerSyntax {
        self.containers
    }

    /// Look a token up in the profile table, then the engine table.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.mapping.get(token).map(String::as_str).or_else(|| {
            ENGINE_TYPE_MAPPING
                .iter()
                .find(|(from, _)| *from == token)
                .map(|(_, to)| *to)
        })
    }

    /// Returns true if either table knows the token.
    pub fn is_known(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Resolve a single token, falling back to the token itself.
    pub fn resolve_token(&self, token: &str) -> String {
        self.lookup(token).unwrap_or(token).to_string()
    }

    /// Resolve a schema type, wrapping containers in the profile syntax.
    ///
    /// Model references are named by `model_name`.
    pub fn resolve(&self, ty: &SchemaType, model_name: &dyn Fn(&str) -> String) -> String {
        match ty {
            SchemaType::Primitive(token) => self.resolve_token(token),
            SchemaType::Model(name) => match self.lookup(name) {
                Some(mapped) => mapped.to_string(),
                None => model_name(name),
            },
            SchemaType::List(inner) => self.containers.list_of(&self.resolve(inner, model_name)),
            SchemaType::Map(inner) => self.containers.map_of(&self.resolve(inner, model_name)),
        }
    }
}

/// Scalar classification of a resolved target token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarClass {
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    String,
    Other,
}

impl ScalarClass {
    /// Returns true for integer and floating-point classes.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ScalarClass::Integer | ScalarClass::Long | ScalarClass::Float | ScalarClass::Double
        )
    }
}

/// Profile tables classifying resolved target tokens.
#[derive(Debug, Clone, Default)]
pub struct TypeClasses {
    integer: HashSet<String>,
    long: HashSet<String>,
    float: HashSet<String>,
    double: HashSet<String>,
    boolean: HashSet<String>,
    string: HashSet<String>,
    primitives: HashSet<String>,
    raw: HashSet<String>,
}

fn to_set(tokens: &[&str]) -> HashSet<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

impl TypeClasses {
    /// Create an empty classification table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn integer(mut self, tokens: &[&str]) -> Self {
        self.integer = to_set(tokens);
        self
    }

    pub fn long(mut self, tokens: &[&str]) -> Self {
        self.long = to_set(tokens);
        self
    }

    pub fn float(mut self, tokens: &[&str]) -> Self {
        self.float = to_set(tokens);
        self
    }

    pub fn double(mut self, tokens: &[&str]) -> Self {
        self.double = to_set(tokens);
        self
    }

    pub fn boolean(mut self, tokens: &[&str]) -> Self {
        self.boolean = to_set(tokens);
        self
    }

    pub fn string(mut self, tokens: &[&str]) -> Self {
        self.string = to_set(tokens);
        self
    }

    /// Tokens the target language treats as built-in primitives.
    pub fn primitives(mut self, tokens: &[&str]) -> Self {
        self.primitives = to_set(tokens);
        self
    }

    /// Tokens stored as raw/binary payloads.
    pub fn raw(mut self, tokens: &[&str]) -> Self {
        self.raw = to_set(tokens);
        self
    }

    /// Classify a resolved target token.
    pub fn classify(&self, token: &str) -> ScalarClass {
        if self.integer.contains(token) {
            ScalarClass::Integer
        } else if self.long.contains(token) {
            ScalarClass::Long
        } else if self.float.contains(token) {
            ScalarClass::Float
        } else if self.double.contains(token) {
            ScalarClass::Double
        } else if self.boolean.contains(token) {
            ScalarClass::Boolean
        } else if self.string.contains(token) {
            ScalarClass::String
        } else {
            ScalarClass::Other
        }
    }

    pub fn is_primitive(&self, token: &str) -> bool {
        self.primitives.contains(token)
    }

    pub fn is_raw(&self, token: &str) -> bool {
        self.raw.contains(token)
    }
}
