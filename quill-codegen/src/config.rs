//! Generation options.
//!
//! A [`Config`] is the raw, string-keyed option map a user supplies (from a
//! TOML `[options]` table and `key=value` flags). A profile resolves it
//! against its declared [`ConfigOption`]s into [`Settings`]: declared
//! options get their defaults, flags are normalized to booleans and any
//! other key is passed through untouched for templates.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Raw options supplied for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: IndexMap<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the `[options]` table of a TOML document.
    ///
    /// A document without an `[options]` table yields an empty config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).map_err(|source| Error::ConfigParse { source })?;

        let mut config = Self::new();
        if let Some(toml::Value::Table(options)) = table.get("options") {
            for (key, value) in options {
                config.set(key, serde_json::to_value(value)?);
            }
        }
        Ok(config)
    }

    /// Parse `key=value` pairs. Values are kept as strings.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut config = Self::new();
        for pair in pairs {
            let (key, value) = pair
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| Error::InvalidOption {
                    pair: pair.to_string(),
                })?;
            config.set(key.trim(), Value::String(value.to_string()));
        }
        Ok(config)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Overlay `other` on top of this config; its values win.
    pub fn merge(mut self, other: Config) -> Self {
        self.values.extend(other.values);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Default of a declared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    Text(&'static str),
    Flag(bool),
}

/// An option a profile recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    pub name: &'static str,
    pub description: &'static str,
    pub default: OptionDefault,
}

impl ConfigOption {
    pub const fn text(name: &'static str, description: &'static str, default: &'static str) -> Self {
        Self {
            name,
            description,
            default: OptionDefault::Text(default),
        }
    }

    pub const fn flag(name: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            name,
            description,
            default: OptionDefault::Flag(default),
        }
    }

    /// The default rendered for help output.
    pub fn default_text(&self) -> String {
        match self.default {
            OptionDefault::Text(text) => text.to_string(),
            OptionDefault::Flag(flag) => flag.to_string(),
        }
    }
}

/// Only `true` and `"true"` are true.
fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text == "true",
        _ => false,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Options resolved against a profile's declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    values: IndexMap<String, Value>,
}

impl Settings {
    pub fn resolve(options: &[ConfigOption], config: &Config) -> Self {
        let mut values = IndexMap::new();

        for option in options {
            let supplied = config.get(option.name);
            let value = match option.default {
                OptionDefault::Flag(default) => {
                    Value::Bool(supplied.map(parse_flag).unwrap_or(default))
                }
                OptionDefault::Text(default) => Value::String(
                    supplied
                        .map(text_of)
                        .unwrap_or_else(|| default.to_string()),
                ),
            };
            values.insert(option.name.to_string(), value);
        }

        for (key, value) in config.iter() {
            if !values.contains_key(key) {
                values.insert(key.clone(), value.clone());
            }
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// A string option; `None` when absent or not a string.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// A flag option; absent flags are false.
    pub fn flag(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(parse_flag)
    }

    /// Override one resolved value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// All values as a JSON object for render contexts.
    pub fn to_context(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const OPTIONS: &[ConfigOption] = &[
        ConfigOption::text("projectName", "Project name", "LoopBackSwiftClient"),
        ConfigOption::text("primaryKeyFieldName", "Primary key", "id"),
        ConfigOption::flag("useRealm", "Realm persistence", false),
    ];

    #[test]
    fn test_defaults_apply_when_absent() {
        let settings = Settings::resolve(OPTIONS, &Config::new());

        assert_eq!(settings.string("projectName"), Some("LoopBackSwiftClient"));
        assert_eq!(settings.string("primaryKeyFieldName"), Some("id"));
        assert!(!settings.flag("useRealm"));
    }

    #[test]
    fn test_flags_accept_only_true() {
        for (value, expected) in [
            (json!("true"), true),
            (json!(true), true),
            (json!("TRUE"), false),
            (json!("yes"), false),
            (json!(1), false),
            (json!(false), false),
        ] {
            let mut config = Config::new();
            config.set("useRealm", value.clone());
            let settings = Settings::resolve(OPTIONS, &config);
            assert_eq!(settings.flag("useRealm"), expected, "value {value}");
        }
    }

    #[test]
    fn test_unrecognized_keys_pass_through() {
        let mut config = Config::new();
        config.set("podAuthors", "Quill");
        config.set("projectName", "PetKit");

        let settings = Settings::resolve(OPTIONS, &config);
        let context = settings.to_context();

        assert_eq!(context["podAuthors"], "Quill");
        assert_eq!(context["projectName"], "PetKit");
        assert_eq!(context.len(), 4);
    }

    #[test]
    fn test_from_pairs() {
        let config = Config::from_pairs(["projectName=PetKit", "useRealm=true", "empty="]).unwrap();

        assert_eq!(config.get("projectName"), Some(&json!("PetKit")));
        assert_eq!(config.get("empty"), Some(&json!("")));
        assert!(matches!(
            Config::from_pairs(["noEquals"]),
            Err(Error::InvalidOption { .. })
        ));
        assert!(Config::from_pairs(["=value"]).is_err());
    }

    #[test]
    fn test_from_toml_options_table() {
        let config = Config::from_toml_str(
            r#"
            [options]
            projectName = "PetKit"
            useRealm = true
            "#,
        )
        .unwrap();

        assert_eq!(config.get("projectName"), Some(&json!("PetKit")));
        assert_eq!(config.get("useRealm"), Some(&json!(true)));
        assert!(Config::from_toml_str("title = 1").unwrap().is_empty());
        assert!(Config::from_toml_str("[options").is_err());
    }

    #[test]
    fn test_merge_prefers_later() {
        let file = Config::from_pairs(["projectName=FromFile", "useRealm=true"]).unwrap();
        let cli = Config::from_pairs(["projectName=FromCli"]).unwrap();

        let merged = file.merge(cli);
        assert_eq!(merged.get("projectName"), Some(&json!("FromCli")));
        assert_eq!(merged.get("useRealm"), Some(&json!("true")));
    }
}
