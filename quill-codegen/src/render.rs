//! Template rendering.
//!
//! Rendering is a pure function of a template name and a JSON context. The
//! engine only depends on the [`Renderer`] trait; [`TeraRenderer`] renders
//! user templates and [`ContextRenderer`] renders the context itself.

use std::path::Path;

use serde_json::Value;
use tera::{Context, Tera};
use tracing::debug;

use crate::{Error, Result};

/// Renders a template with a context.
pub trait Renderer {
    fn render(&self, template: &str, context: &Value) -> Result<String>;
}

/// Renders templates with Tera.
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Load every file under `dir` as a template, named by its path
    /// relative to `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let glob = format!("{}/**/*", dir.display());
        let tera = Tera::new(&glob).map_err(|source| Error::TemplateLoad {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(dir = %dir.display(), templates = tera.get_template_names().count(), "loaded templates");
        Ok(Self { tera })
    }

    /// Build from in-memory `(name, source)` pairs.
    pub fn from_templates<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(|source| Error::TemplateLoad {
                path: "<memory>".into(),
                source,
            })?;
        Ok(Self { tera })
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|t| t == name)
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        let render_err = |source| Error::Render {
            template: template.to_string(),
            source,
        };
        let context = Context::from_serialize(context).map_err(render_err)?;
        self.tera.render(template, &context).map_err(render_err)
    }
}

/// Renders the context as pretty JSON, ignoring the template.
///
/// Used for previews when no templates are supplied.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContextRenderer;

impl Renderer for ContextRenderer {
    fn render(&self, _template: &str, context: &Value) -> Result<String> {
        let mut out = serde_json::to_string_pretty(context)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_tera_renders_context() {
        let renderer = TeraRenderer::from_templates([(
            "model.swift",
            "public class {{ model.className }} {% for p in model.properties %}{{ p.name }} {% endfor %}",
        )])
        .unwrap();

        let out = renderer
            .render(
                "model.swift",
                &json!({ "model": { "className": "Pet", "properties": [{ "name": "id" }, { "name": "tag" }] } }),
            )
            .unwrap();
        assert_eq!(out, "public class Pet id tag ");
    }

    #[test]
    fn test_missing_template_is_render_error() {
        let renderer = TeraRenderer::from_templates([]).unwrap();
        let err = renderer.render("api.swift", &json!({})).unwrap_err();
        assert!(matches!(err, Error::Render { ref template, .. } if template == "api.swift"));
    }

    #[test]
    fn test_templates_from_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("util")).unwrap();
        std::fs::write(temp.path().join("util").join("APIError.swift"), "// {{ projectName }}").unwrap();

        let renderer = TeraRenderer::from_dir(temp.path()).unwrap();
        assert!(renderer.has_template("util/APIError.swift"));
        let out = renderer
            .render("util/APIError.swift", &json!({ "projectName": "PetKit" }))
            .unwrap();
        assert_eq!(out, "// PetKit");
    }

    #[test]
    fn test_context_renderer() {
        let out = ContextRenderer.render("ignored", &json!({ "a": 1 })).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }
}
