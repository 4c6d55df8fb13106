//! Emission planning.
//!
//! Joins the resolved IR with a target's bindings and manifest into a flat,
//! ordered list of [`Emission`]s. Nothing here transforms the IR; each
//! emission carries a render context built from IR values as they are.

use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use crate::{Result, layout::join_folder, pipeline::GenerationContext};

/// What an emission renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmissionKind {
    /// One file per model and model binding.
    Model,
    /// One file per operation group and API binding.
    Api,
    /// One file rendered with every model and group in scope.
    TopLevel,
    /// A manifest entry.
    Supporting,
}

/// A file to render: destination, template and context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emission {
    /// Destination folder relative to the output root.
    pub folder: String,
    pub file_name: String,
    pub template: String,
    pub kind: EmissionKind,
    pub context: Value,
}

impl Emission {
    /// Destination path relative to the output root.
    pub fn path(&self) -> String {
        join_folder(&self.folder, &self.file_name)
    }
}

/// Plan every emission of a finished run.
///
/// Order: models × model bindings, groups × API bindings, top-level
/// bindings, then manifest entries in manifest order.
pub fn emit(ctx: &GenerationContext<'_>) -> Result<Vec<Emission>> {
    let ir = ctx.ir("emit")?;
    let target = &ctx.target;
    let layout = target.layout();

    let mut base = target.settings.to_context();
    base.insert("meta".into(), serde_json::to_value(&ir.meta)?);
    base.insert("sourceFolder".into(), Value::String(layout.source_folder.clone()));
    base.insert("profile".into(), Value::String(ctx.profile.name().to_string()));

    let mut emissions = Vec::new();

    for model in &ir.models {
        let raw: Vec<_> = model.raw_properties().collect();
        let extra = json!({ "model": model, "rawProperties": raw });
        for binding in &target.spec.model_templates {
            emissions.push(Emission {
                folder: layout.model_folder(),
                file_name: format!("{}{}", model.class_name, binding.extension),
                template: binding.template.clone(),
                kind: EmissionKind::Model,
                context: with(&base, &extra),
            });
        }
    }

    for group in &ir.groups {
        let extra = json!({ "api": group, "operations": group.operations });
        for binding in &target.spec.api_templates {
            emissions.push(Emission {
                folder: layout.api_folder(),
                file_name: format!("{}{}", group.class_name, binding.extension),
                template: binding.template.clone(),
                kind: EmissionKind::Api,
                context: with(&base, &extra),
            });
        }
    }

    if !target.spec.top_level.is_empty() {
        let extra = json!({ "models": ir.models, "apis": ir.groups });
        for entry in &target.spec.top_level {
            emissions.push(Emission {
                folder: entry.folder.clone(),
                file_name: entry.file_name.clone(),
                template: entry.template.clone(),
                kind: EmissionKind::TopLevel,
                context: with(&base, &extra),
            });
        }
    }

    for entry in target.spec.manifest.iter() {
        emissions.push(Emission {
            folder: entry.folder.clone(),
            file_name: entry.file_name.clone(),
            template: entry.template.clone(),
            kind: EmissionKind::Supporting,
            context: Value::Object(base.clone()),
        });
    }

    for emission in &emissions {
        debug!(path = %emission.path(), template = %emission.template, "planned emission");
    }
    info!(count = emissions.len(), "planned emissions");

    Ok(emissions)
}

/// The base context extended with entity keys.
fn with(base: &Map<String, Value>, extra: &Value) -> Value {
    let mut context = base.clone();
    if let Value::Object(extra) = extra {
        context.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    Value::Object(context)
}
