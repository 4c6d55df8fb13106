//! Build phase - turns the document into IR.

use indexmap::IndexMap;
use quill_core::{
    ENUM_SUFFIX, HttpMethod, SchemaType, enum_case_name, has_malformed_tokens, initial_caps,
    sanitize_identifier, to_camel_case,
};
use quill_document::{Document, OperationDef, ParameterDef, PathItem, ResponseDef, Schema};
use quill_ir::{
    ApiIR, ApiMeta, EnumCase, Example, Model, Operation, OperationGroup, Parameter,
    ParameterLocation, Property, Response,
};
use tracing::{debug, info};

use crate::{
    AnonymousNames, Error, Profile, Result, Target, defaults,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

const PHASE: &str = "build";

/// Phase that builds the IR from the document.
///
/// Names, types and paths go through the profile's hooks here; the later
/// phases only refine what this one produced.
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Build models and operation groups from the API description"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let mut builder = Builder {
            profile: ctx.profile,
            target: &ctx.target,
            anonymous: &ctx.anonymous,
            diagnostics: Vec::new(),
        };
        let ir = builder.build(ctx.document)?;
        let diagnostics = builder.diagnostics;

        info!(
            models = ir.models.len(),
            groups = ir.groups.len(),
            operations = ir.operation_count(),
            "built IR"
        );

        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        ctx.ir = Some(ir);
        Ok(())
    }
}

struct Builder<'a> {
    profile: &'a dyn Profile,
    target: &'a Target,
    anonymous: &'a AnonymousNames,
    diagnostics: Vec<Diagnostic>,
}

impl Builder<'_> {
    fn build(&mut self, document: &Document) -> Result<ApiIR> {
        let meta = ApiMeta {
            title: document.info.title.clone(),
            version: document.info.version.clone(),
            description: document.info.description.clone(),
            host: document.host.clone(),
            base_path: document.base_path.clone(),
        };

        let models = document
            .definitions
            .iter()
            .map(|(name, schema)| self.build_model(name, schema))
            .collect();

        let groups = self.build_groups(&document.paths)?;

        Ok(ApiIR {
            meta,
            models,
            groups,
        })
    }

    fn resolve(&self, ty: &SchemaType) -> String {
        self.profile.resolve_type(self.target, ty)
    }

    /// Warn about primitive tokens no type table knows.
    fn check_type(&mut self, ty: &SchemaType, location: String) {
        if let SchemaType::Primitive(token) = ty.innermost()
            && !self.target.spec.types.is_known(token)
        {
            self.diagnostics.push(
                Diagnostic::warning(PHASE, format!("unknown type '{}' passed through", token))
                    .at(location),
            );
        }
    }

    fn build_model(&mut self, name: &str, schema: &Schema) -> Model {
        let class_name = self.profile.to_model_name(self.target, name);
        let mut model = Model::new(name, class_name);
        model.display_name = schema.title.clone().unwrap_or_else(|| name.to_string());
        model.description = schema.description.clone();
        model.required = schema.required.iter().cloned().collect();

        if schema.is_enum() && schema.properties.is_empty() {
            model.is_enum_type = true;
            model.enum_cases = schema
                .enum_strings()
                .into_iter()
                .map(|raw| EnumCase {
                    case_name: enum_case_name(&raw),
                    raw_value: raw,
                })
                .collect();
        }

        for (property_name, property_schema) in &schema.properties {
            let property = self.build_property(
                name,
                property_name,
                property_schema,
                schema.is_required(property_name),
            );
            if let SchemaType::Model(referenced) = property_schema.schema_type().innermost() {
                model
                    .imports
                    .insert(self.profile.to_model_name(self.target, referenced));
            }
            model.properties.push(property);
        }

        model.refresh_flags();
        debug!(model = %model.name, properties = model.properties.len(), "built model");
        model
    }

    fn build_property(
        &mut self,
        model_name: &str,
        name: &str,
        schema: &Schema,
        required: bool,
    ) -> Property {
        let schema_type = schema.schema_type();
        self.check_type(&schema_type, format!("definitions.{}.{}", model_name, name));

        let data_type = self.resolve(&schema_type);
        let mut property = Property::new(self.profile.to_var_name(self.target, name), data_type);
        property.base_name = name.to_string();
        property.schema_type = schema_type.token().to_string();
        property.base_type = self.resolve(schema_type.innermost());
        property.required = required;
        property.description = schema.description.clone();
        property.schema_default = schema.default_text();
        property.container = schema_type.container();
        property.is_raw = self.target.spec.classes.is_raw(&property.data_type);
        property.flags = defaults::type_flags(
            &self.target.spec.classes,
            &property.data_type,
            &property.base_type,
        );

        if schema.is_enum() {
            property.is_enum = true;
            property.allowable_values = schema.enum_strings();
            property.data_type_with_enum = format!(
                "{}{}",
                initial_caps(&to_camel_case(&sanitize_identifier(name))),
                ENUM_SUFFIX
            );
        }

        property.default_value = self.profile.default_value(self.target, &property);
        property
    }

    fn build_groups(&mut self, paths: &IndexMap<String, PathItem>) -> Result<Vec<OperationGroup>> {
        let mut groups: IndexMap<String, OperationGroup> = IndexMap::new();

        for (raw_path, item) in paths {
            for (method, def) in item.operations() {
                let operation = self.build_operation(raw_path, method, def, item)?;

                let segment = resource_segment(raw_path);
                let group = groups.entry(segment.to_string()).or_insert_with(|| {
                    let base_name = if is_nameable(segment) { segment } else { "" };
                    let class_name =
                        self.profile
                            .to_api_name(self.target, base_name, self.anonymous);
                    OperationGroup::new(base_name, class_name)
                });
                group.operations.push(operation);
            }
        }

        Ok(groups.into_values().collect())
    }

    fn build_operation(
        &mut self,
        raw_path: &str,
        method: HttpMethod,
        def: &OperationDef,
        item: &PathItem,
    ) -> Result<Operation> {
        let nickname = def.operation_id.clone().unwrap_or_default();
        if nickname.trim().is_empty() {
            return Err(Error::EmptyOperationId {
                method,
                path: raw_path.to_string(),
            });
        }
        if self.target.spec.names.is_reserved(&nickname) {
            return Err(Error::ReservedOperationId {
                id: nickname,
                method,
                path: raw_path.to_string(),
            });
        }

        let operation_id = self.profile.to_operation_id(self.target, &nickname);
        if operation_id.is_empty() {
            return Err(Error::EmptyOperationId {
                method,
                path: raw_path.to_string(),
            });
        }

        if has_malformed_tokens(raw_path) {
            self.diagnostics.push(
                Diagnostic::warning(PHASE, "malformed path parameter left as literal text")
                    .at(format!("paths.{}", raw_path)),
            );
        }

        let mut operation = Operation::new(method, raw_path, operation_id);
        operation.path = Some(self.profile.normalize_path(self.target, raw_path));
        operation.nickname = nickname;
        operation.summary = def.summary.clone();
        operation.notes = def.description.clone();
        operation.parameters = def
            .merged_parameters(item)
            .into_iter()
            .map(|param| self.build_parameter(raw_path, param))
            .collect();
        operation.responses = def
            .responses
            .iter()
            .map(|(code, response)| self.build_response(code, response))
            .collect();
        operation.examples = collect_examples(&def.responses)?;

        Ok(operation)
    }

    fn build_parameter(&mut self, raw_path: &str, def: &ParameterDef) -> Parameter {
        let schema_type = def.schema_type();
        self.check_type(&schema_type, format!("paths.{}.{}", raw_path, def.name));

        Parameter {
            base_name: def.name.clone(),
            param_name: self.profile.to_param_name(self.target, &def.name),
            location: ParameterLocation::from_document(&def.location),
            data_type: self.resolve(&schema_type),
            required: def.required,
            description: def.description.clone(),
        }
    }

    fn build_response(&self, code: &str, def: &ResponseDef) -> Response {
        let mut response = Response::new(code);
        response.description = def.description.clone();

        if let Some(schema) = &def.schema {
            let schema_type = schema.schema_type();
            let base_type = self.resolve(schema_type.innermost());

            response.is_primitive = self.target.spec.classes.is_primitive(&base_type);
            response.data_type = Some(self.resolve(&schema_type));
            response.base_type = Some(base_type);
            response.container = schema_type.container();
        }

        response
    }
}

/// First segment of a path (`"pets"` for `/pets/{petId}`).
fn resource_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

/// Parameter segments and the root cannot name a group.
fn is_nameable(segment: &str) -> bool {
    !segment.is_empty() && !segment.starts_with('{')
}

/// Examples of the first success response, else of the `default` response.
fn collect_examples(responses: &IndexMap<String, ResponseDef>) -> Result<Vec<Example>> {
    let source = responses
        .iter()
        .find(|(code, _)| code.starts_with('2'))
        .or_else(|| responses.iter().find(|(code, _)| code.as_str() == "default"));

    let Some((_, response)) = source else {
        return Ok(Vec::new());
    };

    response
        .examples
        .iter()
        .map(|(content_type, value)| -> Result<Example> {
            let text = match value {
                serde_json::Value::String(text) => text.clone(),
                other => serde_json::to_string_pretty(other)?,
            };
            Ok(Example::new(content_type, text))
        })
        .collect()
}
