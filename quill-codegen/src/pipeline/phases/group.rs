//! Group phase - resource paths, successful responses and summary flags.

use quill_core::ContainerKind;
use quill_ir::{GroupSummary, OperationGroup, Response};
use tracing::debug;

use crate::{
    Result, Target,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that finalizes operation groups.
pub struct GroupPhase;

impl Phase for GroupPhase {
    fn name(&self) -> &'static str {
        "group"
    }

    fn description(&self) -> &'static str {
        "Select successful responses and summarize operation groups"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let mut ir = ctx.take_ir()?;

        for group in ir.groups.iter().filter(|g| g.operations.is_empty()) {
            ctx.add_diagnostic(
                Diagnostic::warning("group", "operation group has no operations")
                    .at(group.class_name.clone()),
            );
        }

        for group in ir.groups.iter_mut().filter(|g| !g.operations.is_empty()) {
            process_group(&ctx.target, group);
            ctx.profile.post_process_group(&ctx.target, group);
            debug!(
                group = %group.class_name,
                resource = ?group.resource_path,
                "processed group"
            );
        }

        ctx.ir = Some(ir);
        Ok(())
    }
}

fn process_group(target: &Target, group: &mut OperationGroup) {
    let string_type = target.spec.string_type();

    group.resource_path = group
        .operations
        .first()
        .and_then(|op| op.path.as_deref())
        .map(resource_path_of);

    for operation in &mut group.operations {
        operation.successful_response =
            Some(select_successful_response(&mut operation.responses, &string_type));

        if target.spec.strip_resource_prefix
            && let (Some(resource), Some(path)) = (&group.resource_path, &operation.path)
        {
            operation.path = strip_resource_path(resource, path);
        }
    }

    group.summary = summarize(target, group);
}

/// `/` plus the first segment of a path.
fn resource_path_of(path: &str) -> String {
    let segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    format!("/{}", segment)
}

/// Strip a group's resource path and the separating `/` from an operation
/// path (`/pets/count` under `/pets` becomes `count`).
///
/// Returns `None` when nothing remains. Paths that only share a textual
/// prefix with the resource (`/petsByOwner` under `/pets`) are kept whole.
pub fn strip_resource_path(resource: &str, path: &str) -> Option<String> {
    match path.strip_prefix(resource) {
        Some("") | Some("/") => None,
        Some(rest) if rest.starts_with('/') => Some(rest[1..].to_string()),
        _ => Some(path.to_string()),
    }
}

/// Pick the response a generated method returns.
///
/// A lone wildcard response wins and is typed as the generic string. Else
/// the first 2xx response with a non-primitive body wins. Else a generic
/// string response is synthesized. The chosen response is updated in
/// place and a copy returned.
pub fn select_successful_response(responses: &mut [Response], string_type: &str) -> Response {
    if let [only] = &mut *responses
        && only.is_wildcard()
    {
        only.data_type = Some(string_type.to_string());
        mark_list(only);
        return only.clone();
    }

    match responses
        .iter_mut()
        .find(|r| r.is_success() && r.data_type.is_some() && !r.is_primitive)
    {
        Some(response) => {
            mark_list(response);
            response.clone()
        }
        None => Response::generic(string_type),
    }
}

fn mark_list(response: &mut Response) {
    response.is_list_container = response.container == ContainerKind::List;
}

fn summarize(target: &Target, group: &OperationGroup) -> GroupSummary {
    let hints = target.spec.return_hints;
    let mut summary = GroupSummary {
        count_return_type: hints.count.to_string(),
        delete_return_type: hints.delete.to_string(),
        ..GroupSummary::default()
    };

    for operation in &group.operations {
        let returns = operation
            .successful_response
            .as_ref()
            .and_then(|r| r.data_type.clone());

        match operation.operation_id.as_str() {
            "create" => summary.has_create = true,
            "upsert" => summary.has_upsert = true,
            "find" => summary.has_find = true,
            "findOne" => summary.has_find_one = true,
            "findById" => summary.has_find_by_id = true,
            "count" => {
                summary.has_count = true;
                if let Some(returns) = returns {
                    summary.count_return_type = returns;
                }
            }
            "deleteById" => {
                summary.has_delete_by_id = true;
                if let Some(returns) = returns {
                    summary.delete_return_type = returns;
                }
            }
            _ => {}
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config, Profile,
        pipeline::phases::{BuildPhase, ModelPhase, PropertyPhase},
        testing::{PlainProfile, petstore},
    };

    fn body(code: &str, data_type: &str, container: ContainerKind) -> Response {
        let mut response = Response::new(code).with_body(data_type);
        response.container = container;
        response
    }

    #[test]
    fn test_lone_wildcard_is_coerced_to_string() {
        let mut responses = vec![body("default", "Pet", ContainerKind::None)];
        let chosen = select_successful_response(&mut responses, "String");

        assert_eq!(chosen.data_type.as_deref(), Some("String"));
        assert_eq!(responses[0].data_type.as_deref(), Some("String"));
    }

    #[test]
    fn test_first_success_with_model_body_wins() {
        let mut primitive = Response::new("200");
        primitive.data_type = Some("Int".into());
        let mut responses = vec![
            Response::new("404"),
            primitive,
            body("201", "[Pet]", ContainerKind::List),
            body("202", "Pet", ContainerKind::None),
        ];

        let chosen = select_successful_response(&mut responses, "String");
        assert_eq!(chosen.code, "201");
        assert!(chosen.is_list_container);
        assert!(responses[2].is_list_container);
    }

    #[test]
    fn test_generic_response_synthesized() {
        let mut responses = vec![Response::new("204"), body("default", "Error", ContainerKind::None)];
        let chosen = select_successful_response(&mut responses, "String");

        assert_eq!(chosen, Response::generic("String"));
        assert!(select_successful_response(&mut [], "String").code.is_empty());
    }

    #[test]
    fn test_strip_resource_path() {
        assert_eq!(strip_resource_path("/pets", "/pets"), None);
        assert_eq!(strip_resource_path("/pets", "/pets/"), None);
        assert_eq!(
            strip_resource_path("/pets", "/pets/\\(id)").as_deref(),
            Some("\\(id)")
        );
        assert_eq!(
            strip_resource_path("/pets", "/pets/count").as_deref(),
            Some("count")
        );
        assert_eq!(
            strip_resource_path("/pets", "/petsByOwner").as_deref(),
            Some("/petsByOwner")
        );
        assert_eq!(strip_resource_path("/pets", "/store").as_deref(), Some("/store"));
    }

    #[test]
    fn test_group_summary() {
        let (profile, document) = (PlainProfile::new(), petstore());
        let mut ctx = crate::pipeline::GenerationContext::new(
            &profile,
            &document,
            profile.configure(&Config::new()),
        );
        for phase in [&BuildPhase as &dyn Phase, &ModelPhase, &PropertyPhase, &GroupPhase] {
            phase.run(&mut ctx).unwrap();
        }

        let pets = ctx.ir.as_ref().unwrap().group("PetsAPI").unwrap();
        assert_eq!(pets.resource_path.as_deref(), Some("/pets"));
        assert!(pets.summary.has_find);
        assert!(pets.summary.has_create);
        assert!(pets.summary.has_find_by_id);
        assert!(pets.summary.has_delete_by_id);
        assert!(!pets.summary.has_upsert);
        assert!(pets.summary.has_count);
        // primitive count and body-less delete fall back to the generic string
        assert_eq!(pets.summary.count_return_type, "String");
        assert_eq!(pets.summary.delete_return_type, "String");

        // no count or delete operation keeps the profile hints
        let store = ctx.ir.as_ref().unwrap().group("StoreAPI").unwrap();
        assert!(!store.summary.has_count && !store.summary.has_delete_by_id);
        assert_eq!(store.summary.count_return_type, "Int");
        assert_eq!(store.summary.delete_return_type, "Bool");

        let find = &pets.operations[0];
        let success = find.successful_response.as_ref().unwrap();
        assert_eq!(success.data_type.as_deref(), Some("[Pet]"));
        assert!(success.is_list_container);

        // plain profile does not strip prefixes
        assert_eq!(pets.operations[0].path.as_deref(), Some("/pets"));
        assert!(pets.operations.iter().all(|op| op.successful_response.is_some()));
    }
}
