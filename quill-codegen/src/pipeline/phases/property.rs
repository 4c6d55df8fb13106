//! Property phase - flags, the property hook, enum cases and defaults.

use quill_core::{enum_case_name, enum_type_name};
use quill_ir::EnumCase;
use tracing::debug;

use crate::{
    Result, defaults,
    pipeline::{GenerationContext, Phase},
};

/// Phase that finalizes every property of every model.
///
/// Runs the profile's property hook before synthesizing enum names and
/// defaults, so a hook that changes `required` or a type is reflected in
/// the literal.
pub struct PropertyPhase;

impl Phase for PropertyPhase {
    fn name(&self) -> &'static str {
        "property"
    }

    fn description(&self) -> &'static str {
        "Classify properties, synthesize enum cases and default values"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let mut ir = ctx.take_ir()?;
        let (profile, target) = (ctx.profile, &ctx.target);

        for model in &mut ir.models {
            for property in &mut model.properties {
                property.flags = defaults::type_flags(
                    &target.spec.classes,
                    &property.data_type,
                    &property.base_type,
                );

                let is_id = property.is_id;
                profile.post_process_property(target, property, is_id);

                if property.is_enum {
                    property.enum_cases = property
                        .allowable_values
                        .iter()
                        .map(|raw| EnumCase {
                            case_name: enum_case_name(raw),
                            raw_value: raw.clone(),
                        })
                        .collect();
                    property.data_type_with_enum = enum_type_name(
                        &target.spec.names,
                        &property.data_type_with_enum,
                        &property.base_name,
                    );
                }

                property.default_value = profile.default_value(target, property);
            }

            model.refresh_flags();
            debug!(model = %model.name, "processed properties");
        }

        ctx.ir = Some(ir);
        Ok(())
    }
}
