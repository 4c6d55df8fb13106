//! Model phase - identity, raw partition and the model hook.

use tracing::debug;

use crate::{
    Result,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

const PHASE: &str = "model";

/// Setting naming the identity property of every model.
pub const PRIMARY_KEY_OPTION: &str = "primaryKeyFieldName";

/// Phase that designates id properties and partitions raw properties.
pub struct ModelPhase;

impl Phase for ModelPhase {
    fn name(&self) -> &'static str {
        PHASE
    }

    fn description(&self) -> &'static str {
        "Designate id properties and collect raw properties"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let mut ir = ctx.take_ir()?;
        let id = ctx.target.settings.string(PRIMARY_KEY_OPTION).map(str::to_string);
        let mut missing = Vec::new();

        for model in &mut ir.models {
            model.id = id.clone();

            if let Some(property) = model.id_property_mut() {
                property.is_id = true;
                property.data_type = ctx.profile.normalize_id_type(&ctx.target, &property.data_type);
            } else if id.is_some() && !model.is_enum_type {
                missing.push(model.name.clone());
            }

            model.raw_indices = model
                .properties
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_raw)
                .map(|(i, _)| i)
                .collect();
            let last = model.raw_indices.len().saturating_sub(1);
            for (n, &index) in model.raw_indices.iter().enumerate() {
                model.properties[index].has_more_raw = n < last;
            }

            ctx.profile.post_process_model(&ctx.target, model);
            model.refresh_flags();
            debug!(model = %model.name, has_id = model.has_id(), "processed model");
        }

        for name in missing {
            ctx.add_diagnostic(
                Diagnostic::info(PHASE, "model has no id property")
                    .at(format!("definitions.{}", name)),
            );
        }

        ctx.ir = Some(ir);
        Ok(())
    }
}
