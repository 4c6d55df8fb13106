//! Examples phase - filter and normalize operation examples.

use crate::{
    Result,
    pipeline::{GenerationContext, Phase},
};

/// Phase that keeps the examples a profile can embed and rewrites them
/// into the profile's literal form.
pub struct ExamplePhase;

impl Phase for ExamplePhase {
    fn name(&self) -> &'static str {
        "examples"
    }

    fn description(&self) -> &'static str {
        "Filter and normalize response examples"
    }

    fn run(&self, ctx: &mut GenerationContext<'_>) -> Result<()> {
        let mut ir = ctx.take_ir()?;
        let (profile, target) = (ctx.profile, &ctx.target);

        for operation in ir.groups.iter_mut().flat_map(|g| g.operations.iter_mut()) {
            operation
                .examples
                .retain(|example| profile.keeps_example(target, example));
            for example in &mut operation.examples {
                example.example = profile.normalize_example(target, &example.example);
            }
        }

        ctx.ir = Some(ir);
        Ok(())
    }
}
