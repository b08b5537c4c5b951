use super::{AdvisoryContext, Rule};

/// Summary line when the assessment flagged irrigation.
///
/// Fires independently of the soil moisture rule, so both can appear.
pub struct IrrigationRule;

impl Rule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        ctx.assessment
            .irrigation_recommended
            .then(|| "Irrigation is recommended based on current conditions.".to_string())
    }
}
