use super::{AdvisoryContext, Rule};

/// Any measurable precipitation.
pub struct PrecipitationRule;

impl Rule for PrecipitationRule {
    fn id(&self) -> &'static str {
        "precipitation"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let precipitation = ctx.weather.precipitation;
        if precipitation > 0.0 {
            Some(format!(
                "Rain is expected ({} mm). Plan field operations accordingly.",
                precipitation
            ))
        } else {
            None
        }
    }
}
