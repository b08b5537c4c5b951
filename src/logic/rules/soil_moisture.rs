use super::{AdvisoryContext, Rule};

/// Soil moisture outside the crop's optimal band.
pub struct SoilMoistureRule;

impl Rule for SoilMoistureRule {
    fn id(&self) -> &'static str {
        "soil_moisture"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let moisture = ctx.input.soil_moisture;
        let band = ctx.profile.soil_moisture;

        if band.is_below(moisture) {
            Some(format!(
                "Soil moisture is low ({}%). Irrigation is recommended before planting.",
                moisture
            ))
        } else if band.is_above(moisture) {
            Some(format!(
                "Soil moisture is high ({}%). Consider improving drainage or waiting for \
                 drier conditions.",
                moisture
            ))
        } else {
            None
        }
    }
}
