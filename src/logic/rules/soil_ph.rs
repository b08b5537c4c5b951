use super::{AdvisoryContext, Rule};

/// Soil pH outside the crop's optimal band, with the amendment that corrects it.
pub struct SoilPhRule;

impl Rule for SoilPhRule {
    fn id(&self) -> &'static str {
        "soil_ph"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let ph = ctx.input.soil_ph;
        let band = ctx.profile.soil_ph;
        let crop = ctx.crop_label();

        if band.is_below(ph) {
            Some(format!(
                "Soil pH is too acidic ({}). Consider applying lime to raise pH for optimal \
                 {} growth.",
                ph, crop
            ))
        } else if band.is_above(ph) {
            Some(format!(
                "Soil pH is too alkaline ({}). Consider applying sulfur or organic matter to \
                 lower pH for {}.",
                ph, crop
            ))
        } else {
            None
        }
    }
}
