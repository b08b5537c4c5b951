use super::{AdvisoryContext, Rule};

/// Relative humidity outside the crop's optimal band.
pub struct HumidityRule;

impl Rule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let humidity = ctx.weather.humidity;
        let band = ctx.profile.humidity;

        if band.is_below(humidity) {
            Some(format!(
                "Low humidity levels ({}%). Consider increasing irrigation frequency.",
                humidity
            ))
        } else if band.is_above(humidity) {
            Some(format!(
                "High humidity levels ({}%). Monitor for disease and ensure adequate air \
                 circulation.",
                humidity
            ))
        } else {
            None
        }
    }
}
