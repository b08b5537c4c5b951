use super::{AdvisoryContext, Rule};

/// Air temperature outside the crop's optimal band.
///
/// Low and high are mutually exclusive since both compare the same reading
/// against one band.
pub struct TemperatureRule;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let temperature = ctx.weather.temperature;
        let band = ctx.profile.temperature;

        if band.is_below(temperature) {
            Some(format!(
                "Current temperature is low ({}°C). Consider waiting for warmer conditions \
                 or use protective covers.",
                temperature
            ))
        } else if band.is_above(temperature) {
            Some(format!(
                "High temperature detected ({}°C). Consider planting during cooler parts of \
                 the day and ensure adequate irrigation.",
                temperature
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::testing::Fixture;
    use crate::models::WeatherSnapshot;

    fn with_temp(crop: &str, temperature: f64) -> Fixture {
        Fixture::new(
            crop,
            WeatherSnapshot::new(temperature, 55.0, 5.0, 0.0, "clear"),
            55.0,
            15.0,
            6.8,
        )
    }

    #[test]
    fn low_temperature_includes_reading() {
        let fixture = with_temp("wheat", 8.0);
        let advice = TemperatureRule.evaluate(&fixture.ctx()).unwrap();
        assert_eq!(
            advice,
            "Current temperature is low (8°C). Consider waiting for warmer conditions \
             or use protective covers."
        );
    }

    #[test]
    fn high_temperature_includes_reading() {
        let fixture = with_temp("wheat", 35.0);
        let advice = TemperatureRule.evaluate(&fixture.ctx()).unwrap();
        assert!(advice.starts_with("High temperature detected (35°C)."));
        assert!(advice.to_lowercase().contains("high temperature"));
    }

    #[test]
    fn fractional_readings_render_literally() {
        let fixture = with_temp("wheat", 24.5);
        let advice = TemperatureRule.evaluate(&fixture.ctx()).unwrap();
        assert!(advice.contains("(24.5°C)"));
    }

    #[test]
    fn band_edges_are_silent() {
        assert!(TemperatureRule.evaluate(&with_temp("wheat", 12.0).ctx()).is_none());
        assert!(TemperatureRule.evaluate(&with_temp("wheat", 24.0).ctx()).is_none());
    }
}
