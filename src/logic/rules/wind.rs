use super::{AdvisoryContext, Rule};

/// Wind speed (km/h) above which planting should be delayed
pub const HIGH_WIND_KMH: f64 = 20.0;

pub struct WindRule;

impl Rule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String> {
        let wind = ctx.weather.wind_speed;
        if wind > HIGH_WIND_KMH {
            Some(format!(
                "High wind speed ({} km/h). Consider delaying planting or setting up windbreaks.",
                wind
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

    fn with_wind(wind: f64) -> Fixture {
        Fixture::new(
            "vegetables",
            WeatherSnapshot::new(22.0, 65.0, wind, 0.0, "windy"),
            70.0,
            18.0,
            6.5,
        )
    }

    #[test]
    fn strong_wind() {
        let advice = WindRule.evaluate(&with_wind(25.0).ctx()).unwrap();
        assert_eq!(
            advice,
            "High wind speed (25 km/h). Consider delaying planting or setting up windbreaks."
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(WindRule.evaluate(&with_wind(20.0).ctx()).is_none());
        assert!(WindRule.evaluate(&with_wind(20.5).ctx()).is_some());
    }
}
