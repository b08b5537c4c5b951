use super::predictor::assess;
use super::rules::{AdvisoryContext, RulesEngine};
use crate::datasources::WeatherProvider;
use crate::error::{FarmcastError, Result};
use crate::models::{CropProfile, PredictionInput, PredictionResult, WeatherSnapshot};

/// Message used when the weather provider fails without saying why.
pub const WEATHER_FALLBACK_MESSAGE: &str = "Failed to retrieve weather data";

/// Fetches weather for a request and runs the scoring engine over it.
pub struct PredictionService<W> {
    weather: W,
    rules: RulesEngine,
}

impl<W: WeatherProvider> PredictionService<W> {
    pub fn new(weather: W) -> Self {
        let rules = RulesEngine::new();
        tracing::debug!(
            provider = weather.name(),
            rules = ?rules.rule_ids(),
            "Prediction service ready"
        );
        Self { weather, rules }
    }

    pub fn provider(&self) -> &W {
        &self.weather
    }

    /// Fetch current weather for the input's location and score it.
    ///
    /// The only failure is `WeatherUnavailable`; readings are not validated here.
    pub async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult> {
        let weather = self
            .weather
            .current_conditions(&input.location)
            .await
            .map_err(|e| {
                tracing::warn!("Weather lookup for {:?} failed: {}", input.location, e);
                into_weather_unavailable(e)
            })?;

        tracing::debug!(
            location = %input.location,
            temperature = weather.temperature,
            humidity = weather.humidity,
            "Weather conditions fetched"
        );

        Ok(self.evaluate(&weather, input))
    }

    /// Score an input against known weather. Pure and deterministic.
    pub fn evaluate(&self, weather: &WeatherSnapshot, input: &PredictionInput) -> PredictionResult {
        let profile = CropProfile::resolve(&input.crop_type);
        let assessment = assess(weather, input, profile);

        let recommendations = self.rules.evaluate(&AdvisoryContext {
            weather,
            input,
            profile,
            assessment: &assessment,
        });

        PredictionResult {
            planting_score: assessment.planting_score,
            ideal_planting_conditions: assessment.ideal_planting_conditions,
            frost_risk: assessment.frost_risk,
            heat_stress_risk: assessment.heat_stress_risk,
            irrigation_recommended: assessment.irrigation_recommended,
            recommendations,
            condition_scores: assessment.scores,
        }
    }
}

fn into_weather_unavailable(err: FarmcastError) -> FarmcastError {
    let message = match err {
        FarmcastError::WeatherUnavailable(message) => message,
        other => other.to_string(),
    };

    if message.trim().is_empty() {
        FarmcastError::WeatherUnavailable(WEATHER_FALLBACK_MESSAGE.to_string())
    } else {
        FarmcastError::WeatherUnavailable(message)
    }
}
