pub mod engine;
pub mod humidity;
pub mod irrigation;
pub mod precipitation;
pub mod soil_moisture;
pub mod soil_ph;
pub mod temperature;
pub mod wind;

pub use engine::RulesEngine;

use super::predictor::Assessment;
use crate::models::{CropProfile, PredictionInput, WeatherSnapshot, DEFAULT_CROP};

/// Everything a rule may look at for one prediction.
pub struct AdvisoryContext<'a> {
    pub weather: &'a WeatherSnapshot,
    pub input: &'a PredictionInput,
    pub profile: &'a CropProfile,
    pub assessment: &'a Assessment,
}

impl AdvisoryContext<'_> {
    /// Crop name as the caller supplied it, or the fallback crop when blank.
    pub fn crop_label(&self) -> &str {
        let crop = self.input.crop_type.trim();
        if crop.is_empty() {
            DEFAULT_CROP
        } else {
            crop
        }
    }
}

/// Trait for advisory rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Evaluate the rule and return advice text if it fires
    fn evaluate(&self, ctx: &AdvisoryContext) -> Option<String>;
}
