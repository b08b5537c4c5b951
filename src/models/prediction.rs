use serde::{Deserialize, Serialize};

/// Farmer-supplied readings for one prediction request.
///
/// Readings are not clamped; out-of-range values flow straight into the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionInput {
    pub location: String,
    /// Percentage
    pub soil_moisture: f64,
    /// °C
    pub soil_temp: f64,
    #[serde(rename = "soilPH")]
    pub soil_ph: f64,
    pub crop_type: String,
}

/// Per-factor 0-100 suitability scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionScores {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub soil_temp: f64,
    #[serde(rename = "soilPH")]
    pub soil_ph: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub planting_score: f64,
    pub ideal_planting_conditions: bool,
    pub frost_risk: bool,
    pub heat_stress_risk: bool,
    pub irrigation_recommended: bool,
    /// In rule evaluation order; empty means no concerns.
    pub recommendations: Vec<String>,
    pub condition_scores: ConditionScores,
}

impl PredictionResult {
    pub fn has_risks(&self) -> bool {
        self.frost_risk || self.heat_stress_risk
    }
}
