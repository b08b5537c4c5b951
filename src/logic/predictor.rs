use crate::models::{ConditionScores, CropProfile, PredictionInput, WeatherSnapshot};

pub const TEMPERATURE_WEIGHT: f64 = 0.25;
pub const HUMIDITY_WEIGHT: f64 = 0.15;
pub const SOIL_MOISTURE_WEIGHT: f64 = 0.25;
pub const SOIL_TEMP_WEIGHT: f64 = 0.20;
pub const SOIL_PH_WEIGHT: f64 = 0.15;

/// Planting score a request must exceed to count as ideal
pub const IDEAL_SCORE_THRESHOLD: f64 = 70.0;
/// Air temperature (°C) below which frost is a risk
pub const FROST_TEMP_C: f64 = 2.0;
/// Degrees above the crop's maximum temperature that count as heat stress
pub const HEAT_STRESS_MARGIN_C: f64 = 5.0;
/// Soil moisture sub-score below which irrigation is recommended
const LOW_MOISTURE_SCORE: f64 = 50.0;

/// Scores and risk flags for one set of conditions, before recommendations are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub scores: ConditionScores,
    pub planting_score: f64,
    pub ideal_planting_conditions: bool,
    pub frost_risk: bool,
    pub heat_stress_risk: bool,
    pub irrigation_recommended: bool,
}

/// Combine the five weighted sub-scores and derive the risk flags.
pub fn assess(
    weather: &WeatherSnapshot,
    input: &PredictionInput,
    profile: &CropProfile,
) -> Assessment {
    let scores = ConditionScores {
        temperature: profile.temperature.score(weather.temperature),
        humidity: profile.humidity.score(weather.humidity),
        soil_moisture: profile.soil_moisture.score(input.soil_moisture),
        soil_temp: profile.soil_temp.score(input.soil_temp),
        soil_ph: profile.soil_ph.score(input.soil_ph),
    };

    let planting_score = planting_score(&scores);

    Assessment {
        scores,
        planting_score,
        ideal_planting_conditions: is_ideal(planting_score),
        frost_risk: has_frost_risk(weather.temperature),
        heat_stress_risk: has_heat_stress_risk(weather.temperature, profile),
        irrigation_recommended: needs_irrigation(&scores, weather, input, profile),
    }
}

pub fn planting_score(scores: &ConditionScores) -> f64 {
    scores.temperature * TEMPERATURE_WEIGHT
        + scores.humidity * HUMIDITY_WEIGHT
        + scores.soil_moisture * SOIL_MOISTURE_WEIGHT
        + scores.soil_temp * SOIL_TEMP_WEIGHT
        + scores.soil_ph * SOIL_PH_WEIGHT
}

pub fn is_ideal(planting_score: f64) -> bool {
    planting_score > IDEAL_SCORE_THRESHOLD
}

pub fn has_frost_risk(temperature: f64) -> bool {
    temperature < FROST_TEMP_C
}

pub fn has_heat_stress_risk(temperature: f64, profile: &CropProfile) -> bool {
    temperature > profile.temperature.max + HEAT_STRESS_MARGIN_C
}

/// Irrigate when soil moisture scores poorly, or when it is hot and the soil is
/// drier than 80% of the crop's upper moisture bound.
fn needs_irrigation(
    scores: &ConditionScores,
    weather: &WeatherSnapshot,
    input: &PredictionInput,
    profile: &CropProfile,
) -> bool {
    let hot = weather.temperature > profile.temperature.max * 0.9;
    let drying = input.soil_moisture < profile.soil_moisture.max * 0.8;
    scores.soil_moisture < LOW_MOISTURE_SCORE || (hot && drying)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(crop: &str, moisture: f64, soil_temp: f64, ph: f64) -> PredictionInput {
        PredictionInput {
            location: "Test Farm".into(),
            soil_moisture: moisture,
            soil_temp,
            soil_ph: ph,
            crop_type: crop.into(),
        }
    }

    fn weather(temperature: f64, humidity: f64) -> WeatherSnapshot {
        WeatherSnapshot::new(temperature, humidity, 10.0, 0.0, "clear")
    }

    #[test]
    fn weights_sum_to_one() {
        let total = TEMPERATURE_WEIGHT
            + HUMIDITY_WEIGHT
            + SOIL_MOISTURE_WEIGHT
            + SOIL_TEMP_WEIGHT
            + SOIL_PH_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_scores_give_100() {
        let scores = ConditionScores {
            temperature: 100.0,
            humidity: 100.0,
            soil_moisture: 100.0,
            soil_temp: 100.0,
            soil_ph: 100.0,
        };
        assert!((planting_score(&scores) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn planting_score_is_bounded() {
        for crop in CropProfile::all() {
            for (temp, humidity, moisture, soil_temp, ph) in [
                (-20.0, 0.0, 0.0, -5.0, 0.0),
                (25.0, 70.0, 60.0, 20.0, 6.5),
                (60.0, 100.0, 100.0, 60.0, 14.0),
            ] {
                let a = assess(
                    &weather(temp, humidity),
                    &input(crop.name, moisture, soil_temp, ph),
                    crop,
                );
                assert!(
                    a.planting_score >= 0.0 && a.planting_score <= 100.0 + 1e-9,
                    "{} -> {}",
                    crop.name,
                    a.planting_score
                );
            }
        }
    }

    #[test]
    fn ideal_threshold_is_strict() {
        assert!(!is_ideal(70.0));
        assert!(is_ideal(70.0001));
        assert!(!is_ideal(69.9));
    }

    #[test]
    fn frost_threshold_is_strict() {
        assert!(has_frost_risk(1.9));
        assert!(has_frost_risk(-5.0));
        assert!(!has_frost_risk(2.0));
    }

    #[test]
    fn heat_stress_is_five_degrees_over_max() {
        let wheat = CropProfile::resolve("wheat");
        assert!(!has_heat_stress_risk(29.0, wheat));
        assert!(has_heat_stress_risk(29.5, wheat));
        assert!(has_heat_stress_risk(35.0, wheat));
    }

    #[test]
    fn rice_near_optimal_conditions() {
        let rice = CropProfile::resolve("rice");
        let a = assess(&weather(25.0, 75.0), &input("rice", 80.0, 22.0, 6.5), rice);

        assert!(a.scores.temperature > 90.0);
        assert!((a.scores.humidity - 100.0).abs() < 1e-9);
        assert!((a.scores.soil_moisture - 100.0).abs() < 1e-9);
        assert!(a.scores.soil_temp > 95.0);
        assert!((a.scores.soil_ph - 100.0).abs() < 1e-9);
        assert!(a.planting_score > 90.0);
        assert!(a.ideal_planting_conditions);
        assert!(!a.frost_risk);
        assert!(!a.heat_stress_risk);
        assert!(!a.irrigation_recommended);
    }

    #[test]
    fn low_moisture_score_triggers_irrigation() {
        let vegetables = CropProfile::resolve("vegetables");
        // 20% vs min 60: score 100 - 40/60*100 = 33
        let a = assess(
            &weather(20.0, 65.0),
            &input("vegetables", 20.0, 18.0, 6.5),
            vegetables,
        );
        assert!(a.scores.soil_moisture < 50.0);
        assert!(a.irrigation_recommended);
    }

    #[test]
    fn heat_with_drying_soil_triggers_irrigation() {
        let corn = CropProfile::resolve("corn");
        // 30°C > 32 * 0.9 and 62% < 80 * 0.8, while the moisture score itself is fine
        let a = assess(&weather(30.0, 60.0), &input("corn", 62.0, 20.0, 6.4), corn);
        assert!(a.scores.soil_moisture >= 50.0);
        assert!(a.irrigation_recommended);

        // Same heat with wetter soil does not
        let a = assess(&weather(30.0, 60.0), &input("corn", 70.0, 20.0, 6.4), corn);
        assert!(!a.irrigation_recommended);
    }

    #[test]
    fn nan_reading_propagates() {
        let rice = CropProfile::resolve("rice");
        let a = assess(
            &weather(25.0, 75.0),
            &input("rice", f64::NAN, 22.0, 6.5),
            rice,
        );
        assert!(a.planting_score.is_nan());
        assert!(!a.ideal_planting_conditions);
    }
}
