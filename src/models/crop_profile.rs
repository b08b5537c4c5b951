use crate::logic::scoring::condition_score;
use serde::Serialize;

/// Crop used when the requested crop type is unknown or empty.
pub const DEFAULT_CROP: &str = "vegetables";

/// Inclusive optimal band for a single growing factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }

    /// 0-100 suitability of `value` for this band.
    pub fn score(&self, value: f64) -> f64 {
        condition_score(value, self.min, self.max)
    }
}

/// Optimal growing conditions for one crop.
///
/// Temperatures are °C, humidity and soil moisture are percentages, pH is on the 0-14 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    pub name: &'static str,
    pub temperature: OptimalRange,
    pub humidity: OptimalRange,
    pub soil_moisture: OptimalRange,
    pub soil_temp: OptimalRange,
    #[serde(rename = "soilPH")]
    pub soil_ph: OptimalRange,
}

const VEGETABLES: CropProfile = CropProfile {
    name: DEFAULT_CROP,
    temperature: OptimalRange::new(15.0, 30.0),
    humidity: OptimalRange::new(50.0, 80.0),
    soil_moisture: OptimalRange::new(60.0, 80.0),
    soil_temp: OptimalRange::new(12.0, 26.0),
    soil_ph: OptimalRange::new(6.0, 7.0),
};

static DEFAULT_PROFILE: CropProfile = VEGETABLES;

static CROP_PROFILES: [CropProfile; 5] = [
    CropProfile {
        name: "rice",
        temperature: OptimalRange::new(20.0, 35.0),
        humidity: OptimalRange::new(60.0, 90.0),
        soil_moisture: OptimalRange::new(70.0, 90.0),
        soil_temp: OptimalRange::new(15.0, 30.0),
        soil_ph: OptimalRange::new(5.5, 7.5),
    },
    CropProfile {
        name: "wheat",
        temperature: OptimalRange::new(12.0, 24.0),
        humidity: OptimalRange::new(40.0, 70.0),
        soil_moisture: OptimalRange::new(40.0, 70.0),
        soil_temp: OptimalRange::new(10.0, 25.0),
        soil_ph: OptimalRange::new(6.0, 7.5),
    },
    CropProfile {
        name: "corn",
        temperature: OptimalRange::new(16.0, 32.0),
        humidity: OptimalRange::new(45.0, 75.0),
        soil_moisture: OptimalRange::new(50.0, 80.0),
        soil_temp: OptimalRange::new(12.0, 28.0),
        soil_ph: OptimalRange::new(5.8, 7.0),
    },
    VEGETABLES,
    CropProfile {
        name: "fruits",
        temperature: OptimalRange::new(18.0, 33.0),
        humidity: OptimalRange::new(50.0, 80.0),
        soil_moisture: OptimalRange::new(50.0, 70.0),
        soil_temp: OptimalRange::new(15.0, 28.0),
        soil_ph: OptimalRange::new(6.0, 7.5),
    },
];

impl CropProfile {
    pub fn all() -> &'static [CropProfile] {
        &CROP_PROFILES
    }

    /// Exact lookup, ignoring case and surrounding whitespace.
    pub fn find(crop_type: &str) -> Option<&'static CropProfile> {
        let key = crop_type.trim();
        CROP_PROFILES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(key))
    }

    /// Lookup that falls back to the vegetables profile for unknown crops.
    pub fn resolve(crop_type: &str) -> &'static CropProfile {
        match Self::find(crop_type) {
            Some(profile) => profile,
            None => {
                tracing::debug!(
                    "Unknown crop type {:?}, using {} profile",
                    crop_type,
                    DEFAULT_CROP
                );
                Self::default_profile()
            }
        }
    }

    /// The vegetables profile.
    pub fn default_profile() -> &'static CropProfile {
        &DEFAULT_PROFILE
    }
}
