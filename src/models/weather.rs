use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions for a location, as reported by a weather provider.
///
/// Units: °C, %, km/h, mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub condition: String,
    pub date: DateTime<Utc>,
    /// Place name the provider matched the query to, when it reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_location: Option<String>,
}

impl WeatherSnapshot {
    pub fn new(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        precipitation: f64,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            precipitation,
            condition: condition.into(),
            date: Utc::now(),
            resolved_location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.resolved_location = Some(location.into());
        self
    }
}

/// A place returned by a location search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMatch {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl LocationMatch {
    /// "Name, Region, Country" with missing parts left out.
    pub fn display_name(&self) -> String {
        [
            Some(self.name.as_str()),
            self.region.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Weather condition categories from WMO weather interpretation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    #[default]
    Unknown,
}

impl WeatherCondition {
    pub fn from_wmo_code(code: u16) -> Self {
        match code {
            0 => WeatherCondition::ClearSky,
            1 => WeatherCondition::MainlyClear,
            2 => WeatherCondition::PartlyCloudy,
            3 => WeatherCondition::Overcast,
            45..=49 => WeatherCondition::Fog,
            51..=59 => WeatherCondition::Drizzle,
            61..=69 => WeatherCondition::Rain,
            71..=79 => WeatherCondition::Snow,
            80..=84 => WeatherCondition::RainShowers,
            85..=94 => WeatherCondition::SnowShowers,
            95..=u16::MAX => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear sky",
            WeatherCondition::MainlyClear => "Mainly clear",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Overcast => "Overcast",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::RainShowers => "Rain showers",
            WeatherCondition::SnowShowers => "Snow showers",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
