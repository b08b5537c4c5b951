use super::WeatherProvider;
use crate::error::{FarmcastError, Result};
use crate::models::{LocationMatch, WeatherSnapshot};

const DEFAULT_ENTRY: &str = "Default";

struct DemoLocation {
    name: &'static str,
    region: &'static str,
    latitude: f64,
    longitude: f64,
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    precipitation: f64,
    condition: &'static str,
}

static DEMO_LOCATIONS: [DemoLocation; 5] = [
    DemoLocation {
        name: "New York",
        region: "New York",
        latitude: 40.71,
        longitude: -74.01,
        temperature: 22.0,
        humidity: 65.0,
        wind_speed: 12.0,
        precipitation: 0.0,
        condition: "clear",
    },
    DemoLocation {
        name: "San Francisco",
        region: "California",
        latitude: 37.77,
        longitude: -122.42,
        temperature: 18.0,
        humidity: 80.0,
        wind_speed: 18.0,
        precipitation: 0.0,
        condition: "foggy",
    },
    DemoLocation {
        name: "Chicago",
        region: "Illinois",
        latitude: 41.88,
        longitude: -87.63,
        temperature: 15.0,
        humidity: 60.0,
        wind_speed: 25.0,
        precipitation: 0.0,
        condition: "windy",
    },
    DemoLocation {
        name: "Miami",
        region: "Florida",
        latitude: 25.76,
        longitude: -80.19,
        temperature: 30.0,
        humidity: 85.0,
        wind_speed: 8.0,
        precipitation: 5.0,
        condition: "partly cloudy",
    },
    DemoLocation {
        name: DEFAULT_ENTRY,
        region: "",
        latitude: 0.0,
        longitude: 0.0,
        temperature: 21.0,
        humidity: 65.0,
        wind_speed: 10.0,
        precipitation: 0.0,
        condition: "clear",
    },
];

/// Offline provider backed by a fixed table of demo locations.
///
/// Lookup tries an exact match, then a case-insensitive substring match, then the
/// default entry, so any non-blank location resolves.
#[derive(Debug, Clone, Default)]
pub struct MockWeatherClient;

impl MockWeatherClient {
    pub fn new() -> Self {
        Self
    }

    fn lookup(location: &str) -> &'static DemoLocation {
        let wanted = location.trim();
        let lowered = wanted.to_lowercase();

        DEMO_LOCATIONS
            .iter()
            .find(|entry| entry.name == wanted)
            .or_else(|| {
                DEMO_LOCATIONS
                    .iter()
                    .find(|entry| lowered.contains(&entry.name.to_lowercase()))
            })
            .unwrap_or(&DEMO_LOCATIONS[DEMO_LOCATIONS.len() - 1])
    }
}

impl WeatherProvider for MockWeatherClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn current_conditions(&self, location: &str) -> Result<WeatherSnapshot> {
        if location.trim().is_empty() {
            return Err(FarmcastError::WeatherUnavailable(
                "Location is required".to_string(),
            ));
        }

        let entry = Self::lookup(location);
        tracing::debug!("Demo weather for {:?} resolved to {}", location, entry.name);

        let snapshot = WeatherSnapshot::new(
            entry.temperature,
            entry.humidity,
            entry.wind_speed,
            entry.precipitation,
            entry.condition,
        );

        // The fallback entry is not a real place
        if entry.name == DEFAULT_ENTRY {
            Ok(snapshot)
        } else {
            Ok(snapshot.with_location(entry.name))
        }
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<LocationMatch>> {
        let lowered = query.trim().to_lowercase();

        Ok(DEMO_LOCATIONS
            .iter()
            .filter(|entry| entry.name != DEFAULT_ENTRY)
            .filter(|entry| entry.name.to_lowercase().contains(&lowered))
            .map(|entry| LocationMatch {
                name: entry.name.to_string(),
                region: Some(entry.region.to_string()),
                country: Some("United States".to_string()),
                latitude: entry.latitude,
                longitude: entry.longitude,
                timezone: None,
            })
            .collect())
    }

    async fn test_connection(&self) -> Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exact_match() {
        let weather = MockWeatherClient::new()
            .current_conditions("San Francisco")
            .await
            .unwrap();
        assert_eq!(weather.temperature, 18.0);
        assert_eq!(weather.humidity, 80.0);
        assert_eq!(weather.condition, "foggy");
        assert_eq!(weather.resolved_location.as_deref(), Some("San Francisco"));
    }

    #[tokio::test]
    async fn substring_match_ignores_case() {
        let weather = MockWeatherClient::new()
            .current_conditions("  downtown chicago, IL ")
            .await
            .unwrap();
        assert_eq!(weather.wind_speed, 25.0);
        assert_eq!(weather.resolved_location.as_deref(), Some("Chicago"));
    }

    #[tokio::test]
    async fn unknown_location_uses_default() {
        let weather = MockWeatherClient::new()
            .current_conditions("Chennai, India")
            .await
            .unwrap();
        assert_eq!(weather.temperature, 21.0);
        assert_eq!(weather.humidity, 65.0);
        assert!(weather.resolved_location.is_none());

        let json = serde_json::to_value(&weather).unwrap();
        assert!(json.get("resolvedLocation").is_none());
    }

    #[tokio::test]
    async fn blank_location_is_unavailable() {
        let err = MockWeatherClient::new()
            .current_conditions("   ")
            .await
            .unwrap_err();
        assert!(
            matches!(err, FarmcastError::WeatherUnavailable(ref m) if m == "Location is required")
        );
    }

    #[tokio::test]
    async fn search_skips_default_entry() {
        let client = MockWeatherClient::new();
        let all = client.search_locations("").await.unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|l| l.name != "Default"));

        let miami = client.search_locations("mia").await.unwrap();
        assert_eq!(miami.len(), 1);
        assert_eq!(miami[0].display_name(), "Miami, Florida, United States");
    }
}
