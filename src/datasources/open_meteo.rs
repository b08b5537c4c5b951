use super::WeatherProvider;
use crate::config::OpenMeteoConfig;
use crate::error::{FarmcastError, Result};
use crate::models::{LocationMatch, WeatherCondition, WeatherSnapshot};
use chrono::NaiveDateTime;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,precipitation,weather_code,wind_speed_10m";

/// Number of matches requested from the location search endpoint
const SEARCH_LIMIT: u8 = 10;

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: OpenMeteoConfig,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    admin1: Option<String>,
    #[serde(default)]
    timezone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    time: String,
    temperature_2m: f64,
    relative_humidity_2m: f64,
    #[serde(default)]
    precipitation: f64,
    #[serde(default)]
    weather_code: Option<u16>,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    reason: String,
}

impl OpenMeteoClient {
    pub fn new(config: OpenMeteoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn search_url(&self, name: &str, count: u8) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/search", self.config.geocoding_url.trim_end_matches('/')),
            &[
                ("name", name.to_string()),
                ("count", count.to_string()),
                ("language", self.config.language.clone()),
                ("format", "json".to_string()),
            ],
        )
        .map_err(|e| FarmcastError::Config(format!("Invalid Open-Meteo geocoding URL: {}", e)))
    }

    fn forecast_url(&self, latitude: f64, longitude: f64) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/forecast", self.config.forecast_url.trim_end_matches('/')),
            &[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("temperature_unit", "celsius".to_string()),
                ("wind_speed_unit", "kmh".to_string()),
                ("precipitation_unit", "mm".to_string()),
                ("timezone", "GMT".to_string()),
            ],
        )
        .map_err(|e| FarmcastError::Config(format!("Invalid Open-Meteo forecast URL: {}", e)))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response =
            self.client.get(url).send().await.map_err(|e| {
                FarmcastError::WeatherUnavailable(format!("Open-Meteo: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.reason)
                .unwrap_or(body);
            return Err(FarmcastError::WeatherUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, reason
            )));
        }

        response.json().await.map_err(|e| {
            FarmcastError::WeatherUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })
    }

    async fn geocode(&self, name: &str, count: u8) -> Result<Vec<GeocodingResult>> {
        let response: GeocodingResponse = self.get_json(self.search_url(name, count)?).await?;
        Ok(response.results)
    }
}

impl WeatherProvider for OpenMeteoClient {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn current_conditions(&self, location: &str) -> Result<WeatherSnapshot> {
        let location = location.trim();
        if location.is_empty() {
            return Err(FarmcastError::WeatherUnavailable(
                "Location is required".to_string(),
            ));
        }

        // The geocoder matches place names only, so "Chennai, India" searches for
        // "Chennai" and uses "India" to choose between candidates.
        let (name, qualifier) = split_location(location);
        let count = if qualifier.is_some() { SEARCH_LIMIT } else { 1 };
        let place = pick_place(self.geocode(name, count).await?, qualifier).ok_or_else(|| {
            FarmcastError::WeatherUnavailable(format!("Location not found: {}", location))
        })?;

        tracing::debug!(
            "Geocoded {:?} to {} ({}, {})",
            location,
            place.name,
            place.latitude,
            place.longitude
        );

        let forecast: ForecastResponse = self
            .get_json(self.forecast_url(place.latitude, place.longitude)?)
            .await?;

        Ok(convert_current(forecast.current, geocoded_match(place)))
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<LocationMatch>> {
        let results = self.geocode(query.trim(), SEARCH_LIMIT).await?;
        Ok(results.into_iter().map(geocoded_match).collect())
    }

    /// Test connection to the Open-Meteo geocoding API
    async fn test_connection(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.search_url("London", 1)?)
            .send()
            .await
            .map_err(|e| FarmcastError::WeatherUnavailable(format!("Open-Meteo: {}", e)))?;

        Ok(response.status().is_success())
    }
}

fn split_location(location: &str) -> (&str, Option<&str>) {
    match location.split_once(',') {
        Some((name, rest)) if !rest.trim().is_empty() => (name.trim(), Some(rest.trim())),
        Some((name, _)) => (name.trim(), None),
        None => (location.trim(), None),
    }
}

/// Candidate whose region and country best match the qualifier; the first on ties.
fn pick_place(
    candidates: Vec<GeocodingResult>,
    qualifier: Option<&str>,
) -> Option<GeocodingResult> {
    let wanted = qualifier.map(str::to_lowercase).unwrap_or_default();
    let mentions = |part: Option<&str>| {
        part.map(str::to_lowercase)
            .is_some_and(|part| !wanted.is_empty() && !part.is_empty() && wanted.contains(&part))
    };

    let mut best: Option<(usize, GeocodingResult)> = None;
    for candidate in candidates {
        let score = usize::from(mentions(candidate.admin1.as_deref()))
            + usize::from(mentions(candidate.country.as_deref()));
        let better = match &best {
            Some((top, _)) => score > *top,
            None => true,
        };
        if better {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

fn geocoded_match(place: GeocodingResult) -> LocationMatch {
    LocationMatch {
        name: place.name,
        region: place.admin1,
        country: place.country,
        latitude: place.latitude,
        longitude: place.longitude,
        timezone: place.timezone,
    }
}

fn convert_current(current: CurrentConditions, place: LocationMatch) -> WeatherSnapshot {
    let condition = current
        .weather_code
        .map(WeatherCondition::from_wmo_code)
        .unwrap_or_default();

    let mut snapshot = WeatherSnapshot::new(
        current.temperature_2m,
        current.relative_humidity_2m,
        current.wind_speed_10m,
        current.precipitation,
        condition.as_str(),
    )
    .with_location(place.display_name());

    // Times come back as GMT without an offset, e.g. 2024-06-01T12:15
    if let Ok(time) = NaiveDateTime::parse_from_str(&current.time, "%Y-%m-%dT%H:%M") {
        snapshot.date = time.and_utc();
    }

    snapshot
}
