pub mod mock;
pub mod open_meteo;

pub use mock::MockWeatherClient;
pub use open_meteo::OpenMeteoClient;

use crate::config::{WeatherConfig, WeatherProviderKind};
use crate::error::Result;
use crate::models::{LocationMatch, WeatherSnapshot};
use std::future::Future;

/// Source of current weather conditions for a free-text location.
pub trait WeatherProvider: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &'static str;

    /// Current conditions at `location`. Fails with `WeatherUnavailable` when the
    /// location cannot be resolved or the provider call fails.
    fn current_conditions(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<WeatherSnapshot>> + Send;

    /// Places matching a partial name
    fn search_locations(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LocationMatch>>> + Send;

    fn test_connection(&self) -> impl Future<Output = Result<bool>> + Send;
}

/// The configured weather provider.
pub enum WeatherSource {
    OpenMeteo(OpenMeteoClient),
    Mock(MockWeatherClient),
}

impl WeatherSource {
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        match config.provider {
            WeatherProviderKind::OpenMeteo => {
                tracing::info!("Using Open-Meteo for weather data");
                Ok(WeatherSource::OpenMeteo(OpenMeteoClient::new(
                    config.open_meteo.clone(),
                )?))
            }
            WeatherProviderKind::Mock => {
                tracing::info!("Using built-in demo weather data");
                Ok(WeatherSource::Mock(MockWeatherClient::new()))
            }
        }
    }
}

impl WeatherProvider for WeatherSource {
    fn name(&self) -> &'static str {
        match self {
            WeatherSource::OpenMeteo(client) => client.name(),
            WeatherSource::Mock(client) => client.name(),
        }
    }

    async fn current_conditions(&self, location: &str) -> Result<WeatherSnapshot> {
        match self {
            WeatherSource::OpenMeteo(client) => client.current_conditions(location).await,
            WeatherSource::Mock(client) => client.current_conditions(location).await,
        }
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<LocationMatch>> {
        match self {
            WeatherSource::OpenMeteo(client) => client.search_locations(query).await,
            WeatherSource::Mock(client) => client.search_locations(query).await,
        }
    }

    async fn test_connection(&self) -> Result<bool> {
        match self {
            WeatherSource::OpenMeteo(client) => client.test_connection().await,
            WeatherSource::Mock(client) => client.test_connection().await,
        }
    }
}
