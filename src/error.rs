use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmcastError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The weather provider could not resolve the location or the call failed.
    /// Displays the provider's message unchanged.
    #[error("{0}")]
    WeatherUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FarmcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_unavailable_displays_message_verbatim() {
        let err = FarmcastError::WeatherUnavailable("Location not found: Atlantis".into());
        assert_eq!(err.to_string(), "Location not found: Atlantis");
    }

    #[test]
    fn yaml_errors_convert() {
        let err: FarmcastError = serde_yaml::from_str::<u16>("not a port").unwrap_err().into();
        assert!(matches!(err, FarmcastError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error: "));
    }

    #[test]
    fn invalid_input_is_prefixed() {
        let err = FarmcastError::InvalidInput("soilPH must be a number".into());
        assert_eq!(err.to_string(), "Invalid input: soilPH must be a number");
    }
}
