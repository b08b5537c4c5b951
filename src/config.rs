use crate::error::{FarmcastError, Result};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Browser origins allowed to call the API; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Directory of dashboard assets served for non-API paths
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            allowed_origins: Vec::new(),
            static_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accepts the port as a number or as a string, since `${VAR}` substitution
/// always produces text.
fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Number(u16),
        Text(String),
    }

    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(value) => value.trim().parse::<u16>().map_err(|_| {
            D::Error::custom(format!(
                "invalid port '{}' - ensure FARMCAST_PORT environment variable is set",
                value
            ))
        }),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherProviderKind {
    #[default]
    OpenMeteo,
    Mock,
}

impl WeatherProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherProviderKind::OpenMeteo => "open_meteo",
            WeatherProviderKind::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub provider: WeatherProviderKind,
    #[serde(default)]
    pub open_meteo: OpenMeteoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenMeteoConfig {
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Language for place names in geocoding results
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".into()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1".into()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".into()
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            geocoding_url: default_geocoding_url(),
            forecast_url: default_forecast_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmcastError::Config(format!(
                "Config file not found at {:?}. Run `farmcast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmcastError::Config(format!("Failed to read config: {}", e)))?;

        tracing::debug!("Loading configuration from {:?}", config_path);
        Self::from_yaml(&config_str)
    }

    /// Like `load`, but falls back to built-in defaults when no config file
    /// exists in the standard locations. An explicit path must exist.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_some() {
            return Self::load(config_override);
        }

        let config_path = Self::find_config_path()?;
        if config_path.exists() {
            Self::load(Some(config_path))
        } else {
            tracing::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse YAML after substituting `${VAR}` placeholders from the environment.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/farmcast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmcastError::Config("Cannot determine config directory".into()))?
            .join("farmcast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive(config_override: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up farmcast!");
        println!();

        // --- Server ---
        println!("API server");
        let host: String = Input::new()
            .with_prompt("  Bind host")
            .default(default_host())
            .interact_text()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        let port: u16 = Input::new()
            .with_prompt("  Port")
            .default(default_port())
            .interact_text()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        println!();

        // --- Weather provider ---
        println!("Weather data");
        let providers = ["Open-Meteo (live, no API key)", "Demo data (offline)"];
        let choice = Select::new()
            .with_prompt("  Provider")
            .items(&providers)
            .default(0)
            .interact()
            .map_err(|e| FarmcastError::Config(format!("Input error: {}", e)))?;

        let provider = if choice == 0 {
            WeatherProviderKind::OpenMeteo
        } else {
            WeatherProviderKind::Mock
        };

        println!();

        let config = Config {
            server: ServerConfig {
                host,
                port,
                ..ServerConfig::default()
            },
            weather: WeatherConfig {
                provider,
                open_meteo: OpenMeteoConfig::default(),
            },
        };

        let config_path = match config_override {
            Some(p) => p,
            None => Self::default_config_path()?,
        };
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)?;

        // Write with a header comment
        let content = format!(
            "# farmcast configuration\n# Generated by `farmcast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FarmcastError::Config(format!("Invalid placeholder pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
