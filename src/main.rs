mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod server;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use datasources::{WeatherProvider, WeatherSource};
use logic::PredictionService;
use models::{CropProfile, OptimalRange, PredictionInput, PredictionResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive(cli.config).context("Setup failed")?;
            Ok(())
        }
        Some(Commands::Check) => run_check(cli.config).await,
        Some(Commands::Crops) => {
            print_crops();
            Ok(())
        }
        Some(Commands::Predict {
            location,
            crop,
            soil_moisture,
            soil_temp,
            soil_ph,
            json,
        }) => {
            let input = PredictionInput {
                location,
                soil_moisture,
                soil_temp,
                soil_ph,
                crop_type: crop,
            };
            run_predict(cli.config, input, json).await
        }
        Some(Commands::Serve { host, port }) => run_serve(cli.config, host, port).await,
        None => run_serve(cli.config, None, None).await,
    }
}

fn load_service(config: &Config) -> anyhow::Result<PredictionService<WeatherSource>> {
    let weather = WeatherSource::from_config(&config.weather)
        .context("Failed to initialize weather provider")?;
    Ok(PredictionService::new(weather))
}

async fn run_serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(config_path).context("Failed to load config")?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let service = Arc::new(load_service(&config)?);
    println!(
        "farmcast listening on http://{} (weather: {})",
        config.server.bind_address(),
        service.provider().name()
    );

    server::serve(service, &config.server)
        .await
        .context("Server error")?;
    Ok(())
}

async fn run_predict(
    config_path: Option<PathBuf>,
    input: PredictionInput,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load config")?;
    let service = load_service(&config)?;

    let result = service
        .predict(&input)
        .await
        .with_context(|| format!("Prediction for {} failed", input.location))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_prediction(&input, &result);
    }
    Ok(())
}

async fn run_check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path).context("Failed to load config")?;
    println!("Configuration OK");
    println!("  Server:   {}", config.server.bind_address());
    println!("  Provider: {}", config.weather.provider.as_str());

    let weather = WeatherSource::from_config(&config.weather)
        .context("Failed to initialize weather provider")?;
    match weather.test_connection().await {
        Ok(true) => println!("  Weather:  OK"),
        Ok(false) => println!("  Weather:  UNREACHABLE"),
        Err(e) => println!("  Weather:  FAILED ({})", e),
    }
    Ok(())
}

fn format_range(range: &OptimalRange, unit: &str) -> String {
    format!("{}-{}{}", range.min, range.max, unit)
}

fn print_crops() {
    println!(
        "{:<12}{:>12}{:>12}{:>12}{:>12}{:>10}",
        "Crop", "Air temp", "Humidity", "Moisture", "Soil temp", "pH"
    );
    for profile in CropProfile::all() {
        println!(
            "{:<12}{:>12}{:>12}{:>12}{:>12}{:>10}",
            profile.name,
            format_range(&profile.temperature, "°C"),
            format_range(&profile.humidity, "%"),
            format_range(&profile.soil_moisture, "%"),
            format_range(&profile.soil_temp, "°C"),
            format_range(&profile.soil_ph, ""),
        );
    }
}

fn print_prediction(input: &PredictionInput, result: &PredictionResult) {
    println!("{} at {}", input.crop_type, input.location);
    println!(
        "  Planting score: {:.1}/100{}",
        result.planting_score,
        if result.ideal_planting_conditions {
            " (ideal)"
        } else {
            ""
        }
    );

    if result.has_risks() {
        let mut risks = Vec::new();
        if result.frost_risk {
            risks.push("frost");
        }
        if result.heat_stress_risk {
            risks.push("heat stress");
        }
        println!("  Risks: {}", risks.join(", "));
    }
    if result.irrigation_recommended {
        println!("  Irrigation recommended");
    }

    if result.recommendations.is_empty() {
        println!("  No recommendations - conditions are within range.");
    } else {
        println!("  Recommendations:");
        for rec in &result.recommendations {
            println!("    - {}", rec);
        }
    }
}
