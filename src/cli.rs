use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "farmcast",
    version,
    about = "Farm condition scoring with crop-specific planting recommendations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the prediction API (default)
    Serve {
        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Score current conditions for one location and crop
    Predict {
        #[arg(short, long)]
        location: String,
        /// rice, wheat, corn, vegetables or fruits
        #[arg(long, default_value = "vegetables")]
        crop: String,
        /// Soil moisture (%)
        #[arg(long, allow_negative_numbers = true)]
        soil_moisture: f64,
        /// Soil temperature (°C)
        #[arg(long, allow_negative_numbers = true)]
        soil_temp: f64,
        #[arg(long, allow_negative_numbers = true)]
        soil_ph: f64,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List crop profiles and their optimal ranges
    Crops,
    /// Re-run interactive setup
    Init,
    /// Validate config and test the weather provider
    Check,
}

impl Cli {
    /// Log filter implied by `-v` flags
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
