pub mod predictor;
pub mod rules;
pub mod scoring;
pub mod service;

pub use service::PredictionService;
