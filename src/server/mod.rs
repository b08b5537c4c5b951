pub mod handlers;

use crate::config::ServerConfig;
use crate::datasources::WeatherProvider;
use crate::error::{FarmcastError, Result};
use crate::logic::PredictionService;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::TraceLayer,
};

pub fn build_router<W: WeatherProvider + 'static>(
    service: Arc<PredictionService<W>>,
    config: &ServerConfig,
) -> Result<Router> {
    let mut router = Router::new()
        .route("/health", get(handlers::health::<W>))
        .route("/api/farm-predictions", post(handlers::predict::<W>))
        .route("/api/crops", get(handlers::crops))
        .route("/api/location-search", get(handlers::location_search::<W>))
        .with_state(service);

    if let Some(dir) = &config.static_dir {
        tracing::debug!("Serving static files from {:?}", dir);
        router = router.fallback_service(ServeDir::new(dir));
    }

    // Middleware (applied in reverse order)
    Ok(router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                FarmcastError::Config(format!("Invalid allowed origin '{}'", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve<W: WeatherProvider + 'static>(
    service: Arc<PredictionService<W>>,
    config: &ServerConfig,
) -> Result<()> {
    let app = build_router(service, config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
