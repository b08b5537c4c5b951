use crate::datasources::WeatherProvider;
use crate::error::FarmcastError;
use crate::logic::PredictionService;
use crate::models::{CropProfile, LocationMatch, PredictionInput, PredictionResult};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub const MISSING_FIELDS_MESSAGE: &str = "Location and crop type are required";
pub const NON_NUMERIC_MESSAGE: &str = "soilMoisture, soilTemp and soilPH must be numbers";
pub const MISSING_QUERY_MESSAGE: &str = "Query parameter is required";

/// Request body as sent by clients. Every field is optional here so that
/// missing fields produce the API's own messages rather than a serde error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub location: Option<String>,
    pub soil_moisture: Option<f64>,
    pub soil_temp: Option<f64>,
    #[serde(rename = "soilPH")]
    pub soil_ph: Option<f64>,
    pub crop_type: Option<String>,
}

impl TryFrom<PredictionRequest> for PredictionInput {
    type Error = FarmcastError;

    fn try_from(request: PredictionRequest) -> Result<Self, Self::Error> {
        let location = request.location.filter(|l| !l.trim().is_empty());
        let crop_type = request.crop_type.filter(|c| !c.trim().is_empty());
        let (Some(location), Some(crop_type)) = (location, crop_type) else {
            return Err(FarmcastError::InvalidInput(MISSING_FIELDS_MESSAGE.into()));
        };

        match (request.soil_moisture, request.soil_temp, request.soil_ph) {
            (Some(soil_moisture), Some(soil_temp), Some(soil_ph)) => Ok(PredictionInput {
                location,
                soil_moisture,
                soil_temp,
                soil_ph,
                crop_type,
            }),
            _ => Err(FarmcastError::InvalidInput(NON_NUMERIC_MESSAGE.into())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictionEnvelope {
    pub success: bool,
    pub prediction: PredictionResult,
}

#[derive(Debug, Serialize)]
pub struct LocationResults {
    pub results: Vec<LocationMatch>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Error response with the `{success: false, error}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Rejected(StatusCode, String),
    WeatherUnavailable(String),
    Internal(String),
}

impl From<FarmcastError> for ApiError {
    fn from(err: FarmcastError) -> Self {
        match err {
            FarmcastError::InvalidInput(message) => ApiError::BadRequest(message),
            FarmcastError::WeatherUnavailable(message) => ApiError::WeatherUnavailable(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
            other => other,
        };
        ApiError::Rejected(status, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Rejected(status, msg) => (status, msg),
            ApiError::WeatherUnavailable(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(msg) => {
                tracing::error!("Request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

pub async fn predict<W: WeatherProvider + 'static>(
    State(service): State<Arc<PredictionService<W>>>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionEnvelope>, ApiError> {
    let Json(request) = payload?;
    let input = PredictionInput::try_from(request)?;

    tracing::debug!(location = %input.location, crop = %input.crop_type, "Prediction requested");
    let prediction = service.predict(&input).await?;

    Ok(Json(PredictionEnvelope {
        success: true,
        prediction,
    }))
}

pub async fn crops() -> impl IntoResponse {
    Json(json!({ "crops": CropProfile::all() }))
}

pub async fn location_search<W: WeatherProvider + 'static>(
    State(service): State<Arc<PredictionService<W>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<LocationResults>, ApiError> {
    let query = params.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::BadRequest(MISSING_QUERY_MESSAGE.into()));
    }

    let results = service
        .provider()
        .search_locations(query.trim())
        .await
        .map_err(|e| {
            tracing::warn!("Location search for {:?} failed: {}", query, e);
            ApiError::WeatherUnavailable(e.to_string())
        })?;

    Ok(Json(LocationResults { results }))
}

pub async fn health<W: WeatherProvider + 'static>(
    State(service): State<Arc<PredictionService<W>>>,
) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "provider": service.provider().name()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictionRequest {
        PredictionRequest {
            location: Some("Chennai".into()),
            soil_moisture: Some(70.0),
            soil_temp: Some(20.0),
            soil_ph: Some(6.5),
            crop_type: Some("rice".into()),
        }
    }

    #[test]
    fn complete_request_converts() {
        let input = PredictionInput::try_from(request()).unwrap();
        assert_eq!(input.location, "Chennai");
        assert_eq!(input.soil_ph, 6.5);
        assert_eq!(input.crop_type, "rice");
    }

    #[test]
    fn blank_location_or_crop_is_rejected() {
        for req in [
            PredictionRequest {
                location: None,
                ..request()
            },
            PredictionRequest {
                crop_type: Some("  ".into()),
                ..request()
            },
        ] {
            match PredictionInput::try_from(req) {
                Err(FarmcastError::InvalidInput(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
                other => panic!("unexpected: {:?}", other),
            }
        }
    }

    #[test]
    fn missing_reading_is_rejected() {
        let req = PredictionRequest {
            soil_temp: None,
            ..request()
        };
        match PredictionInput::try_from(req) {
            Err(FarmcastError::InvalidInput(msg)) => assert_eq!(msg, NON_NUMERIC_MESSAGE),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn request_uses_wire_names() {
        let req: PredictionRequest = serde_json::from_str(
            r#"{"location":"Miami","soilMoisture":60,"soilTemp":24,"soilPH":6.1,"cropType":"fruits"}"#,
        )
        .unwrap();
        assert_eq!(req.soil_ph, Some(6.1));
        assert_eq!(req.crop_type.as_deref(), Some("fruits"));
    }

    #[test]
    fn engine_errors_map_to_status() {
        let resp = ApiError::from(FarmcastError::WeatherUnavailable("down".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = ApiError::from(FarmcastError::InvalidInput("bad".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::from(FarmcastError::Config("oops".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
