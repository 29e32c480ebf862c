//! `GET /weather/get`: validate coordinates, ask the service, render the result.
//!
//! This is the only place where [`ServiceError`] is turned into an HTTP status.

use actix_web::{
    HttpResponse, ResponseError, http::StatusCode, http::header::ContentType, web,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use weather_core::{Coordinates, ErrorKind, ServiceError, WeatherCondition, WeatherService};

/// Inbound body. Absent and `null` fields both read as zero, which the
/// coordinate check then rejects as unset. PascalCase keys are accepted too.
#[derive(Debug, Deserialize)]
struct WeatherRequest {
    #[serde(alias = "Latitude")]
    latitude: Option<f64>,
    #[serde(alias = "Longitude")]
    longitude: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherResponse {
    pub message: String,
    pub temp: String,
    pub condition: String,
    pub wind: String,
}

impl From<WeatherCondition> for WeatherResponse {
    fn from(w: WeatherCondition) -> Self {
        Self {
            message: format!("Outside it is {} with {} and {}.", w.temperature, w.wind, w.condition),
            temp: w.temperature.to_string(),
            condition: w.condition,
            wind: w.wind.to_string(),
        }
    }
}

/// HTTP wrapper around [`ServiceError`]; the body is the error message as plain text.
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidRequest | ErrorKind::EmptyBody => StatusCode::BAD_REQUEST,
        ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        // A rejected credential is our misconfiguration, not the caller's.
        ErrorKind::InvalidCredential | ErrorKind::MissingConfig | ErrorKind::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.kind())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.0.to_string())
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/weather/get", web::get().to(get_weather))
        .route("/weather/get/", web::get().to(get_weather));
}

async fn get_weather(
    service: web::Data<dyn WeatherService>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    // A literal `null` body carries no coordinates at all.
    let (latitude, longitude) = parse_body(body)?.map_or((0.0, 0.0), |r| {
        (r.latitude.unwrap_or_default(), r.longitude.unwrap_or_default())
    });

    let coords = Coordinates::new(latitude, longitude).inspect_err(|e| {
        debug!(latitude, longitude, error = %e, "rejected coordinates");
    })?;

    let weather = service
        .get_weather(coords.latitude(), coords.longitude())
        .await
        .inspect_err(|e| warn!(error = %e, "weather lookup failed"))?;

    Ok(HttpResponse::Ok().json(WeatherResponse::from(weather)))
}

// Unreadable, empty and malformed bodies all collapse into the same error.
fn parse_body(
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<Option<WeatherRequest>, ServiceError> {
    let bytes = body.map_err(|e| {
        debug!(error = %e, "failed to read request body");
        ServiceError::EmptyBody
    })?;

    if bytes.is_empty() {
        return Err(ServiceError::EmptyBody);
    }

    serde_json::from_slice(&bytes).map_err(|e| {
        debug!(error = %e, "request body is not a coordinate object");
        ServiceError::EmptyBody
    })
}
