use async_trait::async_trait;
use reqwest::{Client, Url, header::CONTENT_TYPE, tls};
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::{config::ProviderConfig, error::ServiceError};

use super::WeatherClient;

/// Unit system requested from the provider; classification thresholds assume °F and mph.
const UNITS: &str = "imperial";

/// Client for the OpenWeatherMap current-weather endpoint.
///
/// The inner [`Client`] pools connections and is shared across requests.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: ProviderConfig,
    http: Client,
}

impl OpenWeatherClient {
    /// Build a client restricted to TLS 1.2 and 1.3. Plain `http://` hosts are
    /// still reachable, which is what test doubles use.
    pub fn new(config: ProviderConfig) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .min_tls_version(tls::Version::TLS_1_2)
            .max_tls_version(tls::Version::TLS_1_3)
            .build()
            .map_err(|e| ServiceError::internal(format!("error building http client: {e}")))?;

        Ok(Self { config, http })
    }

    fn request_url(&self, latitude: f64, longitude: f64) -> Result<Url, ServiceError> {
        let mut url = Url::parse(&self.config.host)
            .map_err(|e| ServiceError::internal(format!("error sending request: {e}")))?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("units", UNITS)
            .append_pair("appid", &self.config.app_id);
        Ok(url)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    async fn get_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OwCurrentResponse, ServiceError> {
        debug!(latitude, longitude, "requesting current weather");

        let url = self.request_url(latitude, longitude)?;

        let res = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ServiceError::internal(format!("error sending request: {}", describe(e))))?;

        let body = res
            .bytes()
            .await
            .map_err(|e| ServiceError::internal(format!("error reading response: {}", describe(e))))?;

        let parsed: OwCurrentResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "provider returned an undecodable payload");
            ServiceError::internal(format!("error unmarshalling response: {e}"))
        })?;

        debug!(cod = parsed.cod, "provider responded");
        classify_status(parsed)
    }
}

/// Render a transport error as its underlying cause chain.
///
/// The URL is stripped first: it carries the credential in its query string.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut causes = Vec::new();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    if causes.is_empty() { err.to_string() } else { causes.join(": ") }
}

/// Map the status code embedded in the payload onto the error taxonomy.
///
/// The HTTP status line is not consulted; the provider mirrors it in `cod`.
fn classify_status(payload: OwCurrentResponse) -> Result<OwCurrentResponse, ServiceError> {
    match payload.cod {
        200 => Ok(payload),
        401 => Err(ServiceError::InvalidCredential),
        404 => Err(ServiceError::NotFound),
        429 => Err(ServiceError::RateLimited),
        other => {
            warn!(cod = other, "provider returned an unexpected status");
            Err(ServiceError::Internal(None))
        }
    }
}

/// The subset of the current-weather payload this service consumes.
///
/// Every field defaults, because error payloads only carry `cod` and `message`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwCurrentResponse {
    #[serde(deserialize_with = "cod_from_number_or_string")]
    pub cod: i64,
    pub weather: Vec<OwWeather>,
    pub main: OwMain,
    pub wind: OwWind,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwWeather {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwMain {
    pub feels_like: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwWind {
    pub speed: f64,
}

// Some provider error payloads send `"cod": "404"` instead of a number.
fn cod_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cod {
        Number(i64),
        Text(String),
    }

    match Cod::deserialize(deserializer)? {
        Cod::Number(n) => Ok(n),
        Cod::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
