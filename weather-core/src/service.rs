use async_trait::async_trait;
use std::fmt::Debug;
use tracing::{debug, info};

use crate::{
    classify::{TemperatureLabel, WindLabel},
    error::ServiceError,
    model::WeatherCondition,
    provider::WeatherClient,
};

/// Condition text used when the provider sends no descriptors.
pub const UNKNOWN_CONDITION: &str = "unknown";

/// Turns a coordinate pair into a classified [`WeatherCondition`].
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    async fn get_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherCondition, ServiceError>;

    /// Startup check that the upstream provider accepts our configuration.
    async fn validate(&self) -> Result<(), ServiceError>;
}

/// Default [`WeatherService`]: fetch from a [`WeatherClient`], then classify.
#[derive(Debug, Clone)]
pub struct ConditionService<C> {
    client: C,
}

impl<C: WeatherClient> ConditionService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: WeatherClient> WeatherService for ConditionService<C> {
    async fn get_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherCondition, ServiceError> {
        let payload = self.client.get_weather(latitude, longitude).await?;

        let temperature = TemperatureLabel::from_feels_like(payload.main.feels_like);
        let wind = WindLabel::from_speed(payload.wind.speed);
        let condition = payload
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_else(|| UNKNOWN_CONDITION.to_string());

        debug!(%temperature, %wind, %condition, "classified weather");

        Ok(WeatherCondition { temperature, condition, wind })
    }

    async fn validate(&self) -> Result<(), ServiceError> {
        self.client.probe().await?;
        info!("weather provider accepted configured credential");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{OwCurrentResponse, OwMain, OwWeather, OwWind};
    use std::sync::Mutex;

    /// Replays a canned outcome and records the coordinates it was asked for.
    #[derive(Debug)]
    struct StubClient {
        outcome: Result<OwCurrentResponse, ServiceError>,
        seen: Mutex<Vec<(f64, f64)>>,
    }

    impl StubClient {
        fn replying(outcome: Result<OwCurrentResponse, ServiceError>) -> Self {
            Self { outcome, seen: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl WeatherClient for StubClient {
        async fn get_weather(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<OwCurrentResponse, ServiceError> {
            self.seen.lock().unwrap().push((latitude, longitude));
            self.outcome.clone()
        }
    }

    fn payload(descriptions: &[&str], feels_like: f64, speed: f64) -> OwCurrentResponse {
        OwCurrentResponse {
            cod: 200,
            weather: descriptions
                .iter()
                .map(|d| OwWeather { description: d.to_string() })
                .collect(),
            main: OwMain { feels_like },
            wind: OwWind { speed },
        }
    }

    #[tokio::test]
    async fn classifies_successful_payload() {
        let svc = ConditionService::new(StubClient::replying(Ok(payload(&["few clouds"], 90.4, 0.0))));

        let got = svc.get_weather(-1.0, 1.0).await.expect("weather");

        assert_eq!(
            got,
            WeatherCondition {
                temperature: TemperatureLabel::Hot,
                condition: "few clouds".into(),
                wind: WindLabel::Calm,
            }
        );
        assert_eq!(*svc.client.seen.lock().unwrap(), vec![(-1.0, 1.0)]);
    }

    #[tokio::test]
    async fn uses_first_descriptor_only() {
        let svc = ConditionService::new(StubClient::replying(Ok(payload(
            &["light rain", "mist"],
            50.0,
            10.0,
        ))));

        let got = svc.get_weather(10.0, 10.0).await.expect("weather");

        assert_eq!(got.condition, "light rain");
        assert_eq!(got.temperature, TemperatureLabel::Cold);
        assert_eq!(got.wind, WindLabel::GentleBreeze);
    }

    #[tokio::test]
    async fn missing_descriptors_yield_unknown() {
        let svc = ConditionService::new(StubClient::replying(Ok(payload(&[], 90.4, 0.0))));

        let got = svc.get_weather(1.0, 1.0).await.expect("weather");

        assert_eq!(got.condition, UNKNOWN_CONDITION);
        assert_eq!(got.temperature, TemperatureLabel::Hot);
        assert_eq!(got.wind, WindLabel::Calm);
    }

    #[tokio::test]
    async fn client_errors_pass_through_unchanged() {
        for err in [
            ServiceError::RateLimited,
            ServiceError::NotFound,
            ServiceError::InvalidCredential,
            ServiceError::internal("error sending request: connection refused"),
        ] {
            let svc = ConditionService::new(StubClient::replying(Err(err.clone())));
            assert_eq!(svc.get_weather(1.0, 1.0).await.unwrap_err(), err);
        }
    }

    #[tokio::test]
    async fn rate_limit_message_is_stable() {
        let svc = ConditionService::new(StubClient::replying(Err(ServiceError::RateLimited)));

        let err = svc.get_weather(1.0, 1.0).await.unwrap_err();

        assert_eq!(err.to_string(), "too many requests; limit reached");
    }

    #[tokio::test]
    async fn validate_probes_origin() {
        let svc = ConditionService::new(StubClient::replying(Ok(payload(&[], 0.0, 0.0))));

        svc.validate().await.expect("validation should pass");

        assert_eq!(*svc.client.seen.lock().unwrap(), vec![(0.0, 0.0)]);
    }

    #[tokio::test]
    async fn validate_surfaces_bad_credential() {
        let svc = ConditionService::new(StubClient::replying(Err(ServiceError::InvalidCredential)));

        let err = svc.validate().await.unwrap_err();

        assert_eq!(err.to_string(), ServiceError::InvalidCredential.to_string());
    }
}
