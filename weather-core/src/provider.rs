use crate::{
    config::ProviderConfig, error::ServiceError, provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::{OwCurrentResponse, OwMain, OwWeather, OwWind};

/// Anything that can fetch raw current-weather readings for a coordinate pair.
///
/// Implementations classify upstream failures into [`ServiceError`] so callers
/// never see transport details beyond the error message.
#[async_trait]
pub trait WeatherClient: Send + Sync + Debug {
    async fn get_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OwCurrentResponse, ServiceError>;

    /// Issue a throwaway request to check that the host is reachable and the
    /// credential is accepted.
    async fn probe(&self) -> Result<(), ServiceError> {
        self.get_weather(0.0, 0.0).await.map(|_| ())
    }
}

/// Construct the OpenWeather client from provider config.
pub fn client_from_config(config: &ProviderConfig) -> Result<OpenWeatherClient, ServiceError> {
    OpenWeatherClient::new(config.clone())
}
