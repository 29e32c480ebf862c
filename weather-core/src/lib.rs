//! Core library for the weather condition service.
//!
//! This crate defines:
//! - The error taxonomy shared by every layer
//! - Configuration loading
//! - The OpenWeather upstream client
//! - Classification of raw readings into labels
//! - The service that ties client and classification together
//!
//! It is used by `weather-server`, but has no HTTP server dependency of its own.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;

pub use classify::{TemperatureLabel, WindLabel};
pub use config::{Config, ProviderConfig, RawConfig};
pub use error::{ErrorKind, ServiceError};
pub use model::{Coordinates, WeatherCondition};
pub use provider::{WeatherClient, openweather::OpenWeatherClient};
pub use service::{ConditionService, WeatherService};
