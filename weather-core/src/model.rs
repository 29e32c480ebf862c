use crate::{
    classify::{TemperatureLabel, WindLabel},
    error::ServiceError,
};

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Validate a raw pair.
    ///
    /// `(0, 0)` is rejected: in practice it means the caller left both fields
    /// unset rather than asking about the Gulf of Guinea.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ServiceError> {
        if latitude == 0.0 && longitude == 0.0 {
            return Err(ServiceError::invalid_request(
                "latitude and longitude missing or null",
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ServiceError::invalid_request("latitude is out of range"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ServiceError::invalid_request("longitude is out of range"));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Classified weather for one location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCondition {
    pub temperature: TemperatureLabel,
    pub condition: String,
    pub wind: WindLabel,
}
