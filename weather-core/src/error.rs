use thiserror::Error;

/// Every failure the service can report, returned by value.
///
/// Messages are part of the public contract: the HTTP layer writes them
/// verbatim into response bodies, so the `Display` output must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("failed to start service: missing required config for `{0}`")]
    MissingConfig(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("config `WEATHER_ID` is invalid")]
    InvalidCredential,

    #[error("{}", .0.as_deref().unwrap_or("internal service error"))]
    Internal(Option<String>),

    #[error("too many requests; limit reached")]
    RateLimited,

    #[error("weather for coordinates not found")]
    NotFound,

    #[error("request body missing: expected a JSON object with latitude and longitude")]
    EmptyBody,
}

/// Fieldless view of [`ServiceError`], handy for matching on the category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingConfig,
    InvalidRequest,
    InvalidCredential,
    Internal,
    RateLimited,
    NotFound,
    EmptyBody,
}

impl ServiceError {
    pub fn missing_config(field: impl Into<String>) -> Self {
        Self::MissingConfig(field.into())
    }

    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest(reason.into())
    }

    /// Internal error carrying a detail message that replaces the generic text.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(Some(detail.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::MissingConfig(_) => ErrorKind::MissingConfig,
            ServiceError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ServiceError::InvalidCredential => ErrorKind::InvalidCredential,
            ServiceError::Internal(_) => ErrorKind::Internal,
            ServiceError::RateLimited => ErrorKind::RateLimited,
            ServiceError::NotFound => ErrorKind::NotFound,
            ServiceError::EmptyBody => ErrorKind::EmptyBody,
        }
    }
}
