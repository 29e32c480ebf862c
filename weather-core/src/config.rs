use crate::error::ServiceError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVICE_URL: &str = "http://localhost";

/// Connection settings for the upstream weather provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub host: String,
    pub app_id: String,
}

// Keep the credential out of logs and panic messages.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("app_id", &"<redacted>")
            .finish()
    }
}

/// Unvalidated settings, as collected from flags or the environment.
#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub port: Option<u16>,
    pub env: Option<String>,
    pub weather_id: Option<String>,
    pub weather_host: Option<String>,
    pub service_url: Option<String>,
}

/// Process-wide configuration, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Free-form deployment tag, e.g. "production" or "testing".
    pub env: Option<String>,
    pub provider: ProviderConfig,
    /// Public base URL the service is reachable at.
    pub service_url: String,
}

impl TryFrom<RawConfig> for Config {
    type Error = ServiceError;

    /// Apply defaults and require the provider credential and host.
    ///
    /// Blank values are treated the same as absent ones.
    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let app_id =
            present(raw.weather_id).ok_or_else(|| ServiceError::missing_config("Weather App ID"))?;
        let host =
            present(raw.weather_host).ok_or_else(|| ServiceError::missing_config("Weather Host"))?;

        Ok(Self {
            port: raw.port.unwrap_or(DEFAULT_PORT),
            env: present(raw.env),
            provider: ProviderConfig { host, app_id },
            service_url: present(raw.service_url).unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
        })
    }
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.env
            .as_deref()
            .is_some_and(|env| env.eq_ignore_ascii_case("production") || env.eq_ignore_ascii_case("prod"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> RawConfig {
        RawConfig {
            weather_id: Some("APP".into()),
            weather_host: Some("https://api.example.test/weather".into()),
            ..Default::default()
        }
    }

    #[test]
    fn loads_required_values_and_defaults() {
        let cfg = Config::try_from(required()).expect("config should load");

        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.env, None);
        assert_eq!(cfg.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(cfg.provider.app_id, "APP");
        assert_eq!(cfg.provider.host, "https://api.example.test/weather");
        assert!(!cfg.is_production());
    }

    #[test]
    fn optional_values_override_defaults() {
        let cfg = Config::try_from(RawConfig {
            port: Some(8081),
            env: Some("production".into()),
            service_url: Some("https://weather.example.test".into()),
            ..required()
        })
        .expect("config should load");

        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.env.as_deref(), Some("production"));
        assert_eq!(cfg.service_url, "https://weather.example.test");
        assert!(cfg.is_production());
    }

    #[test]
    fn missing_app_id_names_the_field() {
        let err = Config::try_from(RawConfig { weather_id: None, ..required() }).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to start service: missing required config for `Weather App ID`"
        );
    }

    #[test]
    fn missing_host_names_the_field() {
        let err = Config::try_from(RawConfig { weather_host: None, ..required() }).unwrap_err();
        assert_eq!(err, ServiceError::missing_config("Weather Host"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = Config::try_from(RawConfig { weather_id: Some("  ".into()), ..required() }).unwrap_err();
        assert_eq!(err, ServiceError::missing_config("Weather App ID"));
    }

    #[test]
    fn blank_optional_values_fall_back() {
        let cfg = Config::try_from(RawConfig {
            env: Some(String::new()),
            service_url: Some(String::new()),
            ..required()
        })
        .expect("config should load");

        assert_eq!(cfg.env, None);
        assert_eq!(cfg.service_url, DEFAULT_SERVICE_URL);
    }

    #[test]
    fn debug_output_redacts_credential() {
        let provider = ProviderConfig { host: "http://h".into(), app_id: "SECRET".into() };
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("SECRET"));
        assert!(rendered.contains("http://h"));
    }
}
