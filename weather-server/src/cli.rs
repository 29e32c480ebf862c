use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use weather_core::{
    Config, ConditionService, RawConfig, ServiceError, WeatherService, provider::client_from_config,
};

use crate::{server, telemetry};

/// Top-level CLI struct. Every flag falls back to its environment variable.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather condition HTTP service")]
pub struct Cli {
    /// Port to listen on [default: 8080].
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Deployment tag, e.g. "production".
    #[arg(long, env = "ENV")]
    pub env: Option<String>,

    /// Provider application ID.
    #[arg(long, env = "WEATHER_ID", hide_env_values = true)]
    pub weather_id: Option<String>,

    /// Provider endpoint URL.
    #[arg(long, env = "WEATHER_HOST")]
    pub weather_host: Option<String>,

    /// Public base URL of this service [default: http://localhost].
    #[arg(long, env = "SERVICE_URL")]
    pub service_url: Option<String>,
}

impl From<Cli> for RawConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            env: cli.env,
            weather_id: cli.weather_id,
            weather_host: cli.weather_host,
            service_url: cli.service_url,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Result<Config, ServiceError> {
        Config::try_from(RawConfig::from(self))
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.into_config();
        telemetry::init(config.as_ref().is_ok_and(Config::is_production));

        let config = config.inspect_err(|e| error!(error = %e, "invalid configuration"))?;
        info!(
            port = config.port,
            env = config.env.as_deref().unwrap_or("-"),
            provider_host = %config.provider.host,
            service_url = %config.service_url,
            "service starting"
        );

        let client = client_from_config(&config.provider)?;
        let service: Arc<dyn WeatherService> = Arc::new(ConditionService::new(client));

        // Fail fast on a bad credential or unreachable host, before binding.
        service
            .validate()
            .await
            .inspect_err(|e| error!(error = %e, "weather provider validation failed"))?;

        server::serve(&config, service).await.inspect_err(|e| {
            error!(error = %e, "server stopped with an error");
        })?;

        info!("service stopped");
        Ok(())
    }
}
