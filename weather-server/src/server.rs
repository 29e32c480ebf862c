use std::{sync::Arc, time::Duration};

use actix_web::{App, HttpServer, web};
use tracing::info;
use weather_core::{Config, WeatherService};

use crate::handler;

/// Time a client gets to deliver request headers.
pub const CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Drain window for in-flight requests after SIGINT/SIGTERM, in seconds.
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Bind on all interfaces and serve until a shutdown signal arrives.
///
/// actix installs the SIGINT/SIGTERM handlers and performs the graceful drain.
pub async fn serve(config: &Config, service: Arc<dyn WeatherService>) -> std::io::Result<()> {
    let data: web::Data<dyn WeatherService> = web::Data::from(service);

    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(handler::routes))
        .client_request_timeout(CLIENT_REQUEST_TIMEOUT)
        .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
        .bind(("0.0.0.0", config.port))?;

    for addr in server.addrs() {
        info!(%addr, service_url = %config.service_url, "listening for connections");
    }

    server.run().await
}
