//! Binary crate for the `weather-server` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI flags and environment configuration
//! - Logging setup
//! - Serving `GET /weather/get` on top of `weather-core`

use clap::Parser;

mod cli;
mod handler;
mod server;
mod telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
