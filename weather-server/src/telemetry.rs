use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins; otherwise `info`.
///
/// Production deployments get JSON lines, everything else the compact text format.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);

    let result = if json { builder.json().try_init() } else { builder.try_init() };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
