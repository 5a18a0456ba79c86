//! Logging setup
//!
//! `RUST_LOG` filters events (default `copr=warn`); `COPR_LOG_FORMAT=json`
//! switches to structured JSON lines. Everything goes to stderr so command
//! output on stdout stays clean.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "copr=warn,copr_core=warn,copr_infra_http=warn,copr_sdk=warn";
const VERBOSE_FILTER: &str = "copr=debug,copr_core=debug,copr_infra_http=debug,copr_sdk=debug";

pub fn init(verbose: bool) -> Result<()> {
    let log_format = std::env::var("COPR_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::try_new(VERBOSE_FILTER)?,
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER)?,
    };

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
