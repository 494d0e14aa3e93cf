use anyhow::{anyhow, Result};

use crate::config::LogFormat;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "TRADEFILL_LOG";

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for fill output.
pub fn init_tracing(log_level: &str, log_format: LogFormat) -> Result<()> {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| log_level.to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|err| anyhow!("invalid log filter: {err}"))?;

    match log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init(),
    }
    Ok(())
}
