use crate::error::{Result, ScoreError};
use tracing_subscriber::EnvFilter;

// Logs go to stderr so stdout stays clean for piped reports. RUST_LOG wins
// over the CLI flags when set.
pub fn init(verbose: u8, quiet: bool) -> Result<()> {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| ScoreError::Telemetry(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ScoreError::Telemetry(e.to_string()))
}
