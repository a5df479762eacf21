use ferrous_lookup_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once the subscriber is installed.
pub fn log_config(config: &Config) {
    debug!(
        timeout_secs = config.lookup.timeout_secs,
        max_retries = config.lookup.max_retries,
        port = config.lookup.port,
        max_response_size = config.lookup.max_response_size,
        log_level = %config.logging.level,
        "Configuration loaded"
    );
}
