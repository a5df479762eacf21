pub mod errors;
pub mod logging;
pub mod lookup;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
