#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid lookup settings: {0}")]
    Validation(String),
}
