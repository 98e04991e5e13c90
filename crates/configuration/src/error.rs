use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Covers both the TOML file and the `SALESRANK__*` environment layer.
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
