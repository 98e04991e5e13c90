use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, FlatRateParams, ProfitRankParams, Report, Strategies, MAX_TOP_PRODUCTS};

/// Prefix for environment variable overrides, e.g. `SALESRANK__STRATEGIES__BONUS=flat_rate`.
pub const ENV_PREFIX: &str = "SALESRANK";

/// Loads the application configuration.
///
/// Reads the TOML file at `path` when one is given, then layers `SALESRANK__*` environment
/// variables on top. Anything left unset keeps its default. The result is validated before
/// it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Loading configuration file.");
        builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
