use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisParams, Config, GenerationParams};

/// The file looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix of the environment variables that override file settings,
/// e.g. `STRATEGY_LAB__GENERATION__ROWS=20`.
pub const ENV_PREFIX: &str = "STRATEGY_LAB";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, then the TOML file
/// (`path` if given, which must exist; otherwise an optional `config.toml`), then
/// `STRATEGY_LAB__*` environment variables. The result is validated before it is
/// returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_env(path, environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
