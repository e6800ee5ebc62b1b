use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid generation parameters: {0}")]
    InvalidParams(#[from] configuration::ConfigError),
}
