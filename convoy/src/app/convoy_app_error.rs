#[derive(thiserror::Error, Debug)]
pub enum ConvoyAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("failure creating async rust tokio runtime: {0}")]
    RuntimeError(String),
}
