use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No {catalog} entry for '{name}'")]
    MissingReference { catalog: &'static str, name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
