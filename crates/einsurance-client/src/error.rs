use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Processor(String),

    #[error("Auth token missing: {0}")]
    TokenMissing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
