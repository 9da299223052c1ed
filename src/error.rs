use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommitCounterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("GitHub API error {status} for URL: {url}")]
    ApiError { status: u16, url: String },

    #[error("Unexpected response format: {0}")]
    UnexpectedResponseFormat(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommitCounterError>;
