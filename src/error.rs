use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileManagerError {
    #[error("No auth token available")]
    AuthUnavailable,

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Server responded with status {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("No file selected")]
    EmptySelection,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid locale table: {0}")]
    Locale(#[from] serde_json::Error),

    #[error("Invalid curl command: {0}")]
    InvalidCurl(String),
}

impl From<reqwest::Error> for FileManagerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FileManagerError::Decode(err.to_string())
        } else {
            FileManagerError::Network(err.to_string())
        }
    }
}
