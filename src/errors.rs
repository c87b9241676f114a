use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed daily series (unsorted dates or duplicate days)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed planner arguments (e.g. odd number of custom range dates)
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Fetch succeeded structurally but carried no usable download total
    #[error("Missing data: {0}")]
    MissingData(String),

    /// Registry fetch operations
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Registry fetch error types
#[derive(Error, Debug)]
pub enum FetchError {
    /// Registry responded with a non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// Transport-level failure (DNS, connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed as the expected payload
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for registry fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

// Additional From implementations for common error types
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::MalformedPayload(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
