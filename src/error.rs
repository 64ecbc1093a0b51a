use thiserror::Error;

/// Outcome classification for backend calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (connect failure, timeout, broken body)
    #[error("network error: {0}")]
    Network(String),

    /// Transport status 401, the admin password was rejected
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success outcome, including 200 with a failure payload
    #[error("{message}")]
    Generic { status: Option<u16>, message: String },
}

/// Result type alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
