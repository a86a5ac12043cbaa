use thiserror::Error;

/// revtrack error types
#[derive(Error, Debug)]
pub enum RevtrackError {
    /// Network failure or non-JSON response from a branch endpoint
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Terminal / file I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for revtrack
pub type Result<T> = std::result::Result<T, RevtrackError>;
