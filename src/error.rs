use photo_roll::{FeedError, MirrorError};
use std::fmt;

/// Central error types for the marsroll app
#[derive(Debug)]
pub enum AppError {
    /// Configuration error (unreadable or invalid TOML)
    Config(String),
    /// Database error (rusqlite)
    Database(rusqlite::Error),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// Photo API error
    Api(FeedError),
    /// Mirror store error
    Mirror(MirrorError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Api(e) => write!(f, "Photo API error: {}", e),
            AppError::Mirror(e) => write!(f, "Mirror store error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Conversions from other error types
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        AppError::Api(e)
    }
}

impl From<MirrorError> for AppError {
    fn from(e: MirrorError) -> Self {
        AppError::Mirror(e)
    }
}
