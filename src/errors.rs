use thiserror::Error;

/// Errors raised by the listings library
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Unknown property kind: {0}")]
    UnknownPropertyKind(String),

    #[error("Failed to read scenario file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse scenario file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Booking refers to unknown user: {0}")]
    UnknownUser(String),
}

/// Result type specific to listings operations
pub type ListingResult<T> = Result<T, ListingError>;
