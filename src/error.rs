//! Error types for the batch fetcher

use thiserror::Error;

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching screenshots
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to initialize the HTTP client
    #[error("Client initialization failed: {0}")]
    Init(String),

    /// A render request failed in transit or was refused by the service
    #[error("Render request failed: {0}")]
    Request(String),

    /// The service returned a body with zero bytes
    #[error("Empty file")]
    EmptyFile,

    /// The artifact store failed to read or write
    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_display() {
        // The failure report and manifest consumers match on this exact text
        assert_eq!(Error::EmptyFile.to_string(), "Empty file");
    }
}
