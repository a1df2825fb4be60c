use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from CSV parsing or serialization
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A change or confidence value that does not parse as a signed number
    #[error("Malformed percent value: {0:?}")]
    MalformedPercent(String),

    /// Error converting serialized table bytes back into text
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
