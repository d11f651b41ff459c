use thiserror::Error;

/// cupfinals error types
#[derive(Error, Debug)]
pub enum CupError {
    /// Static dataset is malformed (duplicate year, missing field)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No edition was played in the requested year
    #[error("not found: no World Cup final in {0}")]
    NotFound(u16),

    /// Caller passed a value outside a closed set (e.g. unknown metric key)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Settings file could not be read or parsed
    #[error("settings error: {0}")]
    Settings(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cupfinals
pub type Result<T> = std::result::Result<T, CupError>;
