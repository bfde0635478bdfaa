use std::fmt;

/// Result type for sitepulse-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the platform layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Stored state could not be read or written
    Storage(String),

    /// No usable data directory could be determined
    DataDir(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::DataDir(msg) => write!(f, "Data directory error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Storage(_) | Error::DataDir(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
