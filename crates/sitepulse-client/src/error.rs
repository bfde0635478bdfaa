use std::fmt;

/// Result type for sitepulse-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body decode)
    Http(reqwest::Error),

    /// Non-success response with the server's message when decodable
    Status { status: u16, message: String },

    /// Authentication failure. `redirect` is true when the unauthorized
    /// policy chose the public-surface behavior: stored credentials were
    /// cleared and the caller should send the user to the login route.
    AuthRequired { redirect: bool },

    /// Detail lookup returned no data
    NotFound(String),

    /// Configuration error
    Config(String),

    /// Input rejected before any request was made
    InvalidInput(String),

    /// Platform layer error
    Core(sitepulse_core::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { status, message } => {
                write!(f, "Request failed with status {}: {}", status, message)
            }
            Error::AuthRequired { redirect: true } => {
                write!(f, "Authentication required: credentials cleared, sign in again")
            }
            Error::AuthRequired { redirect: false } => {
                write!(f, "Authentication required")
            }
            Error::NotFound(what) => write!(f, "Not found: {}", what),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Core(err) => write!(f, "Platform error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<sitepulse_core::Error> for Error {
    fn from(err: sitepulse_core::Error) -> Self {
        Error::Core(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
