use std::fmt;

/// Result type for myblog-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the API client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, body read, decode)
    Http(reqwest::Error),

    /// The API answered with a non-success status
    Api { status: u16, message: String },
}

impl Error {
    /// True when the server rejected the request outright (4xx), as opposed
    /// to a transport problem or a server-side fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Api { status, .. } if (400..500).contains(status))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
