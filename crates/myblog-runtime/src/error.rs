use std::fmt;

/// Result type for myblog-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// API client error
    Api(myblog_api::Error),

    /// Session/storage layer error
    Session(myblog_session::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(err) => write!(f, "API error: {}", err),
            Error::Session(err) => write!(f, "Session error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(err) => Some(err),
            Error::Session(err) => Some(err),
        }
    }
}

impl From<myblog_api::Error> for Error {
    fn from(err: myblog_api::Error) -> Self {
        Error::Api(err)
    }
}

impl From<myblog_session::Error> for Error {
    fn from(err: myblog_session::Error) -> Self {
        Error::Session(err)
    }
}
