use std::fmt;

/// Result type for altview-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Feed document could not be read into the schema
    Feed(altview_types::Error),

    /// Requested listing is not in the feed
    ListingUnavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Feed(err) => write!(f, "Feed error: {}", err),
            Error::ListingUnavailable(id) => write!(f, "Listing unavailable: {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Feed(err) => Some(err),
            Error::ListingUnavailable(_) => None,
        }
    }
}

impl From<altview_types::Error> for Error {
    fn from(err: altview_types::Error) -> Self {
        Error::Feed(err)
    }
}
