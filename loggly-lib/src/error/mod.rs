//! Error types

mod api;

pub use api::*;

/// Errors returned by [`LogglyClient`](crate::LogglyClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request to the search API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Exhaustive paging stopped at the configured page cap with a cursor still pending.
    #[error("Page limit of {limit} reached with more events pending")]
    PageLimitExceeded {
        /// The configured maximum number of pages.
        limit: usize,
    },

    /// The operation was cancelled through its cancellation token.
    #[error("Search cancelled")]
    Cancelled,
}

impl Error {
    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::Network(err))
    }
}
