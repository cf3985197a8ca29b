//! Authenticated GET requests against the search API.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::error::Error;
use crate::LogglyClient;

impl LogglyClient {
    /// Issues an authenticated GET for `path`, relative to the base URL.
    ///
    /// The response is returned whatever its status; network failures are
    /// surfaced unchanged as [`ApiError::Network`].
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, Error> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(path, "GET");

        let mut request = self
            .inner
            .credentials
            .apply(self.inner.http_client.get(&url));

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        debug!(path, status = response.status().as_u16(), "response");
        Ok(response)
    }

    /// Issues a GET for `path` and parses the body as JSON.
    ///
    /// Fails with [`ApiError::Http`] carrying the status text when the status
    /// is 400 or above, and with [`ApiError::Parse`] when the body does not
    /// parse into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.get(path).await?;
        let status = response.status();

        if status.as_u16() >= 400 {
            return Err(ApiError::http(status.as_u16(), status_text(status)).into());
        }

        let body = response.bytes().await.map_err(ApiError::from)?;
        serde_json::from_slice(&body).map_err(|e| {
            Error::from(ApiError::parse_with_body(
                e.to_string(),
                String::from_utf8_lossy(&body),
            ))
        })
    }
}

/// Renders a status line the way servers send it, e.g. `404 Not Found`.
fn status_text(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
