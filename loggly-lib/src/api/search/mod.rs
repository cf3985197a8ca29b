//! Search session protocols.
//!
//! The search API offers two ways to retrieve events:
//!
//! - the legacy protocol, which creates a server-side search (`/search`) and
//!   then fetches its events by search id (`/events`)
//! - the iterate protocol (`/events/iterate`), which returns a batch of events
//!   together with a `next` URL whose cursor retrieves the following batch
//!
//! [`LogglyClient::execute`] picks one according to the client's
//! [`SearchMode`]. Every step issues exactly one request and any failure ends
//! the whole operation; events collected before the failure are dropped.

mod mode;
mod pages;
mod wire;

use std::num::NonZeroUsize;

use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing::trace;

use crate::error::Error;
use crate::LogglyClient;
use crate::SearchResponse;

pub use mode::SearchMode;
pub use pages::EventPages;

use wire::CreateSearchBody;
use wire::EventsBody;
use wire::IterateBody;

impl LogglyClient {
    /// Runs a search for a rendered parameter string using the client's mode.
    pub async fn execute(&self, params: &str) -> Result<SearchResponse, Error> {
        debug!(mode = ?self.inner.mode, "running search");
        match self.inner.mode {
            SearchMode::Legacy => self.search(params).await,
            SearchMode::Paginating => self.iterate(params).await,
            SearchMode::Exhaustive { max_pages } => self.iterate_all(params, max_pages).await,
        }
    }

    /// Like [`execute`](Self::execute), but returns [`Error::Cancelled`] as
    /// soon as `cancel` fires.
    pub async fn execute_with_cancel(
        &self,
        params: &str,
        cancel: CancellationToken,
    ) -> Result<SearchResponse, Error> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            result = self.execute(params) => result,
        }
    }

    /// Creates a server-side search and returns its search id (`rsid`).
    pub async fn create_search(&self, params: &str) -> Result<String, Error> {
        let body: CreateSearchBody = self.get_json(&format!("/search?{}", params)).await?;
        Ok(body.rsid.id)
    }

    /// Fetches the events of a search created with [`create_search`](Self::create_search).
    pub async fn get_events(&self, rsid: &str) -> Result<SearchResponse, Error> {
        let body: EventsBody = self.get_json(&format!("/events?rsid={}", rsid)).await?;
        Ok(SearchResponse::legacy(body.total_events, body.page, body.events))
    }

    /// Runs the legacy two-step protocol: create a search, then fetch its events.
    pub async fn search(&self, params: &str) -> Result<SearchResponse, Error> {
        let rsid = self.create_search(params).await?;
        trace!(rsid = %rsid, "search created");
        self.get_events(&rsid).await
    }

    /// Fetches the first batch of events from the iterate endpoint.
    pub async fn iterate(&self, params: &str) -> Result<SearchResponse, Error> {
        let body: IterateBody = self.get_json(&format!("/events/iterate?{}", params)).await?;
        Ok(SearchResponse::paginated(body.events, body.next))
    }

    /// Fetches the batch following `cursor`.
    ///
    /// The cursor is sent as given; use [`SearchResponse::cursor`] to obtain
    /// it from a previous response.
    pub async fn next_search(&self, cursor: &str) -> Result<SearchResponse, Error> {
        let body: IterateBody = self
            .get_json(&format!("/events/iterate?next={}", cursor))
            .await?;
        Ok(SearchResponse::paginated(body.events, body.next))
    }

    /// Follows iterate cursors until the server returns an empty one.
    ///
    /// With `max_pages` set, fails with [`Error::PageLimitExceeded`] once that
    /// many pages have been fetched and the server still reports more.
    pub async fn iterate_all(
        &self,
        params: &str,
        max_pages: Option<NonZeroUsize>,
    ) -> Result<SearchResponse, Error> {
        let mut response = self.iterate(params).await?;
        let mut pages = 1;

        while let Some(cursor) = response.cursor().map(str::to_owned) {
            if let Some(limit) = max_pages {
                if pages >= limit.get() {
                    return Err(Error::PageLimitExceeded { limit: limit.get() });
                }
            }

            let next = self.next_search(&cursor).await?;
            pages += 1;
            trace!(pages, events = next.len(), "fetched page");
            response.append(next);
        }

        debug!(pages, events = response.len(), "search exhausted");
        Ok(response)
    }
}
