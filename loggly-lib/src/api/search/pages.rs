//! Async iterator over iterate-endpoint pages.

use futures::Stream;

use crate::error::Error;
use crate::LogglyClient;
use crate::SearchResponse;

/// Async iterator that yields one [`SearchResponse`] per iterate round-trip.
///
/// Follows the `next` cursor of each page. Iteration ends after a page with
/// no cursor, or after the first error.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.query("error").size(500).pages();
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for event in page.events() {
///         println!("{:?}", event);
///     }
/// }
/// ```
pub struct EventPages<'a> {
    client: &'a LogglyClient,
    /// Parameters for the first request, taken on the first call.
    initial_params: Option<String>,
    /// Cursor of the page to fetch next.
    next_cursor: Option<String>,
    done: bool,
}

impl<'a> EventPages<'a> {
    pub(crate) fn new(client: &'a LogglyClient, params: String) -> Self {
        Self {
            client,
            initial_params: Some(params),
            next_cursor: None,
            done: false,
        }
    }

    /// Resumes iteration from a cursor obtained from an earlier page.
    pub fn resume(client: &'a LogglyClient, cursor: impl Into<String>) -> Self {
        Self {
            client,
            initial_params: None,
            next_cursor: Some(cursor.into()),
            done: false,
        }
    }

    /// Fetches the next page of events.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<SearchResponse, Error>> {
        if self.done {
            return None;
        }

        let result = if let Some(params) = self.initial_params.take() {
            self.client.iterate(&params).await
        } else if let Some(cursor) = self.next_cursor.take() {
            self.client.next_search(&cursor).await
        } else {
            self.done = true;
            return None;
        };

        match result {
            Ok(page) => {
                match page.cursor() {
                    Some(cursor) => self.next_cursor = Some(cursor.to_string()),
                    None => self.done = true,
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    /// Converts the iterator into a [`Stream`] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<SearchResponse, Error>> + 'a {
        async_stream::stream! {
            let mut pages = self;
            while let Some(page) = pages.next().await {
                yield page;
            }
        }
    }
}

impl std::fmt::Debug for EventPages<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventPages")
            .field("next_cursor", &self.next_cursor)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
