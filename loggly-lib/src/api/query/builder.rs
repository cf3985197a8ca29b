//! Search query builder.

use std::fmt;

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use url::form_urlencoded;

use crate::api::search::EventPages;
use crate::error::Error;
use crate::LogglyClient;
use crate::SearchResponse;

use super::order::Direction;

/// Default number of events per page.
pub const DEFAULT_SIZE: usize = 100;

/// Default start of the searched time range.
pub const DEFAULT_FROM: &str = "-24h";

/// Default end of the searched time range.
pub const DEFAULT_UNTIL: &str = "now";

/// Builder for a search against the events API.
///
/// Use [`LogglyClient::query`] to create one. Every setter consumes the query
/// and returns the updated value, so a partially built query can be cloned
/// and specialised without the copies affecting each other.
///
/// Time bounds accept anything the search API understands, either relative
/// (`"-5h"`, `"now"`) or absolute timestamps. They are sent verbatim.
///
/// # Example
///
/// ```ignore
/// let response = client.query("(login OR logout) AND tobi")
///     .size(50)
///     .from("-5h")
///     .ascending()
///     .fetch()
///     .await?;
///
/// for event in response.events() {
///     println!("{:?}", event.logmsg());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchQuery<'a> {
    client: &'a LogglyClient,
    query: String,
    from: String,
    until: String,
    order: Direction,
    size: usize,
}

impl<'a> SearchQuery<'a> {
    /// Creates a new query with default time range, order and size.
    pub(crate) fn new(client: &'a LogglyClient, query: impl Into<String>) -> Self {
        Self {
            client,
            query: query.into(),
            from: DEFAULT_FROM.to_string(),
            until: DEFAULT_UNTIL.to_string(),
            order: Direction::default(),
            size: DEFAULT_SIZE,
        }
    }

    /// Sets the number of events returned per page.
    pub fn size(mut self, n: usize) -> Self {
        self.size = n;
        self
    }

    /// Sets the start of the time range.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Sets the end of the time range.
    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = until.into();
        self
    }

    /// Alias for [`until`](Self::until).
    pub fn to(self, until: impl Into<String>) -> Self {
        self.until(until)
    }

    /// Sets the start of the time range to an absolute instant.
    pub fn from_time(self, from: DateTime<Utc>) -> Self {
        self.from(format_time(from))
    }

    /// Sets the end of the time range to an absolute instant.
    pub fn until_time(self, until: DateTime<Utc>) -> Self {
        self.until(format_time(until))
    }

    /// Sets the sort order.
    pub fn order(mut self, order: Direction) -> Self {
        self.order = order;
        self
    }

    /// Returns oldest events first.
    pub fn ascending(self) -> Self {
        self.order(Direction::Asc)
    }

    /// Returns newest events first.
    pub fn descending(self) -> Self {
        self.order(Direction::Desc)
    }

    /// Returns the search expression.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the start of the time range.
    pub fn from_value(&self) -> &str {
        &self.from
    }

    /// Returns the end of the time range.
    pub fn until_value(&self) -> &str {
        &self.until
    }

    /// Returns the sort order.
    pub fn order_value(&self) -> Direction {
        self.order
    }

    /// Returns the page size.
    pub fn size_value(&self) -> usize {
        self.size
    }

    /// Renders the query as a form-urlencoded parameter string.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("q", &self.query)
            .append_pair("size", &self.size.to_string())
            .append_pair("from", &self.from)
            .append_pair("until", &self.until)
            .append_pair("order", self.order.as_str())
            .finish()
    }

    /// Runs the search with the client's [`SearchMode`](crate::api::search::SearchMode).
    pub async fn fetch(self) -> Result<SearchResponse, Error> {
        self.client.execute(&self.to_query_string()).await
    }

    /// Runs the search, aborting with [`Error::Cancelled`] once `cancel` fires.
    pub async fn fetch_with_cancel(self, cancel: CancellationToken) -> Result<SearchResponse, Error> {
        self.client
            .execute_with_cancel(&self.to_query_string(), cancel)
            .await
    }

    /// Converts this query into an async iterator over iterate-endpoint pages.
    ///
    /// Pages are always fetched through the cursor protocol, whatever the
    /// client's mode.
    pub fn pages(self) -> EventPages<'a> {
        EventPages::new(self.client, self.to_query_string())
    }
}

impl fmt::Display for SearchQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl LogglyClient {
    /// Starts a new search query for the given expression.
    pub fn query(&self, query: impl Into<String>) -> SearchQuery<'_> {
        SearchQuery::new(self, query)
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
