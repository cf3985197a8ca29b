//! Search response type

use crate::model::Event;

/// The result of a search.
///
/// Which facts are populated depends on the protocol that produced it:
///
/// - [`SearchMode::Legacy`](crate::api::search::SearchMode::Legacy) fills in
///   [`total`](Self::total) and [`page`](Self::page) and never carries a next URL.
/// - The paginating modes fill in [`next_url`](Self::next_url) while more
///   events are available and leave `total` and `page` at zero.
///
/// # Example
///
/// ```ignore
/// let mut response = client.query("error").fetch().await?;
///
/// while let Some(cursor) = response.cursor() {
///     println!("{} events so far", response.len());
///     response = client.next_search(cursor).await?;
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    total: u64,
    page: u64,
    events: Vec<Event>,
    next_url: Option<String>,
}

impl SearchResponse {
    /// Creates a response from the legacy events endpoint.
    pub(crate) fn legacy(total: u64, page: u64, events: Vec<Event>) -> Self {
        Self {
            total,
            page,
            events,
            next_url: None,
        }
    }

    /// Creates a response from the iterate endpoint.
    ///
    /// An empty `next` means there are no further pages.
    pub(crate) fn paginated(events: Vec<Event>, next: Option<String>) -> Self {
        Self {
            total: 0,
            page: 0,
            events,
            next_url: next.filter(|next| !next.is_empty()),
        }
    }

    /// Appends the events of a following page and takes over its next URL.
    pub(crate) fn append(&mut self, next: SearchResponse) {
        self.events.extend(next.events);
        self.next_url = next.next_url;
    }

    /// Returns the total number of matching events (legacy protocol only).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the page number (legacy protocol only).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Returns the events, in the order the server sent them.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the response and returns the events.
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Returns the server's `next` URL verbatim, if more events are available.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// Returns the continuation cursor, the part of the next URL after its
    /// final `=`.
    pub fn cursor(&self) -> Option<&str> {
        self.next_url.as_deref().map(cursor_from_next)
    }

    /// Returns `true` if the server reported more events.
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Returns `true` if this response has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of events in this response.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Extracts the cursor from a `next` URL. A value without `=` is taken as the
/// cursor itself.
pub(crate) fn cursor_from_next(next: &str) -> &str {
    match next.rsplit_once('=') {
        Some((_, cursor)) => cursor,
        None => next,
    }
}
