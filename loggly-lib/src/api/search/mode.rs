//! Search protocol selection.

use std::num::NonZeroUsize;

/// The protocol a [`LogglyClient`](crate::LogglyClient) uses to run a search.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use loggly_lib::api::search::SearchMode;
///
/// let capped = SearchMode::exhaustive_capped(NonZeroUsize::new(20).unwrap());
/// assert!(capped.is_paginating());
/// assert!(!SearchMode::Legacy.is_paginating());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Create a search session, then fetch its first page of events.
    ///
    /// Responses carry the total event count and page number.
    Legacy,
    /// Fetch the first batch from the iterate endpoint and hand the cursor
    /// back to the caller.
    #[default]
    Paginating,
    /// Follow iterate cursors until the server returns an empty one,
    /// concatenating every batch.
    ///
    /// Without `max_pages` the loop has no bound: a server that keeps
    /// returning cursors keeps the call running.
    Exhaustive {
        /// Maximum number of pages to fetch before failing.
        max_pages: Option<NonZeroUsize>,
    },
}

impl SearchMode {
    /// Exhaustive paging with no page cap.
    pub fn exhaustive() -> Self {
        Self::Exhaustive { max_pages: None }
    }

    /// Exhaustive paging that fails once `max_pages` pages have been fetched
    /// and the server still reports more.
    pub fn exhaustive_capped(max_pages: NonZeroUsize) -> Self {
        Self::Exhaustive {
            max_pages: Some(max_pages),
        }
    }

    /// Returns `true` for the cursor-based protocols.
    pub fn is_paginating(&self) -> bool {
        !matches!(self, Self::Legacy)
    }
}
