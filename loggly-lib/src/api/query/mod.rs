//! Search query builder.
//!
//! - [`SearchQuery`] - accumulates the search expression, time range, order and page size
//! - [`Direction`] - sort order of returned events

mod builder;
mod order;

pub use builder::SearchQuery;
pub use builder::DEFAULT_FROM;
pub use builder::DEFAULT_SIZE;
pub use builder::DEFAULT_UNTIL;
pub use order::Direction;
