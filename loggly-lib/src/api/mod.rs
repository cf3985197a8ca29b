//! Search API operations

pub mod query;
pub mod search;
mod transport;
