//! Loggly search client library
//!
//! A Rust async client for the Loggly log search API (v2). Builds search
//! queries, drives the server-side search session across one or more HTTP
//! round-trips, and collects the returned events.

pub mod api;
pub mod auth;
pub mod error;
pub mod model;
pub mod response;

mod client;

pub use client::*;
pub use response::SearchResponse;
