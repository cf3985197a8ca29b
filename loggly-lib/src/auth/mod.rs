//! Authentication
//!
//! The search API has no token support; every request carries the account
//! user's name and password as HTTP basic auth.

mod credentials;

pub use credentials::Credentials;
