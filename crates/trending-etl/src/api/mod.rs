//! YouTube Data API access
//!
//! HTTP client for the `videos` endpoint, the response types it returns and
//! the predicates the pipeline applies to raw responses.

pub mod client;
pub mod predicates;
pub mod types;

pub use client::VideoApiClient;
pub use types::*;
