//! Trending ETL Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the trending-videos ETL workspace.
//!
//! - **Logging**: `tracing` subscriber setup driven by environment variables
//! - **Environment**: typed lookups for configuration values
//! - **Errors**: the error type those lookups return
//!
//! # Example
//!
//! ```no_run
//! use trending_common::env::env_parse_or;
//! use trending_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     let interval: u64 = env_parse_or("PROBE_POKE_INTERVAL_SECS", 5)?;
//!     tracing::info!(interval, "configured");
//!     Ok(())
//! }
//! ```

pub mod env;
pub mod error;
pub mod logging;

pub use error::{CommonError, Result};
