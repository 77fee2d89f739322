//! Trending Videos ETL
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Daily batch job that reads the YouTube most-popular chart and appends it
//! to a PostgreSQL table.
//!
//! # Example
//!
//! ```no_run
//! use trending_etl::{db, EtlConfig, Pipeline};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EtlConfig::load()?;
//!     let pool = db::create_pool(&config.database)?;
//!     let report = Pipeline::trending_videos(config, pool)?.run().await?;
//!     println!("loaded {:?} rows", report.rows_loaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod probe;
pub mod schema;
pub mod staging;
pub mod transform;

pub use config::EtlConfig;
pub use error::{ErrorKind, EtlError, Result};
pub use pipeline::{Pipeline, PipelineError, RunContext, RunReport, Step};
pub use transform::Row;
