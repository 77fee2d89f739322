//! Trending ETL - daily YouTube trending-videos load

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use trending_common::logging::{init_logging, LogConfig, LogLevel};
use trending_etl::{db, EtlConfig, Pipeline, RunContext, Step};

#[derive(Parser, Debug)]
#[command(name = "trending-etl")]
#[command(author, version, about = "Load the YouTube trending chart into PostgreSQL")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline (default)
    Run,

    /// Ensure the destination table exists
    CreateTable,

    /// Wait until the upstream API returns data
    CheckApi,

    /// Load an existing staging file
    Load {
        /// Staging file, overrides STAGING_PATH
        #[arg(short, long)]
        staging: Option<PathBuf>,
    },

    /// List pipeline steps in execution order
    Steps,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&log_config(cli.verbose)?)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(execute(cli.command.unwrap_or(Command::Run)))
}

/// `LOG_*` variables over the defaults. `--verbose` wins over `LOG_LEVEL`.
fn log_config(verbose: bool) -> Result<LogConfig> {
    let config = LogConfig::default()
        .with_file_prefix("trending-etl")
        .merge_env()?;

    Ok(if verbose {
        config.with_level(LogLevel::Debug)
    } else {
        config
    })
}

async fn execute(command: Command) -> Result<()> {
    if let Command::Steps = command {
        for (i, step) in Step::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, step);
        }
        return Ok(());
    }

    let mut config = EtlConfig::load().context("Failed to load configuration")?;
    if let Command::Load {
        staging: Some(ref path),
    } = command
    {
        config.staging.path = path.clone();
    }

    let pool = db::create_pool(&config.database)?;

    match command {
        Command::Run => {
            let report = Pipeline::trending_videos(config, pool)?.run().await?;
            info!(run_id = %report.run_id, rows_loaded = ?report.rows_loaded, "Run complete");
        },
        Command::CreateTable => run_single(config, pool, Step::CreateTable).await?,
        Command::CheckApi => run_single(config, pool, Step::CheckApi).await?,
        Command::Load { .. } => run_single(config, pool, Step::Load).await?,
        Command::Steps => {},
    }

    Ok(())
}

async fn run_single(config: EtlConfig, pool: sqlx::PgPool, step: Step) -> Result<()> {
    let pipeline = Pipeline::with_steps(config, pool, vec![step])?;
    let mut ctx = RunContext::new();
    pipeline
        .run_step(step, &mut ctx)
        .await
        .with_context(|| format!("Step '{}' failed", step))?;
    Ok(())
}
