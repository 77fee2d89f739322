//! Trending-videos pipeline
//!
//! `Pipeline::trending_videos` builds the five-step chain:
//! 1. `create_table`: ensure the destination table exists
//! 2. `check_youtube_api`: wait for the upstream API to return data
//! 3. `extract_trending_videos`: fetch the trending list
//! 4. `process_video_data`: flatten into rows and write the staging file
//! 5. `store_video_data`: bulk-copy the staging file into the table
//!
//! Steps run strictly in order. The first failure stops the run.

use crate::api::{VideoApiClient, VideoListResponse};
use crate::config::EtlConfig;
use crate::error::{ErrorKind, EtlError, Result};
use crate::{extract, load, probe, schema, staging, transform};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// A named, independently invocable pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateTable,
    CheckApi,
    Extract,
    Transform,
    Load,
}

impl Step {
    /// Every step, in execution order
    pub const ALL: [Step; 5] = [
        Step::CreateTable,
        Step::CheckApi,
        Step::Extract,
        Step::Transform,
        Step::Load,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Step::CreateTable => "create_table",
            Step::CheckApi => "check_youtube_api",
            Step::Extract => "extract_trending_videos",
            Step::Transform => "process_video_data",
            Step::Load => "store_video_data",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = EtlError;

    fn from_str(s: &str) -> Result<Self> {
        Step::ALL
            .into_iter()
            .find(|step| step.name() == s)
            .ok_or_else(|| EtlError::config(format!("Unknown step: {}", s)))
    }
}

/// A failed run: the step that failed and why
#[derive(Debug, thiserror::Error)]
#[error("Step '{step}' failed: {source}")]
pub struct PipelineError {
    pub step: Step,
    #[source]
    pub source: EtlError,
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// State handed from one step to the next within a run
#[derive(Debug)]
pub struct RunContext {
    pub run_id: Uuid,
    pub extracted: Option<VideoListResponse>,
    pub rows_staged: Option<usize>,
    pub rows_loaded: Option<u64>,
}

impl RunContext {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            extracted: None,
            rows_staged: None,
            rows_loaded: None,
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub steps_run: Vec<Step>,
    pub rows_staged: Option<usize>,
    pub rows_loaded: Option<u64>,
    pub duration: Duration,
}

/// Ordered chain of steps bound to one configuration
pub struct Pipeline {
    config: EtlConfig,
    client: VideoApiClient,
    pool: PgPool,
    steps: Vec<Step>,
}

impl Pipeline {
    /// The full five-step trending-videos pipeline
    pub fn trending_videos(config: EtlConfig, pool: PgPool) -> Result<Self> {
        Self::with_steps(config, pool, Step::ALL.to_vec())
    }

    /// A pipeline running only `steps`, in the given order
    pub fn with_steps(config: EtlConfig, pool: PgPool, steps: Vec<Step>) -> Result<Self> {
        let client = VideoApiClient::new(&config.api)?;

        Ok(Self {
            config,
            client,
            pool,
            steps,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn config(&self) -> &EtlConfig {
        &self.config
    }

    /// Run every step in order, stopping at the first failure
    pub async fn run(&self) -> std::result::Result<RunReport, PipelineError> {
        let mut ctx = RunContext::new();
        let span = info_span!("pipeline_run", run_id = %ctx.run_id);

        async {
            let started = Instant::now();
            info!(steps = self.steps.len(), "Pipeline run started");

            for &step in &self.steps {
                if let Err(source) = self.run_step(step, &mut ctx).await {
                    error!(step = %step, kind = %source.kind(), error = %source, "Pipeline run failed");
                    return Err(PipelineError { step, source });
                }
            }

            let report = RunReport {
                run_id: ctx.run_id,
                steps_run: self.steps.clone(),
                rows_staged: ctx.rows_staged,
                rows_loaded: ctx.rows_loaded,
                duration: started.elapsed(),
            };

            info!(
                rows_staged = ?report.rows_staged,
                rows_loaded = ?report.rows_loaded,
                duration_ms = report.duration.as_millis() as u64,
                "Pipeline run completed"
            );

            Ok(report)
        }
        .instrument(span)
        .await
    }

    /// Run a single step against `ctx`
    pub async fn run_step(&self, step: Step, ctx: &mut RunContext) -> Result<()> {
        let started = Instant::now();
        info!(step = %step, "Step started");

        match step {
            Step::CreateTable => {
                schema::create_table(&self.pool).await?;
            },
            Step::CheckApi => {
                probe::wait_until_ready(&self.client, &self.config.probe).await?;
            },
            Step::Extract => {
                let response =
                    extract::fetch_trending_videos(&self.client, self.config.api.max_results)
                        .await?;
                ctx.extracted = Some(response);
            },
            Step::Transform => {
                let response = ctx
                    .extracted
                    .as_ref()
                    .ok_or(EtlError::MissingInput(Step::Transform.name()))?;
                let rows = transform::transform(response)?;
                let staged = staging::write_rows(&self.config.staging.path, &rows)?;
                ctx.rows_staged = Some(staged);
            },
            Step::Load => {
                let loaded = load::copy_staging_file(&self.pool, &self.config.staging.path).await?;
                ctx.rows_loaded = Some(loaded);
            },
        }

        info!(
            step = %step,
            duration_ms = started.elapsed().as_millis() as u64,
            "Step finished"
        );
        Ok(())
    }
}
