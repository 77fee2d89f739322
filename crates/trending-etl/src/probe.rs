//! Upstream readiness probe
//!
//! Pokes the API at a fixed interval until a response carries at least one
//! item, or the window closes. The response body is discarded.

use crate::api::predicates::has_items;
use crate::api::VideoApiClient;
use crate::config::ProbeConfig;
use crate::error::{EtlError, Result};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of a successful probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub attempts: u32,
    pub waited: Duration,
}

/// Block until the upstream API returns data or `config.timeout` elapses
pub async fn wait_until_ready(client: &VideoApiClient, config: &ProbeConfig) -> Result<ProbeOutcome> {
    let started = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;

        // A single poke may not outlive the window.
        let remaining = config.timeout.saturating_sub(started.elapsed());
        let Ok(poke) = tokio::time::timeout(remaining, client.probe()).await else {
            warn!(attempt = attempts, "Probe request timed out");
            return Err(EtlError::ReadinessTimeout {
                waited: started.elapsed(),
                attempts,
            });
        };

        match poke {
            Ok(response) if has_items(&response) => {
                let outcome = ProbeOutcome {
                    attempts,
                    waited: started.elapsed(),
                };
                info!(attempts, waited_ms = outcome.waited.as_millis() as u64, "Upstream API ready");
                return Ok(outcome);
            },
            Ok(_) => debug!(attempt = attempts, "Probe returned no items"),
            Err(e) => warn!(attempt = attempts, error = %e, "Probe request failed"),
        }

        let elapsed = started.elapsed();
        if elapsed >= config.timeout {
            return Err(EtlError::ReadinessTimeout {
                waited: elapsed,
                attempts,
            });
        }

        tokio::time::sleep(config.poke_interval.min(config.timeout - elapsed)).await;
    }
}
