//! Extraction of the trending-videos document

use crate::api::{VideoApiClient, VideoListResponse};
use crate::error::Result;
use tracing::info;

/// Issue the single data-fetch request of a run. No retry.
pub async fn fetch_trending_videos(
    client: &VideoApiClient,
    max_results: u32,
) -> Result<VideoListResponse> {
    info!(url = %client.url(), max_results, "Fetching trending videos");

    let response = client.list_videos(max_results).await?;

    info!(items = response.item_count(), "Fetched trending videos");
    Ok(response)
}
