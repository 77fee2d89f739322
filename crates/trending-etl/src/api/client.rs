//! HTTP client for the YouTube Data API `videos` endpoint

use crate::api::predicates::parse_video_list;
use crate::api::types::VideoListResponse;
use crate::config::ApiConfig;
use crate::error::{EtlError, Result};
use reqwest::Client;
use tracing::debug;

/// `part` requested by the readiness probe
pub const PROBE_PART: &str = "snippet";

/// `part` requested by the extractor
pub const EXTRACT_PART: &str = "snippet,statistics";

/// Longest slice of an error body kept in `EtlError::HttpStatus`
const ERROR_BODY_EXCERPT: usize = 512;

/// Client bound to one endpoint, region and chart
#[derive(Debug, Clone)]
pub struct VideoApiClient {
    client: Client,
    url: String,
    api_key: String,
    region_code: String,
    chart: String,
}

impl VideoApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("trending-etl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: config.endpoint_url(),
            api_key: config.api_key.clone(),
            region_code: config.region_code.clone(),
            chart: config.chart.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Cheap request used by the readiness probe
    pub async fn probe(&self) -> Result<VideoListResponse> {
        let body = self.get(PROBE_PART, None).await?;
        Ok(parse_video_list(&body)?)
    }

    /// Fetch up to `max_results` trending videos
    pub async fn list_videos(&self, max_results: u32) -> Result<VideoListResponse> {
        let body = self.get(EXTRACT_PART, Some(max_results)).await?;
        debug!(url = %self.url, body = %body, "videos.list response");
        Ok(parse_video_list(&body)?)
    }

    async fn get(&self, part: &str, max_results: Option<u32>) -> Result<String> {
        let mut params: Vec<(&str, String)> = vec![
            ("part", part.to_string()),
            ("chart", self.chart.clone()),
            ("regionCode", self.region_code.clone()),
        ];
        if let Some(max) = max_results {
            params.push(("maxResults", max.to_string()));
        }
        params.push(("key", self.api_key.clone()));

        // The request URL carries the API key, keep it out of error messages.
        let response = self
            .client
            .get(&self.url)
            .query(&params)
            .send()
            .await
            .map_err(|e| EtlError::Network(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| EtlError::Network(e.without_url()))?;

        if !status.is_success() {
            return Err(EtlError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
                body: excerpt(&body),
            });
        }

        Ok(body)
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_EXCERPT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::EtlConfig;

    #[test]
    fn test_client_uses_endpoint_url() {
        let config = EtlConfig::builder()
            .api_key("k")
            .database_url("postgresql://localhost/trending")
            .base_url("http://localhost:8080/youtube/v3")
            .build()
            .unwrap();
        let client = VideoApiClient::new(&config.api).unwrap();
        assert_eq!(client.url(), "http://localhost:8080/youtube/v3/videos");
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(ERROR_BODY_EXCERPT + 10);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), ERROR_BODY_EXCERPT + 3);

        assert_eq!(excerpt("short"), "short");
    }
}
