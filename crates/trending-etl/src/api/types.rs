//! Response types for the `videos` endpoint
//!
//! Every field the transformer depends on is optional here, so a missing key
//! surfaces as a named data error in the transform step instead of a generic
//! decode failure during extraction.

use serde::{Deserialize, Serialize};

/// Body of a `videos.list` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawItem>>,
}

impl VideoListResponse {
    /// Number of items, zero when the collection is absent
    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }
}

/// One upstream video record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<Snippet>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,

    /// RFC 3339 timestamp, e.g. "2023-01-01T00:00:00Z"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_count: Option<Count>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub like_count: Option<Count>,
}

/// Counter value. The API encodes 64-bit counters as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Number(i64),
    Text(String),
}

impl Count {
    pub fn parse(&self) -> Result<i64, std::num::ParseIntError> {
        match self {
            Count::Number(n) => Ok(*n),
            Count::Text(s) => s.trim().parse(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_shape() {
        let body = r#"{
            "kind": "youtube#videoListResponse",
            "items": [{
                "id": "abc",
                "snippet": {
                    "title": "A",
                    "channelTitle": "C1",
                    "publishedAt": "2023-01-01T00:00:00Z",
                    "description": "ignored"
                },
                "statistics": { "viewCount": "100", "commentCount": "3" }
            }]
        }"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.item_count(), 1);

        let item = &response.items.as_ref().unwrap()[0];
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.channel_title.as_deref(), Some("C1"));

        let stats = item.statistics.as_ref().unwrap();
        assert_eq!(stats.view_count, Some(Count::Text("100".to_string())));
        assert_eq!(stats.like_count, None);
    }

    #[test]
    fn test_missing_items_is_none() {
        let response: VideoListResponse =
            serde_json::from_str(r#"{"kind": "youtube#videoListResponse"}"#).unwrap();
        assert!(response.items.is_none());
        assert_eq!(response.item_count(), 0);
    }

    #[test]
    fn test_count_parse() {
        assert_eq!(Count::Text(" 42 ".to_string()).parse().unwrap(), 42);
        assert_eq!(Count::Number(7).parse().unwrap(), 7);
        assert!(Count::Text("many".to_string()).parse().is_err());
    }
}
