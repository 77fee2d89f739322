//! Named checks applied to raw `videos` responses

use super::types::VideoListResponse;

/// Parse a response body into the typed document
pub fn parse_video_list(body: &str) -> Result<VideoListResponse, serde_json::Error> {
    serde_json::from_str(body)
}

/// Readiness condition: the response carries at least one item
pub fn has_items(response: &VideoListResponse) -> bool {
    response.item_count() > 0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_has_items() {
        let ready = parse_video_list(r#"{"items": [{"snippet": {"title": "A"}}]}"#).unwrap();
        assert!(has_items(&ready));

        let empty = parse_video_list(r#"{"items": []}"#).unwrap();
        assert!(!has_items(&empty));

        let absent = parse_video_list(r#"{"error": {"code": 403}}"#).unwrap();
        assert!(!has_items(&absent));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_video_list("<html>Service Unavailable</html>").is_err());
        assert!(parse_video_list(r#"{"items": "nope"}"#).is_err());
    }
}
