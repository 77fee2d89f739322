//! Flattening of upstream video records into table rows

use crate::api::{Count, RawItem, VideoListResponse};
use crate::error::{EtlError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// One `trending_videos` row. Field order is the staging column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub title: String,
    pub channel: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub publish_time: DateTime<Utc>,
    pub views: i64,
    pub likes: i64,
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Map every item of the response to a row, preserving order.
///
/// Fails on the first unusable item, in which case no rows are returned.
pub fn transform(response: &VideoListResponse) -> Result<Vec<Row>> {
    let items = response.items.as_ref().ok_or(EtlError::MissingItems)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| transform_item(index, item))
        .collect()
}

/// Map one item. `index` is its position in the response, used in errors.
pub fn transform_item(index: usize, item: &RawItem) -> Result<Row> {
    let missing = |field| EtlError::MissingField { index, field };

    let snippet = item.snippet.as_ref().ok_or_else(|| missing("snippet"))?;
    let title = snippet.title.clone().ok_or_else(|| missing("snippet.title"))?;
    let channel = snippet
        .channel_title
        .clone()
        .ok_or_else(|| missing("snippet.channelTitle"))?;
    let published_at = snippet
        .published_at
        .as_deref()
        .ok_or_else(|| missing("snippet.publishedAt"))?;

    let publish_time = DateTime::parse_from_rfc3339(published_at)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| EtlError::InvalidValue {
            index,
            field: "snippet.publishedAt",
            value: published_at.to_string(),
            reason: e.to_string(),
        })?;

    // Lenient: an item without a `statistics` object loads with zero counts
    // instead of failing the batch.
    let stats = item.statistics.as_ref();
    let views = count_or_zero(index, "statistics.viewCount", stats.and_then(|s| s.view_count.as_ref()))?;
    let likes = count_or_zero(index, "statistics.likeCount", stats.and_then(|s| s.like_count.as_ref()))?;

    Ok(Row {
        title,
        channel,
        publish_time,
        views,
        likes,
    })
}

fn count_or_zero(index: usize, field: &'static str, count: Option<&Count>) -> Result<i64> {
    let Some(count) = count else {
        return Ok(0);
    };

    count.parse().map_err(|e| EtlError::InvalidValue {
        index,
        field,
        value: match count {
            Count::Number(n) => n.to_string(),
            Count::Text(s) => s.clone(),
        },
        reason: e.to_string(),
    })
}
