//! Staging artifact shared by the transform and load steps
//!
//! CSV, no header, columns in `schema::COLUMNS` order. Strings are always
//! quoted so that an empty title loads as an empty string rather than NULL.

use crate::error::Result;
use crate::transform::Row;
use csv::{QuoteStyle, WriterBuilder};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Replace the staging file at `path` with `rows`.
///
/// Rows are written to a temporary file in the same directory and renamed
/// into place, so a failed write leaves any previous artifact untouched and
/// no partial file behind.
pub fn write_rows(path: &Path, rows: &[Row]) -> Result<usize> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Dropped (and deleted) on any early return.
    let mut tmp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::NonNumeric)
            .from_writer(tmp.as_file_mut());

        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), rows = rows.len(), "Staging file written");
    Ok(rows.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn row(title: &str, views: i64) -> Row {
        Row {
            title: title.to_string(),
            channel: "Channel, Inc.".to_string(),
            publish_time: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            views,
            likes: 0,
        }
    }

    fn read_records(path: &Path) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap()
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_write_rows_without_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trending_videos.csv");

        let written = write_rows(&path, &[row("A", 100), row("say \"hi\"", 7)]).unwrap();
        assert_eq!(written, 2);

        let records = read_records(&path);
        assert_eq!(
            records,
            vec![
                vec!["A", "Channel, Inc.", "2023-01-01T00:00:00Z", "100", "0"],
                vec!["say \"hi\"", "Channel, Inc.", "2023-01-01T00:00:00Z", "7", "0"],
            ]
        );

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("\"A\","));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_overwrites_previous_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("trending_videos.csv");

        write_rows(&path, &[row("old", 1), row("older", 2)]).unwrap();
        write_rows(&path, &[row("new", 3)]).unwrap();

        let records = read_records(&path);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "new");
    }

    #[test]
    fn test_empty_rows_produce_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");

        assert_eq!(write_rows(&path, &[]).unwrap(), 0);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A directory in the way makes the final rename fail.
        let path = dir.path().join("trending_videos.csv");
        std::fs::create_dir(&path).unwrap();

        let err = write_rows(&path, &[row("A", 1)]).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Persistence);

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("trending_videos.csv")]);
    }
}
