//! Tabular batch loading
//!
//! Turns an already-split table (header plus string rows — file parsing is
//! the collaborator's job) into a [`Batch`] of raw posts. The text column is
//! resolved against an explicit ordered alias list; a load without any
//! recognizable text column fails as a whole, while a bad timestamp only
//! degrades its own row to "no timestamp".

use chrono::{DateTime, NaiveDateTime};

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::models::{Batch, Post};

/// Timestamp shapes accepted for naive parsing, tried in order
const NAIVE_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Load raw posts from a header and rows
///
/// Header names are trimmed before alias matching. Rows shorter than the
/// header are padded with empty cells; a row with an empty text cell is kept
/// as an empty post rather than dropped, so row counts stay faithful to the
/// upload.
///
/// # Errors
///
/// Fails with [`LoadError::EmptyHeader`] or
/// [`LoadError::MissingTextColumn`]; nothing else aborts the load.
pub fn load_batch(
    header: &[String],
    rows: &[Vec<String>],
    config: &LoaderConfig,
) -> Result<Batch> {
    if header.is_empty() {
        return Err(LoadError::EmptyHeader.into());
    }

    let columns: Vec<&str> = header.iter().map(|h| h.trim()).collect();

    let text_idx = resolve_column(&columns, &config.text_columns).ok_or_else(|| {
        LoadError::MissingTextColumn {
            tried: config.text_columns.clone(),
        }
    })?;
    let timestamp_idx = resolve_column(&columns, &config.timestamp_columns);

    tracing::debug!(
        text_column = columns[text_idx],
        timestamp_column = timestamp_idx.map(|i| columns[i]),
        rows = rows.len(),
        "resolved batch columns"
    );

    let posts = rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            let raw_text = cell(row, text_idx);
            let timestamp = timestamp_idx.and_then(|idx| {
                let value = cell(row, idx).trim();
                if value.is_empty() {
                    return None;
                }
                match parse_timestamp(value)
                    .ok_or_else(|| LoadError::BadTimestamp(value.to_string()))
                {
                    Ok(ts) => Some(ts),
                    Err(e) => {
                        tracing::warn!(row = row_no, error = %e, "keeping row without timestamp");
                        None
                    }
                }
            });

            Post {
                raw_text: raw_text.to_string(),
                timestamp,
                ..Default::default()
            }
        })
        .collect();

    Ok(Batch::new(posts))
}

/// Find the first alias present in the header, in alias priority order
fn resolve_column(columns: &[&str], aliases: &[String]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| columns.iter().position(|c| *c == alias.as_str()))
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Parse a timestamp in one of the accepted shapes
///
/// Tries the local `YYYY/MM/DD HH:MM` shape first, then ISO-8601 variants.
/// An offset, when present, is dropped after parsing: bucketing is
/// calendar-based on wall-clock time. Anything unparseable yields `None`.
///
/// # Examples
///
/// ```
/// use sazanami::loader::parse_timestamp;
///
/// assert!(parse_timestamp("2025/08/09 21:27").is_some());
/// assert!(parse_timestamp("2025-08-09T21:27:00+09:00").is_some());
/// assert!(parse_timestamp("last tuesday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_with_japanese_columns() {
        let batch = load_batch(
            &header(&["投稿日時", "テキスト"]),
            &[row(&["2025/08/09 21:27", "first post #tag"])],
            &LoaderConfig::default(),
        )
        .unwrap();

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.posts[0].raw_text, "first post #tag");
        let ts = batch.posts[0].timestamp.unwrap();
        assert_eq!(ts.date().day(), 9);
        assert_eq!(ts.hour(), 21);
    }

    #[test]
    fn test_alias_priority_order() {
        // Both aliases present: the earlier alias wins even though the later
        // one appears first in the header
        let batch = load_batch(
            &header(&["content", "text"]),
            &[row(&["from content", "from text"])],
            &LoaderConfig::default(),
        )
        .unwrap();
        assert_eq!(batch.posts[0].raw_text, "from text");
    }

    #[test]
    fn test_header_names_are_trimmed() {
        let batch = load_batch(
            &header(&["  text  "]),
            &[row(&["hello"])],
            &LoaderConfig::default(),
        )
        .unwrap();
        assert_eq!(batch.posts[0].raw_text, "hello");
    }

    #[test]
    fn test_missing_text_column_fails_whole_load() {
        let result = load_batch(
            &header(&["date", "body"]),
            &[row(&["2025/08/09 21:27", "unreachable"])],
            &LoaderConfig::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_header_fails() {
        let result = load_batch(&[], &[], &LoaderConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_timestamp_keeps_row() {
        let batch = load_batch(
            &header(&["created_at", "text"]),
            &[
                row(&["not a date", "kept anyway"]),
                row(&["2025/08/09 10:00", "timed"]),
            ],
            &LoaderConfig::default(),
        )
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert!(batch.posts[0].timestamp.is_none());
        assert!(batch.posts[1].timestamp.is_some());
    }

    #[test]
    fn test_short_row_padded_with_empty_cells() {
        let batch = load_batch(
            &header(&["text", "created_at"]),
            &[row(&["only text"])],
            &LoaderConfig::default(),
        )
        .unwrap();
        assert_eq!(batch.posts[0].raw_text, "only text");
        assert!(batch.posts[0].timestamp.is_none());
    }

    #[test]
    fn test_no_timestamp_column_at_all() {
        let batch = load_batch(
            &header(&["text"]),
            &[row(&["hello"])],
            &LoaderConfig::default(),
        )
        .unwrap();
        assert!(batch.posts[0].timestamp.is_none());
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        assert!(parse_timestamp("2025/08/09 21:27").is_some());
        assert!(parse_timestamp("2025-08-09T21:27:00").is_some());
        assert!(parse_timestamp("2025-08-09 21:27:00").is_some());
        assert!(parse_timestamp("2025-08-09T21:27:00+09:00").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2025/13/45 99:99").is_none());
    }

    #[test]
    fn test_offset_is_dropped_not_converted() {
        let ts = parse_timestamp("2025-08-09T21:27:00+09:00").unwrap();
        assert_eq!(ts.hour(), 21);
    }
}
