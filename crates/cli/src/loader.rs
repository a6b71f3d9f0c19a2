//! Observation loading from CSV and JSON files.
//!
//! Rows whose value is missing or not a finite number are dropped.
//! Timestamps are Unix seconds, written either as integers or as dates
//! (RFC 3339, `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, read as UTC). When no row
//! carries a readable timestamp, rows are stamped with their index; otherwise
//! rows whose timestamp cannot be read are skipped.

use crate::CliResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use decomposition_facade::Observation;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::warn;

const VALUE_KEYS: [&str; 4] = ["value", "values", "close", "y"];
const TIMESTAMP_KEYS: [&str; 4] = ["timestamp", "time", "date", "t"];
const SERIES_KEYS: [&str; 4] = ["data", "values", "series", "observations"];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parse a timestamp as Unix seconds.
///
/// Accepts an integer, an RFC 3339 date-time, or a naive date or date-time
/// taken as UTC.
pub fn parse_timestamp(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(seconds) = text.parse::<i64>() {
        return Some(seconds);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// A row with a usable value whose timestamp may not have been readable.
struct PendingRow {
    row: usize,
    timestamp: Option<i64>,
    value: f64,
}

/// Stamp pending rows.
///
/// Without a single readable timestamp every row takes its index. Otherwise
/// rows lacking one are dropped.
fn stamp(rows: Vec<PendingRow>) -> Vec<Observation> {
    if rows.iter().all(|r| r.timestamp.is_none()) {
        return rows
            .into_iter()
            .map(|r| Observation::new(r.row as i64, r.value))
            .collect();
    }

    let total = rows.len();
    let observations: Vec<Observation> = rows
        .into_iter()
        .filter_map(|r| r.timestamp.map(|t| Observation::new(t, r.value)))
        .collect();
    let skipped = total - observations.len();
    if skipped > 0 {
        warn!("skipped {} rows with unreadable timestamps", skipped);
    }
    observations
}

/// Load observations from CSV.
///
/// The first column holds timestamps. The value column is chosen by name or
/// index through `column`, defaulting to the second column (or the only one).
pub fn load_csv<R: Read>(reader: R, column: Option<&str>) -> CliResult<Vec<Observation>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let value_idx = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => headers
                .iter()
                .position(|h| h.trim() == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None if headers.len() > 1 => 1,
        None => 0,
    };
    let has_timestamps = value_idx != 0;

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("Failed to read record: {}", e))?;
        let value = record
            .get(value_idx)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .and_then(finite);
        let Some(value) = value else { continue };

        let timestamp = if has_timestamps {
            record.get(0).and_then(parse_timestamp)
        } else {
            None
        };
        rows.push(PendingRow {
            row,
            timestamp,
            value,
        });
    }

    let observations = stamp(rows);

    if observations.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }
    Ok(observations)
}

fn json_timestamp(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

fn row_from_object(
    row: usize,
    obj: &serde_json::Map<String, serde_json::Value>,
    column: Option<&str>,
) -> Option<PendingRow> {
    let value = match column {
        Some(col) => obj.get(col).and_then(|v| v.as_f64()),
        None => VALUE_KEYS
            .iter()
            .find_map(|k| obj.get(*k).and_then(|v| v.as_f64())),
    }
    .and_then(finite)?;
    let timestamp = TIMESTAMP_KEYS
        .iter()
        .find_map(|k| obj.get(*k).and_then(json_timestamp));
    Some(PendingRow {
        row,
        timestamp,
        value,
    })
}

fn observations_from_json(
    json: &serde_json::Value,
    column: Option<&str>,
) -> CliResult<Vec<Observation>> {
    if let Some(arr) = json.as_array() {
        let rows: Vec<PendingRow> = arr
            .iter()
            .enumerate()
            .filter_map(|(row, item)| match item {
                serde_json::Value::Number(n) => n.as_f64().and_then(finite).map(|value| PendingRow {
                    row,
                    timestamp: None,
                    value,
                }),
                serde_json::Value::Object(obj) => row_from_object(row, obj, column),
                _ => None,
            })
            .collect();
        let observations = stamp(rows);
        if !observations.is_empty() {
            return Ok(observations);
        }
    }

    if let Some(obj) = json.as_object() {
        for key in SERIES_KEYS {
            if let Some(inner) = obj.get(key).filter(|v| v.is_array()) {
                return observations_from_json(inner, column);
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

/// Load observations from JSON.
///
/// Accepts an array of numbers, an array of `{timestamp, value}` objects, or
/// an object wrapping either under `data`, `values`, `series` or
/// `observations`.
pub fn load_json<R: Read>(reader: R, column: Option<&str>) -> CliResult<Vec<Observation>> {
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;
    observations_from_json(&json, column)
}

/// Load observations from a file, picking the format from its extension.
pub fn load_observations(path: &Path, column: Option<&str>) -> CliResult<Vec<Observation>> {
    let open = || {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| format!("Failed to open file: {}", e))
    };
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv(open()?, column),
        "json" => load_json(open()?, column),
        _ => load_csv(open()?, column).or_else(|_| load_json(open()?, column)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_with_timestamps() {
        let csv = "timestamp,value\n100,1.5\n200,2.5\n300,oops\n400,4.0\n";
        let obs = load_csv(csv.as_bytes(), None).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(100, 1.5),
                Observation::new(200, 2.5),
                Observation::new(400, 4.0),
            ]
        );
    }

    #[test]
    fn test_csv_named_column_and_dates() {
        let csv = "date,open,close\n2024-01-01,1,10\n2024-02-01,2,20\n";
        let obs = load_csv(csv.as_bytes(), Some("close")).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(1_704_067_200, 10.0),
                Observation::new(1_706_745_600, 20.0),
            ]
        );
    }

    #[test]
    fn test_csv_skips_unreadable_dates() {
        let csv = "date,value\n2024-01-01,1\nsometime,2\n2024-01-03,3\n";
        let obs = load_csv(csv.as_bytes(), None).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(1_704_067_200, 1.0),
                Observation::new(1_704_240_000, 3.0),
            ]
        );
    }

    #[test]
    fn test_csv_labels_fall_back_to_row_index() {
        let csv = "month,value\nJan,5\nFeb,6\nMar,7\n";
        let obs = load_csv(csv.as_bytes(), None).unwrap();
        let stamps: Vec<i64> = obs.iter().map(|o| o.timestamp).collect();
        assert_eq!(stamps, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("1700000000"), Some(1_700_000_000));
        assert_eq!(parse_timestamp(" 2024-01-01 "), Some(1_704_067_200));
        assert_eq!(parse_timestamp("2024-01-01 01:00:00"), Some(1_704_070_800));
        assert_eq!(parse_timestamp("2024-01-01T01:00:00"), Some(1_704_070_800));
        assert_eq!(parse_timestamp("2024-01-01T02:00:00+01:00"), Some(1_704_070_800));
        assert_eq!(parse_timestamp("2024-01-01T01:00:00Z"), Some(1_704_070_800));
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("Q1"), None);
    }

    #[test]
    fn test_csv_single_column() {
        let csv = "value\n3\n4\n";
        let obs = load_csv(csv.as_bytes(), None).unwrap();
        assert_eq!(obs, vec![Observation::new(0, 3.0), Observation::new(1, 4.0)]);
    }

    #[test]
    fn test_csv_missing_column() {
        let csv = "a,b\n1,2\n";
        assert!(load_csv(csv.as_bytes(), Some("c")).is_err());
    }

    #[test]
    fn test_json_number_array() {
        let obs = load_json("[1.0, 2, 3.5]".as_bytes(), None).unwrap();
        assert_eq!(obs.len(), 3);
        assert_eq!(obs[2], Observation::new(2, 3.5));
    }

    #[test]
    fn test_json_objects() {
        let json = r#"[{"timestamp": 10, "value": 1.0}, {"timestamp": 20, "value": null}, {"timestamp": 30, "value": 3.0}]"#;
        let obs = load_json(json.as_bytes(), None).unwrap();
        assert_eq!(obs, vec![Observation::new(10, 1.0), Observation::new(30, 3.0)]);
    }

    #[test]
    fn test_json_wrapped_series() {
        let json = r#"{"name": "sales", "data": [{"t": 1, "y": 5.0}, {"t": 2, "y": 6.0}]}"#;
        let obs = load_json(json.as_bytes(), None).unwrap();
        assert_eq!(obs, vec![Observation::new(1, 5.0), Observation::new(2, 6.0)]);
    }

    #[test]
    fn test_json_date_strings() {
        let json = r#"[{"date": "2024-01-01", "value": 1.0}, {"date": "2024-01-02T00:00:00Z", "value": 2.0}, {"date": "n/a", "value": 3.0}]"#;
        let obs = load_json(json.as_bytes(), None).unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(1_704_067_200, 1.0),
                Observation::new(1_704_153_600, 2.0),
            ]
        );
    }

    #[test]
    fn test_json_objects_without_timestamps() {
        let json = r#"[{"value": 1.0}, {"value": 2.0}]"#;
        let obs = load_json(json.as_bytes(), None).unwrap();
        assert_eq!(obs, vec![Observation::new(0, 1.0), Observation::new(1, 2.0)]);
    }

    #[test]
    fn test_json_without_numbers() {
        assert!(load_json(r#"{"foo": "bar"}"#.as_bytes(), None).is_err());
    }
}
