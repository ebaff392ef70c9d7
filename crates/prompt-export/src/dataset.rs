//! JSONL dataset loading.
//!
//! A dataset is a UTF-8 file with one JSON value per line. Blank lines
//! (after trimming) are skipped and do not count towards the dataset size.
//! No schema is enforced here; the builder decides which fields it needs.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ExportError, Result};

/// Read every non-blank line of `path` as a JSON value, in file order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Fails on the first line
/// that is not valid JSON, reporting its 1-based line number and content.
pub fn load(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;

    let mut records = Vec::new();
    for (idx, line) in split_lines(&content).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            debug!("Skipping blank line {} in {}", idx + 1, path.display());
            continue;
        }
        let record = serde_json::from_str(line).map_err(|source| ExportError::Parse {
            line: idx + 1,
            content: line.to_string(),
            source,
        })?;
        records.push(record);
    }

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Split on universal newlines. A trailing terminator does not start an
/// extra line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let (line, tail) = rest.split_at(pos);
                rest = tail
                    .strip_prefix("\r\n")
                    .unwrap_or_else(|| tail.split_at(1).1);
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_dataset(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.jsonl");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_preserves_file_order() {
        let (_dir, path) = write_dataset("{\"id\":1}\n{\"id\":2}\n{\"id\":3}\n");
        let records = load(&path).unwrap();
        assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
    }

    #[test]
    fn load_skips_blank_and_whitespace_lines() {
        let (_dir, path) = write_dataset("\n{\"id\":1}\n   \n\t\n{\"id\":2}\n\n");
        let records = load(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], 2);
    }

    #[test]
    fn load_handles_missing_trailing_newline_and_crlf() {
        let (_dir, path) = write_dataset("{\"id\":1}\r\n{\"id\":2}");
        let records = load(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_splits_on_lone_carriage_returns() {
        let (_dir, path) = write_dataset("{\"id\":1}\r{\"id\":2}\r");
        let records = load(&path).unwrap();
        assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn split_lines_counts_mixed_terminators() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\n\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "", "d"]);
        assert_eq!(split_lines("a\n").count(), 1);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn load_reports_line_number_after_carriage_return() {
        let (_dir, path) = write_dataset("{\"id\":1}\r\n\r{oops\r");
        match load(&path).unwrap_err() {
            ExportError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "{oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_empty_file() {
        let (_dir, path) = write_dataset("");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn load_keeps_duplicates() {
        let (_dir, path) = write_dataset("{\"a\":1}\n{\"a\":1}\n");
        assert_eq!(load(&path).unwrap().len(), 2);
    }

    #[test]
    fn load_reports_malformed_line() {
        let (_dir, path) = write_dataset("{\"id\":1}\n\n{not json}\n{\"id\":3}\n");
        let err = load(&path).unwrap_err();
        match err {
            ExportError::Parse { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "{not json}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/dataset.jsonl")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
