//! Error types for the export pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Everything that can abort an export run.
///
/// None of these are recoverable: the pipeline stops at the first error and
/// the binary exits non-zero.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Reading the dataset, creating the output directory, or writing the
    /// artifact failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank dataset line is not valid JSON.
    #[error("invalid JSON on line {line}: {source}\n  line content: {content}")]
    Parse {
        /// 1-based physical line number in the dataset file.
        line: usize,
        /// The trimmed line that failed to parse.
        content: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record selected as a few-shot has no string at the expected path.
    #[error("record {index} has no string field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// The artifact could not be serialized.
    #[error("failed to serialize artifact: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
