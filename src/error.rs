//! Error types for contest-forge operations.
//!
//! Defines error types for the two fallible subsystems:
//! - Record source (shard IO and record decoding)
//! - Report export (workbook construction and file IO)

use thiserror::Error;

/// Errors that can occur while reading problem records from shards.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to open shard '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error while reading shard '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {path}:{line}: {source}")]
    Decode {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while writing the report workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
