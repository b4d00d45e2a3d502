//! contest-forge: cross-language solution extraction from contest problem stores.
//!
//! This library reads competitive-programming problem records from sharded
//! JSONL stores, filters them by per-language solution availability, samples
//! a bounded set of solutions per language, and exports a flat XLSX report.

// Core modules
pub mod cli;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod record;
pub mod sanitize;
pub mod select;
pub mod source;

// Re-export commonly used error types
pub use error::{ExportError, SourceError};
