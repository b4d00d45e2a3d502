//! The filter-and-export run loop.
//!
//! Wires the record source, one selector variant, and the workbook writer
//! into a single sequential pass: each record is grouped, evaluated and
//! possibly sampled before the next one is read. Only selected rows are
//! held in memory until the final export.

use std::path::{Path, PathBuf};

use crate::export::{self, TableRow};
use crate::select::{CrossEquivSelector, Evaluation, FullEquivSelector};
use crate::source::{RecordSource, SourcedRecord};

/// Totals of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    /// Records examined, selected or not.
    pub processed: u64,
    /// Rows written to the report.
    pub selected: u64,
    pub output: PathBuf,
}

/// Run the full-equivalence report over `shards`, writing the workbook to
/// `output`.
pub fn run_full_equiv(
    shards: Vec<PathBuf>,
    output: &Path,
    base_seed: u64,
) -> anyhow::Result<PipelineReport> {
    let selector = FullEquivSelector::new(base_seed);
    run_records(shards, output, |sourced, position| {
        selector.evaluate(&sourced.shard, &sourced.record, position)
    })
}

/// Run the cross-language report over `shards`, writing the workbook to
/// `output`.
pub fn run_cross_equiv(
    shards: Vec<PathBuf>,
    output: &Path,
    base_seed: u64,
) -> anyhow::Result<PipelineReport> {
    let mut selector = CrossEquivSelector::new(base_seed);
    run_records(shards, output, move |sourced, _position| {
        selector.evaluate(&sourced.record)
    })
}

/// Shared run loop: stream records, log a verdict per record, export the
/// accumulated rows once the source is exhausted.
///
/// `evaluate` receives the 1-based position of the record within the run.
/// Any source or export error aborts the run; nothing is flushed before
/// the final write.
fn run_records<R: TableRow>(
    shards: Vec<PathBuf>,
    output: &Path,
    mut evaluate: impl FnMut(&SourcedRecord, u64) -> Evaluation<R>,
) -> anyhow::Result<PipelineReport> {
    let mut rows: Vec<R> = Vec::new();
    let mut processed: u64 = 0;

    for item in RecordSource::new(shards) {
        let sourced = item?;
        processed += 1;

        let evaluation = evaluate(&sourced, processed);
        match evaluation.row {
            Some(row) => {
                rows.push(row);
                tracing::info!(
                    problem = %sourced.record.name,
                    difficulty = %sourced.record.difficulty,
                    groups = %evaluation.counts,
                    shard = %sourced.shard,
                    "Selected"
                );
            }
            None => {
                tracing::info!(
                    problem = %sourced.record.name,
                    groups = %evaluation.counts,
                    "Skipped"
                );
            }
        }
    }

    export::write_report(&rows, output)?;

    let selected = rows.len() as u64;
    tracing::info!(
        processed,
        selected,
        path = %output.display(),
        "Run complete"
    );

    Ok(PipelineReport {
        processed,
        selected,
        output: output.to_path_buf(),
    })
}
