//! Lazy record source over sharded problem stores.
//!
//! A store is an ordered sequence of shard files, each holding one JSON
//! problem record per line, optionally gzip-compressed (`.gz` suffix).
//! [`RecordSource`] walks the shards in argument order and yields records in
//! line order within each shard, logging shard boundaries and a counter
//! every [`PROGRESS_INTERVAL`] records. Any unreadable shard or malformed
//! line is an error; callers are expected to treat it as fatal for the run.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::SourceError;
use crate::record::ProblemRecord;

/// How many records to read within a shard between progress log lines.
pub const PROGRESS_INTERVAL: usize = 1000;

/// A problem record together with the shard it was read from.
#[derive(Debug, Clone)]
pub struct SourcedRecord {
    /// Display path of the originating shard.
    pub shard: String,
    pub record: ProblemRecord,
}

/// Reader over a single shard file.
pub struct ShardReader {
    display: String,
    lines: Lines<BufReader<Box<dyn Read>>>,
    line_no: usize,
    records: usize,
}

impl ShardReader {
    /// Open a shard for reading. Paths ending in `.gz` are decompressed on
    /// the fly.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let display = path.display().to_string();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: display.clone(),
            source,
        })?;

        let reader: Box<dyn Read> = if path.extension().and_then(|ext| ext.to_str()) == Some("gz")
        {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        Ok(Self {
            display,
            lines: BufReader::new(reader).lines(),
            line_no: 0,
            records: 0,
        })
    }

    /// Display path of the shard being read.
    pub fn path(&self) -> &str {
        &self.display
    }

    /// Number of records decoded so far.
    pub fn records_read(&self) -> usize {
        self.records
    }
}

impl Iterator for ShardReader {
    type Item = Result<ProblemRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(SourceError::Read {
                        path: self.display.clone(),
                        source,
                    }))
                }
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(match serde_json::from_str::<ProblemRecord>(&line) {
                Ok(record) => {
                    self.records += 1;
                    if self.records % PROGRESS_INTERVAL == 0 {
                        tracing::info!(
                            shard = %self.display,
                            records = self.records,
                            "Shard progress"
                        );
                    }
                    Ok(record)
                }
                Err(source) => Err(SourceError::Decode {
                    path: self.display.clone(),
                    line: self.line_no,
                    source,
                }),
            });
        }
    }
}

/// Lazy iterator over an ordered sequence of shards.
///
/// Yields every record of the first shard, then the second, and so on.
/// The iterator is restartable only by constructing a new instance.
pub struct RecordSource {
    shards: std::vec::IntoIter<PathBuf>,
    total: usize,
    index: usize,
    current: Option<ShardReader>,
}

impl RecordSource {
    pub fn new(shards: Vec<PathBuf>) -> Self {
        let total = shards.len();
        Self {
            shards: shards.into_iter(),
            total,
            index: 0,
            current: None,
        }
    }
}

impl Iterator for RecordSource {
    type Item = Result<SourcedRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(reader) = self.current.as_mut() {
                match reader.next() {
                    Some(Ok(record)) => {
                        return Some(Ok(SourcedRecord {
                            shard: reader.path().to_string(),
                            record,
                        }))
                    }
                    Some(Err(err)) => return Some(Err(err)),
                    None => {
                        tracing::info!(
                            shard = %reader.path(),
                            index = self.index,
                            total = self.total,
                            records = reader.records_read(),
                            "Finished shard"
                        );
                        self.current = None;
                    }
                }
            }

            let path = self.shards.next()?;
            self.index += 1;
            tracing::info!(
                shard = %path.display(),
                index = self.index,
                total = self.total,
                "Starting shard"
            );
            match ShardReader::open(&path) {
                Ok(reader) => self.current = Some(reader),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn write_shard(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, lines.join("\n")).expect("shard write should succeed");
        path
    }

    fn record_line(name: &str) -> String {
        serde_json::json!({
            "name": name,
            "source": 2,
            "difficulty": 1,
            "solutions": [{"language": 2, "solution": "int main(){}"}],
        })
        .to_string()
    }

    #[test]
    fn test_reads_shards_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = record_line("a1");
        let b = record_line("b1");
        let c = record_line("b2");
        let first = write_shard(dir.path(), "first.jsonl", &[&a]);
        let second = write_shard(dir.path(), "second.jsonl", &[&b, &c]);

        let names: Vec<String> = RecordSource::new(vec![first, second])
            .map(|item| item.expect("records should decode").record.name)
            .collect();
        assert_eq!(names, vec!["a1", "b1", "b2"]);
    }

    #[test]
    fn test_skips_blank_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = record_line("a1");
        let b = record_line("a2");
        let shard = write_shard(dir.path(), "shard.jsonl", &[&a, "", "   ", &b]);

        let count = RecordSource::new(vec![shard])
            .map(|item| item.expect("records should decode"))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let a = record_line("a1");
        let shard = write_shard(dir.path(), "shard.jsonl", &[&a, "{not json"]);

        let mut source = RecordSource::new(vec![shard]);
        assert!(source.next().expect("first record").is_ok());
        let err = source.next().expect("second item").unwrap_err();
        match err {
            SourceError::Decode { line, .. } => assert_eq!(line, 2),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_enum_code_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let bad = r#"{"name":"p","source":99}"#;
        let shard = write_shard(dir.path(), "shard.jsonl", &[bad]);

        let mut source = RecordSource::new(vec![shard]);
        assert!(matches!(
            source.next().expect("one item"),
            Err(SourceError::Decode { .. })
        ));
    }

    #[test]
    fn test_missing_shard_is_an_error() {
        let mut source = RecordSource::new(vec![PathBuf::from("/nonexistent/shard.jsonl")]);
        assert!(matches!(
            source.next().expect("one item"),
            Err(SourceError::Open { .. })
        ));
    }

    #[test]
    fn test_gzip_shard_matches_plain() {
        let dir = tempfile::tempdir().expect("tempdir");
        let lines = [record_line("g1"), record_line("g2")];
        let plain = write_shard(
            dir.path(),
            "shard.jsonl",
            &lines.iter().map(String::as_str).collect::<Vec<_>>(),
        );

        let gz_path = dir.path().join("shard.jsonl.gz");
        let gz_file = File::create(&gz_path).expect("gz create");
        let mut encoder = GzEncoder::new(gz_file, Compression::default());
        encoder
            .write_all(lines.join("\n").as_bytes())
            .expect("gz write");
        encoder.finish().expect("gz finish");

        let plain_names: Vec<String> = RecordSource::new(vec![plain])
            .map(|item| item.expect("plain records").record.name)
            .collect();
        let gz_names: Vec<String> = RecordSource::new(vec![gz_path])
            .map(|item| item.expect("gz records").record.name)
            .collect();
        assert_eq!(plain_names, gz_names);
    }
}
