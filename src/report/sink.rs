//! Report output: a file (overwritten every run) plus stdout.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::{OutputError, OutputResult};
use crate::ingestion::NumericIngest;
use crate::processing::StatisticsSummary;

/// Default output path of `compute-statistics`.
pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";
/// Default output path of `convert-numbers`.
pub const CONVERSION_RESULTS_FILE: &str = "ConversionResults.txt";
/// Default output path of `word-count`.
pub const WORD_COUNT_RESULTS_FILE: &str = "WordCountResults.txt";

fn ensure_parent(path: &Path) -> OutputResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        }),
        _ => Ok(()),
    }
}

/// Write `report` to `path`, replacing any previous content.
pub fn write_report(path: &Path, report: &str) -> OutputResult<()> {
    ensure_parent(path)?;
    fs::write(path, report).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Print `report` to `stdout`, then write it to `output_path`.
///
/// The file is written even if printing failed; the first failure is returned. Callers treat
/// the error as a warning.
pub fn emit_report<W: Write>(report: &str, output_path: &Path, stdout: &mut W) -> OutputResult<()> {
    let printed = stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(OutputError::Stdout);
    let written = write_report(output_path, report);
    printed.and(written)
}

/// Machine-readable counterpart of the statistics report.
#[derive(Debug, Serialize)]
pub struct StatisticsDocument<'a> {
    pub input: &'a Path,
    pub total_tokens: usize,
    pub valid: usize,
    pub invalid: usize,
    pub summary: &'a StatisticsSummary,
    pub diagnostics: Vec<String>,
}

impl<'a> StatisticsDocument<'a> {
    pub fn new(input: &'a Path, ingest: &NumericIngest, summary: &'a StatisticsSummary) -> Self {
        Self {
            input,
            total_tokens: ingest.total_tokens,
            valid: ingest.valid_count(),
            invalid: ingest.invalid_count(),
            summary,
            diagnostics: ingest.diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Write the statistics as pretty-printed JSON.
pub fn write_summary_json(path: &Path, doc: &StatisticsDocument<'_>) -> OutputResult<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, doc).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    w.flush().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingestion::ingest_numbers_from_reader;

    #[test]
    fn emit_prints_and_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "old content that is longer than the new one").unwrap();

        let mut stdout = Vec::new();
        emit_report("new\n", &path, &mut stdout).unwrap();

        assert_eq!(stdout, b"new\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn emit_still_prints_when_file_cannot_be_written() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file.
        let mut stdout = Vec::new();
        let err = emit_report("report\n", dir.path(), &mut stdout).unwrap_err();

        assert!(matches!(err, OutputError::Write { .. }));
        assert_eq!(stdout, b"report\n");
    }

    #[test]
    fn json_summary_contains_counts_and_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let ingest = ingest_numbers_from_reader("1 1 x".as_bytes()).unwrap();
        let summary = StatisticsSummary::compute(&ingest.dataset, &ingest.dataset.sorted());

        write_summary_json(&path, &StatisticsDocument::new(Path::new("in.txt"), &ingest, &summary)).unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["input"], "in.txt");
        assert_eq!(v["total_tokens"], 3);
        assert_eq!(v["valid"], 2);
        assert_eq!(v["invalid"], 1);
        assert_eq!(v["summary"]["modes"], serde_json::json!([1.0]));
        assert_eq!(v["diagnostics"].as_array().unwrap().len(), 1);
    }
}
