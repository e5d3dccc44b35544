//! Command-line parsing for the three binaries.
//!
//! Parsing stays here; [`crate::app`] turns parsed arguments into options and runs.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser};

use crate::ingestion::{CompositeObserver, FileObserver, IngestionObserver, IngestionOptions, StdErrObserver};
use crate::report::{CONVERSION_RESULTS_FILE, STATISTICS_RESULTS_FILE, WORD_COUNT_RESULTS_FILE};

/// Logging flags shared by every binary.
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingArgs {
    /// Log ingestion and pipeline events to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Append ingestion events to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl LoggingArgs {
    /// Ingestion options with the observers these flags ask for.
    pub fn ingestion_options(&self) -> IngestionOptions {
        let mut observers: Vec<Arc<dyn IngestionObserver>> = Vec::new();
        if self.verbose {
            observers.push(Arc::new(StdErrObserver));
        }
        if let Some(path) = &self.log_file {
            observers.push(Arc::new(FileObserver::new(path)));
        }

        let observer: Option<Arc<dyn IngestionObserver>> = match observers.len() {
            0 => None,
            1 => observers.pop(),
            _ => Some(Arc::new(CompositeObserver::new(observers))),
        };

        IngestionOptions {
            observer,
            ..Default::default()
        }
    }
}

/// Compute descriptive statistics of a file of numbers.
#[derive(Debug, Parser)]
#[command(name = "compute-statistics", version)]
pub struct StatisticsArgs {
    /// Text file with comma- and/or whitespace-separated numbers.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the report (overwritten on every run).
    #[arg(short, long, value_name = "PATH", default_value = STATISTICS_RESULTS_FILE)]
    pub output: PathBuf,

    /// Also write the statistics as JSON.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Convert integers (one per line) to binary and hexadecimal.
#[derive(Debug, Parser)]
#[command(name = "convert-numbers", version)]
pub struct ConversionArgs {
    /// Text file with one integer per line.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the conversion table.
    #[arg(short, long, value_name = "PATH", default_value = CONVERSION_RESULTS_FILE)]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Count distinct words and their frequencies.
#[derive(Debug, Parser)]
#[command(name = "word-count", version)]
pub struct WordCountArgs {
    /// Text file to count words in.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Where to write the word counts.
    #[arg(short, long, value_name = "PATH", default_value = WORD_COUNT_RESULTS_FILE)]
    pub output: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definitions_are_valid() {
        StatisticsArgs::command().debug_assert();
        ConversionArgs::command().debug_assert();
        WordCountArgs::command().debug_assert();
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = StatisticsArgs::try_parse_from(["compute-statistics"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn defaults_and_flags() {
        let args = StatisticsArgs::try_parse_from(["compute-statistics", "data.txt"]).unwrap();
        assert_eq!(args.output, PathBuf::from(STATISTICS_RESULTS_FILE));
        assert!(args.json.is_none());
        assert!(args.logging.ingestion_options().observer.is_none());

        let args = StatisticsArgs::try_parse_from([
            "compute-statistics",
            "data.txt",
            "-o",
            "out/r.txt",
            "--json",
            "s.json",
            "-v",
            "--log-file",
            "ingest.log",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("out/r.txt"));
        assert_eq!(args.json, Some(PathBuf::from("s.json")));
        assert!(args.logging.ingestion_options().observer.is_some());
    }
}
