//! Top-level application orchestration.
//!
//! The binaries under `src/bin/` are intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the matching pipeline
//! - prints the report and writes the output file(s)
//!
//! Output-file failures are warnings on stderr; they never change the exit status.

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;

use crate::cli::{ConversionArgs, StatisticsArgs, WordCountArgs};
use crate::error::AppError;
use crate::pipeline::{
    run_conversion, run_statistics, run_word_count, PipelineObserver, StatisticsOptions, StdErrPipelineObserver,
};
use crate::report::{emit_report, write_summary_json};

/// Entry point for the `compute-statistics` binary.
pub fn run_compute_statistics() -> Result<(), AppError> {
    let args = StatisticsArgs::parse();
    compute_statistics(&args, &mut io::stdout().lock())
}

/// Entry point for the `convert-numbers` binary.
pub fn run_convert_numbers() -> Result<(), AppError> {
    let args = ConversionArgs::parse();
    convert_numbers(&args, &mut io::stdout().lock())
}

/// Entry point for the `word-count` binary.
pub fn run_word_count_cli() -> Result<(), AppError> {
    let args = WordCountArgs::parse();
    word_count(&args, &mut io::stdout().lock())
}

/// Run statistics for already-parsed arguments, printing to `stdout`.
///
/// Always succeeds: data and input problems are part of the report.
pub fn compute_statistics<W: Write>(args: &StatisticsArgs, stdout: &mut W) -> Result<(), AppError> {
    let options = StatisticsOptions {
        ingestion: args.logging.ingestion_options(),
        observer: args
            .logging
            .verbose
            .then(|| Arc::new(StdErrPipelineObserver) as Arc<dyn PipelineObserver>),
    };

    let run = run_statistics(&args.file, &options);
    let report = run.report();

    if let Err(e) = emit_report(&report, &args.output, stdout) {
        eprintln!("warning: {e}");
    }
    if let Some(path) = &args.json {
        if let Err(e) = write_summary_json(path, &run.document()) {
            eprintln!("warning: {e}");
        }
    }
    Ok(())
}

/// Run number conversion. A missing or unreadable input is the only failure (exit 1).
pub fn convert_numbers<W: Write>(args: &ConversionArgs, stdout: &mut W) -> Result<(), AppError> {
    let run = run_conversion(&args.file, &args.logging.ingestion_options())?;

    if let Err(e) = emit_report(&run.report(), &args.output, stdout) {
        eprintln!("warning: {e}");
    }
    Ok(())
}

/// Run word counting. Always succeeds.
pub fn word_count<W: Write>(args: &WordCountArgs, stdout: &mut W) -> Result<(), AppError> {
    let run = run_word_count(&args.file, &args.logging.ingestion_options());

    if let Err(e) = emit_report(&run.report(), &args.output, stdout) {
        eprintln!("warning: {e}");
    }
    Ok(())
}
