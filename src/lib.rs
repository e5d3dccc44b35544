//! `rust-file-statistics` ingests numeric text files into a validated in-memory
//! [`types::Dataset`] and computes descriptive statistics over it, with a plain-text report
//! as the end product.
//!
//! The primary entrypoint is [`pipeline::run_statistics`], which streams the file line by
//! line, sorts once and computes every statistic. Bad tokens never stop a run: they are
//! collected as [`types::Diagnostic`]s and listed at the end of the report.
//!
//! ## What gets ingested
//!
//! - Lines of numbers separated by commas and/or any whitespace, in any mix.
//! - Each token must parse as a finite decimal; `nan`, `inf` and overflowing literals are
//!   rejected with a reason.
//! - Blank lines are skipped; line numbers in diagnostics stay 1-based file lines.
//! - A missing or unreadable file yields an empty dataset plus one diagnostic.
//!
//! ## Quick example: ingest + statistics
//!
//! ```no_run
//! use rust_file_statistics::pipeline::{run_statistics, StatisticsOptions};
//!
//! let run = run_statistics("data.txt", &StatisticsOptions::default());
//! println!("valid={} invalid={}", run.ingest.valid_count(), run.ingest.invalid_count());
//! print!("{}", run.report());
//! ```
//!
//! ## In-memory example
//!
//! ```rust
//! use rust_file_statistics::ingestion::ingest_numbers_from_reader;
//! use rust_file_statistics::processing::StatisticsSummary;
//!
//! let ingest = ingest_numbers_from_reader("1,2,3\n4 5\nabc\n".as_bytes()).unwrap();
//! assert_eq!(ingest.dataset.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(ingest.invalid_count(), 1);
//!
//! let sorted = ingest.dataset.sorted();
//! let s = StatisticsSummary::compute(&ingest.dataset, &sorted);
//! assert_eq!(s.mean, Some(3.0));
//! assert_eq!(s.median, Some(3.0));
//! assert!(s.modes.is_empty());
//! assert_eq!(s.variance, Some(2.0));
//! ```
//!
//! ### Statistics
//!
//! - mean, median (average of the two middle values for even counts)
//! - modes: every value with the highest frequency, sorted; empty when nothing repeats
//! - population variance (divides by `n`)
//! - standard deviation via a fixed 30-step Newton-Raphson square root
//!
//! Undefined statistics (empty dataset) are `None` and render as `N/A`.
//!
//! ## Modules
//!
//! - [`ingestion`]: tokenizer, validator and line-oriented readers, plus observer hooks
//! - [`types`]: dataset + diagnostic types
//! - [`processing`]: merge sort, statistics, number conversion, word frequencies
//! - [`report`]: report text builders and the file/stdout sink
//! - [`pipeline`]: linear runners tying the stages together
//! - [`error`]: error types
//!
//! Two smaller tools share the same ingestion and report style: `convert-numbers`
//! (integers to binary/hexadecimal) and `word-count`.

pub mod app;
pub mod cli;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{AppError, IngestionError, IngestionResult, OutputError, ValidationError};
