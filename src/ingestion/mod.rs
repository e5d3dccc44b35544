//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_numbers_from_path`] (from [`numbers`]) which:
//!
//! - reads the file one line at a time
//! - splits lines with the [`tokenizer`] and checks tokens with [`validate`]
//! - collects valid values and a diagnostic per bad token, never stopping early
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The other tools have their own line readers:
//! - [`integers`] (one integer per line, for number conversion)
//! - [`words`] (letter runs, for word counting)

pub mod integers;
pub mod numbers;
pub mod observability;
pub mod tokenizer;
pub mod validate;
pub mod words;

pub use integers::{ingest_integers_from_path, ingest_integers_from_reader, IntegerIngest, InvalidLine};
pub use numbers::{ingest_numbers_from_path, ingest_numbers_from_reader, IngestionOptions, NumericIngest};
pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    StdErrObserver,
};
pub use tokenizer::{tokenize, Tokens};
pub use validate::parse_numeric;
pub use words::{ingest_words_from_path, ingest_words_from_reader, WordDiagnostic, WordIngest};
