//! Line-oriented ingestion of numeric text files.
//!
//! Every line is tokenized on commas/whitespace and every token validated. Bad tokens are
//! recorded and skipped; only a failure to open or read the file aborts, and even then the
//! caller gets an (empty) [`NumericIngest`] carrying the diagnostic instead of an error.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::error::IngestionError;
use crate::types::{Dataset, Diagnostic, ParseError};

use super::observability::{
    severity_for_error, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
};
use super::tokenizer::tokenize;
use super::validate::parse_numeric;

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl IngestionOptions {
    /// Report a structural failure to the observer (and alert if it meets the threshold).
    pub(crate) fn report_failure(&self, ctx: &IngestionContext, error: &IngestionError) {
        if let Some(obs) = self.observer.as_ref() {
            let sev = severity_for_error(error);
            obs.on_failure(ctx, sev, error);
            if sev >= self.alert_at_or_above {
                obs.on_alert(ctx, sev, error);
            }
        }
    }
}

/// Result of ingesting one numeric file.
#[derive(Debug, Default)]
pub struct NumericIngest {
    /// Valid values in file order.
    pub dataset: Dataset,
    /// Tokens scanned (valid + invalid).
    pub total_tokens: usize,
    /// Lines read, blank lines included.
    pub lines_read: usize,
    /// Error log, in the order problems were found.
    pub diagnostics: Vec<Diagnostic>,
}

impl NumericIngest {
    /// Drop every value after a structural failure. Token diagnostics logged so far stay,
    /// followed by the failure itself; `total_tokens` then counts only those tokens.
    fn abort(&mut self, error: IngestionError) {
        self.dataset = Dataset::default();
        self.diagnostics.retain(|d| matches!(d, Diagnostic::Token(_)));
        self.total_tokens = self.diagnostics.len();
        self.diagnostics.push(Diagnostic::Input(error));
    }

    /// Number of values in the dataset.
    pub fn valid_count(&self) -> usize {
        self.dataset.len()
    }

    /// Number of rejected tokens.
    pub fn invalid_count(&self) -> usize {
        self.parse_errors().count()
    }

    /// Rejected tokens, in file order.
    pub fn parse_errors(&self) -> impl Iterator<Item = &ParseError> {
        self.diagnostics.iter().filter_map(Diagnostic::as_parse_error)
    }

    /// The structural failure, if the input could not be read.
    pub fn input_error(&self) -> Option<&IngestionError> {
        self.diagnostics.iter().find_map(|d| match d {
            Diagnostic::Input(e) => Some(e),
            Diagnostic::Token(_) => None,
        })
    }

    fn stats(&self) -> IngestionStats {
        IngestionStats {
            lines: self.lines_read,
            tokens: self.total_tokens,
            valid: self.valid_count(),
            invalid: self.invalid_count(),
        }
    }
}

/// Ingest a numeric text file.
///
/// Never fails: an unreadable input yields an empty dataset whose diagnostics end with a
/// [`Diagnostic::Input`]. Values parsed before a mid-file read error are discarded; bad
/// tokens already logged are kept.
///
/// ```no_run
/// use rust_file_statistics::ingestion::{ingest_numbers_from_path, IngestionOptions};
///
/// let ingest = ingest_numbers_from_path("data.txt", &IngestionOptions::default());
/// println!("valid={} invalid={}", ingest.valid_count(), ingest.invalid_count());
/// ```
pub fn ingest_numbers_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> NumericIngest {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    let mut ingest = NumericIngest::default();
    let result = File::open(path).and_then(|file| {
        scan_numbers(BufReader::new(file), &mut ingest, |err| {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_invalid_token(&ctx, err);
            }
        })
    });

    match result {
        Ok(()) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(&ctx, ingest.stats());
            }
        }
        Err(e) => {
            let err = IngestionError::from_io(path, e);
            options.report_failure(&ctx, &err);
            ingest.abort(err);
        }
    }
    ingest
}

/// Ingest numeric text from any buffered reader.
///
/// Returns `Err` only for I/O failures (including invalid UTF-8).
pub fn ingest_numbers_from_reader<R: BufRead>(reader: R) -> io::Result<NumericIngest> {
    let mut out = NumericIngest::default();
    scan_numbers(reader, &mut out, |_| {})?;
    Ok(out)
}

fn scan_numbers<R, F>(mut reader: R, out: &mut NumericIngest, mut on_invalid: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&ParseError),
{
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        out.lines_read += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        for token in tokenize(trimmed) {
            out.total_tokens += 1;
            match parse_numeric(token) {
                Ok(value) => out.dataset.push(value),
                Err(e) => {
                    let err = ParseError {
                        line: out.lines_read,
                        token: token.to_owned(),
                        reason: e.to_string(),
                    };
                    on_invalid(&err);
                    out.diagnostics.push(Diagnostic::Token(err));
                }
            }
        }
    }

    Ok(())
}
