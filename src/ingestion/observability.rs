use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::IngestionError;
use crate::types::ParseError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// A single bad token (non-fatal, ingestion continues).
    Warning,
    /// The input could not be used (missing file).
    Error,
    /// Infrastructure failure (permission denied, read error, bad encoding).
    Critical,
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path used for ingestion.
    pub path: PathBuf,
}

/// Counters reported when ingestion reaches end of file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionStats {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Tokens scanned (valid + invalid).
    pub tokens: usize,
    /// Tokens accepted into the dataset.
    pub valid: usize,
    /// Tokens rejected.
    pub invalid: usize,
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called when the whole input was read.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Called for every rejected token.
    fn on_invalid_token(&self, _ctx: &IngestionContext, _error: &ParseError) {}

    /// Called when the input could not be opened or read.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &IngestionError) {}

    /// Called when an ingestion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Severity assigned to a structural input failure.
pub fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::NotFound { .. } => IngestionSeverity::Error,
        IngestionError::PermissionDenied { .. } | IngestionError::Io { .. } => IngestionSeverity::Critical,
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_invalid_token(&self, ctx: &IngestionContext, error: &ParseError) {
        for o in &self.observers {
            o.on_invalid_token(ctx, error);
        }
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs ingestion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestionObserver for StdErrObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        eprintln!(
            "[ingest][ok] path={} lines={} tokens={} valid={} invalid={}",
            ctx.path.display(),
            stats.lines,
            stats.tokens,
            stats.valid,
            stats.invalid
        );
    }

    fn on_invalid_token(&self, ctx: &IngestionContext, error: &ParseError) {
        eprintln!(
            "[ingest][{:?}] path={} line={} token={:?} reason={}",
            IngestionSeverity::Warning,
            ctx.path.display(),
            error.line,
            error.token,
            error.reason
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!("[ingest][{:?}] path={} err={}", severity, ctx.path.display(), error);
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        eprintln!(
            "[ALERT][ingest][{:?}] path={} err={}",
            severity,
            ctx.path.display(),
            error
        );
    }
}

/// Appends ingestion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.append_line(&format!(
            "{} ok path={} lines={} tokens={} valid={} invalid={}",
            unix_ts(),
            ctx.path.display(),
            stats.lines,
            stats.tokens,
            stats.valid,
            stats.invalid
        ));
    }

    fn on_invalid_token(&self, ctx: &IngestionContext, error: &ParseError) {
        self.append_line(&format!(
            "{} invalid path={} line={} token={:?} reason={}",
            unix_ts(),
            ctx.path.display(),
            error.line,
            error.token,
            error.reason
        ));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append_line(&format!(
            "{} fail severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &IngestionError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn severity_ranks_missing_file_below_read_failures() {
        let nf = IngestionError::from_io("x", io::Error::from(io::ErrorKind::NotFound));
        let pd = IngestionError::from_io("x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(severity_for_error(&nf), IngestionSeverity::Error);
        assert_eq!(severity_for_error(&pd), IngestionSeverity::Critical);
        assert!(IngestionSeverity::Warning < IngestionSeverity::Error);
    }

    #[test]
    fn file_observer_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("ingest.log");
        let obs = FileObserver::new(&log);
        let ctx = IngestionContext {
            path: PathBuf::from("data.txt"),
        };
        obs.on_success(
            &ctx,
            IngestionStats {
                lines: 2,
                tokens: 3,
                valid: 2,
                invalid: 1,
            },
        );
        obs.on_invalid_token(
            &ctx,
            &ParseError {
                line: 2,
                token: "x".to_string(),
                reason: "invalid float literal".to_string(),
            },
        );

        let text = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ok path=data.txt lines=2 tokens=3 valid=2 invalid=1"));
        assert!(lines[1].contains("invalid path=data.txt line=2 token=\"x\""));
    }
}
