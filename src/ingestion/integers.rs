//! One-integer-per-line ingestion used by number conversion.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};

use super::numbers::IngestionOptions;
use super::observability::{IngestionContext, IngestionStats};

/// A line that is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// 1-based line number.
    pub line: usize,
    /// Line text, trimmed.
    pub text: String,
}

impl fmt::Display for InvalidLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error (line {}): invalid value -> {}", self.line, self.text)
    }
}

/// Valid integers in file order plus the lines that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerIngest {
    pub values: Vec<i128>,
    pub invalid: Vec<InvalidLine>,
    pub lines_read: usize,
}

/// Parse a trimmed line as a signed base-10 integer.
pub fn parse_integer(text: &str) -> Option<i128> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i128>().ok()
}

/// Ingest an integer-per-line file.
///
/// Unlike numeric ingestion, a missing or unreadable file is returned as an error: number
/// conversion has nothing useful to report without input.
pub fn ingest_integers_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<IntegerIngest> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    match File::open(path).and_then(|f| ingest_integers_from_reader(BufReader::new(f))) {
        Ok(ingest) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(
                    &ctx,
                    IngestionStats {
                        lines: ingest.lines_read,
                        tokens: ingest.lines_read,
                        valid: ingest.values.len(),
                        invalid: ingest.invalid.len(),
                    },
                );
            }
            Ok(ingest)
        }
        Err(e) => {
            let err = IngestionError::from_io(path, e);
            options.report_failure(&ctx, &err);
            Err(err)
        }
    }
}

/// Ingest integer-per-line text from any buffered reader.
pub fn ingest_integers_from_reader<R: BufRead>(reader: R) -> io::Result<IntegerIngest> {
    let mut out = IntegerIngest::default();
    for line in reader.lines() {
        let line = line?;
        out.lines_read += 1;
        match parse_integer(&line) {
            Some(v) => out.values.push(v),
            None => out.invalid.push(InvalidLine {
                line: out.lines_read,
                text: line.trim().to_owned(),
            }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_accepts_signs_and_surrounding_whitespace() {
        assert_eq!(parse_integer(" 42 \n"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("abc"), None);
    }

    #[test]
    fn blank_and_bad_lines_are_reported_not_fatal() {
        let ingest = ingest_integers_from_reader("10\n\nx1\n-2\n".as_bytes()).unwrap();
        assert_eq!(ingest.values, vec![10, -2]);
        assert_eq!(ingest.lines_read, 4);
        assert_eq!(
            ingest.invalid,
            vec![
                InvalidLine { line: 2, text: String::new() },
                InvalidLine { line: 3, text: "x1".to_string() },
            ]
        );
        assert_eq!(ingest.invalid[1].to_string(), "Error (line 3): invalid value -> x1");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ingest_integers_from_path("nope/missing.txt", &IngestionOptions::default()).unwrap_err();
        assert!(matches!(err, IngestionError::NotFound { .. }));
    }
}
