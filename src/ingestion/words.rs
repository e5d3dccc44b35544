//! Word scanning for word counting.
//!
//! Words are runs of letters (ASCII plus the Spanish accented letters and `ñ`/`ü`)
//! separated by spaces, tabs or line breaks. Any other character is reported and dropped
//! without splitting the surrounding word.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::IngestionError;
use crate::processing::frequency::WordFrequencies;

use super::numbers::IngestionOptions;
use super::observability::{IngestionContext, IngestionStats};

const ACCENTED_UPPER: [char; 7] = ['Á', 'É', 'Í', 'Ó', 'Ú', 'Ñ', 'Ü'];
const ACCENTED_LOWER: [char; 7] = ['á', 'é', 'í', 'ó', 'ú', 'ñ', 'ü'];

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Returns `true` for characters allowed inside a word.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ACCENTED_UPPER.contains(&c) || ACCENTED_LOWER.contains(&c)
}

/// Lowercase ASCII letters and the accented capitals; leave everything else unchanged.
pub fn lowercase_word(word: &str) -> String {
    word.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if let Some(i) = ACCENTED_UPPER.iter().position(|u| *u == c) {
                ACCENTED_LOWER[i]
            } else {
                c
            }
        })
        .collect()
}

/// A problem found while counting words.
#[derive(Debug)]
pub enum WordDiagnostic {
    /// A character that is neither a letter nor a separator.
    InvalidChar { line: usize, position: usize, ch: char },
    /// The input could not be opened or read.
    Input(IngestionError),
}

impl fmt::Display for WordDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { line, position, ch } => {
                write!(f, "Error: invalid character on line {line} position {position}: {ch:?}")
            }
            Self::Input(e) => write!(f, "Input error: {e}"),
        }
    }
}

/// Word counts for one input.
#[derive(Debug, Default)]
pub struct WordIngest {
    pub frequencies: WordFrequencies,
    pub lines_read: usize,
    pub diagnostics: Vec<WordDiagnostic>,
}

/// Count words in a text file. Never fails; see [`WordDiagnostic::Input`].
pub fn ingest_words_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> WordIngest {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    match File::open(path).and_then(|f| ingest_words_from_reader(BufReader::new(f))) {
        Ok(ingest) => {
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(
                    &ctx,
                    IngestionStats {
                        lines: ingest.lines_read,
                        tokens: ingest.frequencies.total() + ingest.diagnostics.len(),
                        valid: ingest.frequencies.total(),
                        invalid: ingest.diagnostics.len(),
                    },
                );
            }
            ingest
        }
        Err(e) => {
            let err = IngestionError::from_io(path, e);
            options.report_failure(&ctx, &err);
            WordIngest {
                diagnostics: vec![WordDiagnostic::Input(err)],
                ..WordIngest::default()
            }
        }
    }
}

/// Count words from any buffered reader. Invalid UTF-8 is replaced, not rejected.
pub fn ingest_words_from_reader<R: BufRead>(mut reader: R) -> io::Result<WordIngest> {
    let mut out = WordIngest::default();
    let mut buf = Vec::new();
    let mut word = String::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        out.lines_read += 1;
        let line = String::from_utf8_lossy(&buf);

        for (pos, c) in line.chars().enumerate() {
            if is_word_separator(c) {
                flush_word(&mut word, &mut out.frequencies);
            } else if is_word_char(c) {
                word.push(c);
            } else {
                out.diagnostics.push(WordDiagnostic::InvalidChar {
                    line: out.lines_read,
                    position: pos + 1,
                    ch: c,
                });
            }
        }
        flush_word(&mut word, &mut out.frequencies);
    }

    Ok(out)
}

fn flush_word(word: &mut String, freqs: &mut WordFrequencies) {
    if !word.is_empty() {
        freqs.record(&lowercase_word(word));
        word.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_ascii_and_accented_letters() {
        assert_eq!(lowercase_word("ÁrBOL Ñandú ÜBER"), "árbol ñandú über");
    }

    #[test]
    fn counts_words_case_insensitively() {
        let ingest = ingest_words_from_reader("Hola mundo\nhola\tMUNDO hola\r\n".as_bytes()).unwrap();
        let pairs: Vec<_> = ingest.frequencies.iter().collect();
        assert_eq!(pairs, vec![("hola", 3), ("mundo", 2)]);
        assert!(ingest.diagnostics.is_empty());
        assert_eq!(ingest.lines_read, 2);
    }

    #[test]
    fn invalid_characters_are_reported_and_dropped_without_splitting() {
        let ingest = ingest_words_from_reader("can't stop\n".as_bytes()).unwrap();
        let pairs: Vec<_> = ingest.frequencies.iter().collect();
        assert_eq!(pairs, vec![("cant", 1), ("stop", 1)]);
        assert_eq!(ingest.diagnostics.len(), 1);
        assert_eq!(
            ingest.diagnostics[0].to_string(),
            "Error: invalid character on line 1 position 4: '\\''"
        );
    }

    #[test]
    fn invalid_utf8_becomes_replacement_character() {
        let bytes: &[u8] = &[b'a', 0xff, b'b', b'\n'];
        let ingest = ingest_words_from_reader(bytes).unwrap();
        assert_eq!(ingest.frequencies.get("ab"), 1);
        assert!(matches!(
            ingest.diagnostics[0],
            WordDiagnostic::InvalidChar { ch: '\u{fffd}', position: 2, .. }
        ));
    }

    #[test]
    fn missing_file_is_a_single_diagnostic() {
        let ingest = ingest_words_from_path("nope/missing.txt", &IngestionOptions::default());
        assert!(ingest.frequencies.is_empty());
        assert!(matches!(ingest.diagnostics.as_slice(), [WordDiagnostic::Input(_)]));
    }
}
