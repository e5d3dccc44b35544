//! Plain-text report builders.
//!
//! All builders are pure: they take computed results and return the full report text,
//! ending with a newline. The same text goes to the output file and to stdout.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use crate::ingestion::{InvalidLine, NumericIngest, WordDiagnostic};
use crate::processing::{Conversion, StatisticsSummary, WordFrequencies};

/// Placeholder for an undefined statistic.
pub const NOT_AVAILABLE: &str = "N/A";

/// Mode line content when no value repeats.
pub const NO_MODE: &str = "N/A (no mode)";

/// Render a statistic: `N/A` when undefined or not finite, no decimal point for integral
/// values, otherwise exactly six fractional digits.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(v) if !v.is_finite() => NOT_AVAILABLE.to_string(),
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v == v.trunc() => format!("{v:.0}"),
        Some(v) => format!("{v:.6}"),
    }
}

fn format_modes(modes: &[f64]) -> String {
    if modes.is_empty() {
        return NO_MODE.to_string();
    }
    modes
        .iter()
        .map(|m| format_number(Some(*m)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the descriptive-statistics report.
///
/// Layout: header, counts, statistics block, elapsed time, then the error log only when
/// something was logged.
pub fn build_statistics_report(input: &Path, ingest: &NumericIngest, summary: &StatisticsSummary) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "=== Statistics Results ===");
    let _ = writeln!(out, "Input file: {}", input.display());
    let _ = writeln!(out, "Total values read (valid + invalid): {}", ingest.total_tokens);
    let _ = writeln!(out, "Valid numbers: {}", ingest.valid_count());
    let _ = writeln!(out, "Invalid values: {}", ingest.invalid_count());
    out.push('\n');

    let _ = writeln!(out, "=== Descriptive Statistics ===");
    let _ = writeln!(out, "Mean: {}", format_number(summary.mean));
    let _ = writeln!(out, "Median: {}", format_number(summary.median));
    let _ = writeln!(out, "Mode: {}", format_modes(&summary.modes));
    let _ = writeln!(out, "Variance: {}", format_number(summary.variance));
    let _ = writeln!(out, "Standard deviation: {}", format_number(summary.standard_deviation));
    out.push('\n');
    let _ = writeln!(out, "Elapsed time (seconds): {:.6}", summary.elapsed.as_secs_f64());

    if !ingest.diagnostics.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "=== Errors detected (execution continued) ===");
        for d in &ingest.diagnostics {
            let _ = writeln!(out, "{d}");
        }
    }

    out
}

/// Build the number conversion table.
pub fn build_conversion_report(rows: &[Conversion], invalid: &[InvalidLine], elapsed: Duration) -> String {
    let mut out = String::from("Number\tBinary\tHexadecimal\n");
    for row in rows {
        let _ = writeln!(out, "{}\t{}\t{}", row.value, row.binary, row.hexadecimal);
    }
    let _ = writeln!(out, "Elapsed time (s): {:.6}", elapsed.as_secs_f64());

    if !invalid.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "=== Errors detected (execution continued) ===");
        for e in invalid {
            let _ = writeln!(out, "{e}");
        }
    }
    out
}

const RULE: &str = "------------------";

/// Build the word count table (words in first-seen order).
pub fn build_word_count_report(
    frequencies: &WordFrequencies,
    diagnostics: &[WordDiagnostic],
    elapsed: Duration,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Word Count Results");
    let _ = writeln!(out, "{RULE}");
    for (word, count) in frequencies.iter() {
        let _ = writeln!(out, "{word} {count}");
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Elapsed time (s): {:.6}", elapsed.as_secs_f64());

    if !diagnostics.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "=== Errors detected (execution continued) ===");
        for d in diagnostics {
            let _ = writeln!(out, "{d}");
        }
    }
    out
}
