//! Linear runners for the three tools.
//!
//! A statistics run is strictly sequential: ingest the whole file, sort once, compute every
//! statistic, then hand the result to the report layer. There is no branching beyond what
//! each stage records in its own diagnostics.

mod observer;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::IngestionResult;
use crate::ingestion::{
    ingest_integers_from_path, ingest_numbers_from_path, ingest_words_from_path, IngestionOptions, InvalidLine,
    NumericIngest, WordDiagnostic,
};
use crate::processing::{Conversion, StatisticsSummary, WordFrequencies};
use crate::report::{build_conversion_report, build_statistics_report, build_word_count_report, StatisticsDocument};
use crate::types::SortedDataset;

pub use observer::{PipelineEvent, PipelineObserver, StdErrPipelineObserver};

/// Configuration for [`run_statistics`].
#[derive(Clone, Default)]
pub struct StatisticsOptions {
    /// Options forwarded to ingestion.
    pub ingestion: IngestionOptions,
    /// Optional observer for stage events.
    pub observer: Option<Arc<dyn PipelineObserver>>,
}

impl fmt::Debug for StatisticsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatisticsOptions")
            .field("ingestion", &self.ingestion)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl StatisticsOptions {
    fn emit(&self, event: PipelineEvent) {
        if let Some(obs) = self.observer.as_ref() {
            obs.on_event(&event);
        }
    }
}

/// Everything a statistics run produced.
#[derive(Debug)]
pub struct StatisticsRun {
    pub input: PathBuf,
    pub ingest: NumericIngest,
    pub sorted: SortedDataset,
    pub summary: StatisticsSummary,
}

impl StatisticsRun {
    /// The plain-text report.
    pub fn report(&self) -> String {
        build_statistics_report(&self.input, &self.ingest, &self.summary)
    }

    /// The JSON view of the run.
    pub fn document(&self) -> StatisticsDocument<'_> {
        StatisticsDocument::new(&self.input, &self.ingest, &self.summary)
    }
}

/// Ingest `path`, sort, and compute statistics.
///
/// Never fails; input problems are in `ingest.diagnostics`. The summary's elapsed time
/// covers ingestion through statistics.
pub fn run_statistics(path: impl AsRef<Path>, options: &StatisticsOptions) -> StatisticsRun {
    let start = Instant::now();
    let path = path.as_ref();
    options.emit(PipelineEvent::RunStarted {
        input: path.to_path_buf(),
    });

    let ingest = ingest_numbers_from_path(path, &options.ingestion);
    options.emit(PipelineEvent::IngestFinished {
        lines: ingest.lines_read,
        tokens: ingest.total_tokens,
        valid: ingest.valid_count(),
        invalid: ingest.invalid_count(),
    });

    let sorted = ingest.dataset.sorted();
    options.emit(PipelineEvent::SortFinished { len: sorted.len() });

    let summary = StatisticsSummary::compute(&ingest.dataset, &sorted);
    options.emit(PipelineEvent::StatisticsFinished {
        count: summary.count,
        modes: summary.modes.len(),
    });

    let elapsed = start.elapsed();
    options.emit(PipelineEvent::RunFinished { elapsed });

    StatisticsRun {
        input: path.to_path_buf(),
        ingest,
        sorted,
        summary: summary.with_elapsed(elapsed),
    }
}

/// Result of converting an integer-per-line file.
#[derive(Debug, Clone)]
pub struct ConversionRun {
    pub rows: Vec<Conversion>,
    pub invalid: Vec<InvalidLine>,
    pub elapsed: Duration,
}

impl ConversionRun {
    pub fn report(&self) -> String {
        build_conversion_report(&self.rows, &self.invalid, self.elapsed)
    }
}

/// Convert every integer of `path` to binary and hexadecimal.
pub fn run_conversion(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<ConversionRun> {
    let start = Instant::now();
    let ingest = ingest_integers_from_path(path, options)?;
    let rows = ingest.values.iter().copied().map(Conversion::of).collect();
    Ok(ConversionRun {
        rows,
        invalid: ingest.invalid,
        elapsed: start.elapsed(),
    })
}

/// Result of counting the words of a file.
#[derive(Debug)]
pub struct WordCountRun {
    pub frequencies: WordFrequencies,
    pub diagnostics: Vec<WordDiagnostic>,
    pub elapsed: Duration,
}

impl WordCountRun {
    pub fn report(&self) -> String {
        build_word_count_report(&self.frequencies, &self.diagnostics, self.elapsed)
    }
}

/// Count the distinct words of `path`. Never fails.
pub fn run_word_count(path: impl AsRef<Path>, options: &IngestionOptions) -> WordCountRun {
    let start = Instant::now();
    let ingest = ingest_words_from_path(path, options);
    WordCountRun {
        frequencies: ingest.frequencies,
        diagnostics: ingest.diagnostics,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<PipelineEvent>>,
    }

    impl PipelineObserver for RecordingObserver {
        fn on_event(&self, event: &PipelineEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn stages_run_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.txt");
        std::fs::write(&input, "3 1 2\n2\n").unwrap();

        let obs = Arc::new(RecordingObserver::default());
        let opts = StatisticsOptions {
            observer: Some(obs.clone()),
            ..Default::default()
        };
        let run = run_statistics(&input, &opts);

        assert_eq!(run.sorted.values(), &[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(run.summary.modes, vec![2.0]);

        let events = obs.events.lock().unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], PipelineEvent::RunStarted { input: input.clone() });
        assert_eq!(
            events[1],
            PipelineEvent::IngestFinished {
                lines: 2,
                tokens: 4,
                valid: 4,
                invalid: 0
            }
        );
        assert_eq!(events[2], PipelineEvent::SortFinished { len: 4 });
        assert_eq!(events[3], PipelineEvent::StatisticsFinished { count: 4, modes: 1 });
        assert!(matches!(events[4], PipelineEvent::RunFinished { .. }));
    }

    #[test]
    fn conversion_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ints.txt");
        std::fs::write(&input, "5\nx\n-16\n").unwrap();

        let run = run_conversion(&input, &IngestionOptions::default()).unwrap();
        let values: Vec<i128> = run.rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![5, -16]);
        assert_eq!(run.invalid.len(), 1);
        assert!(run.report().contains("-16\t-10000\t-10\n"));
    }
}
