use std::path::PathBuf;
use std::time::Duration;

/// Stage events emitted while a statistics run progresses.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    RunStarted { input: PathBuf },
    IngestFinished { lines: usize, tokens: usize, valid: usize, invalid: usize },
    SortFinished { len: usize },
    StatisticsFinished { count: usize, modes: usize },
    RunFinished { elapsed: Duration },
}

/// Observer hook for pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// A simple stderr logger for pipeline events.
#[derive(Debug, Default)]
pub struct StdErrPipelineObserver;

impl PipelineObserver for StdErrPipelineObserver {
    fn on_event(&self, event: &PipelineEvent) {
        eprintln!("[pipeline] {event:?}");
    }
}
