//! Report building and output.

pub mod format;
pub mod sink;

pub use format::{
    build_conversion_report, build_statistics_report, build_word_count_report, format_number, NOT_AVAILABLE, NO_MODE,
};
pub use sink::{
    emit_report, write_report, write_summary_json, StatisticsDocument, CONVERSION_RESULTS_FILE,
    STATISTICS_RESULTS_FILE, WORD_COUNT_RESULTS_FILE,
};
