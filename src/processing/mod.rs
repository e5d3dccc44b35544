//! In-memory computations over ingested data.
//!
//! Currently implemented:
//!
//! - [`merge_sort()`]: stable merge sort used for the median and the mode list
//! - [`stats`]: mean, median, modes, population variance, Newton-Raphson standard deviation
//! - [`convert`]: integer to binary / hexadecimal by repeated division
//! - [`frequency`]: word frequency table
//!
//! ## Example: sort → statistics
//!
//! ```rust
//! use rust_file_statistics::processing::StatisticsSummary;
//! use rust_file_statistics::types::{Dataset, NumericValue};
//!
//! let ds: Dataset = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
//!     .into_iter()
//!     .filter_map(NumericValue::new)
//!     .collect();
//! let sorted = ds.sorted();
//!
//! let s = StatisticsSummary::compute(&ds, &sorted);
//! assert_eq!(s.mean, Some(5.0));
//! assert_eq!(s.median, Some(4.5));
//! assert_eq!(s.modes, vec![4.0]);
//! assert_eq!(s.variance, Some(4.0));
//! assert!((s.standard_deviation.unwrap() - 2.0).abs() < 1e-9);
//! ```

pub mod convert;
pub mod frequency;
pub mod sort;
pub mod stats;

pub use convert::{to_binary, to_hexadecimal, Conversion};
pub use frequency::WordFrequencies;
pub use sort::merge_sort;
pub use stats::{mean, median, modes, newton_sqrt, standard_deviation, variance, StatisticsSummary};
