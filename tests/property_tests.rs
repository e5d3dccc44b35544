//! Property-based tests for ingestion and statistics.
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```

use proptest::prelude::*;

use rust_file_statistics::ingestion::{ingest_numbers_from_reader, tokenize};
use rust_file_statistics::processing::{merge_sort, newton_sqrt, StatisticsSummary};

/// Lines mixing numbers, junk and every separator.
fn numeric_text() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        any::<i32>().prop_map(|v| v.to_string()),
        (-1.0e6f64..1.0e6).prop_map(|v| format!("{v}")),
        "[a-z]{1,5}",
        Just("nan".to_owned()),
        Just("-inf".to_owned()),
        Just("1e999".to_owned()),
    ];
    let sep = prop_oneof![Just(","), Just(" "), Just("\t"), Just(", "), Just(",,")];
    let line = prop::collection::vec((token, sep), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(t, s)| format!("{t}{s}"))
            .collect::<String>()
    });
    prop::collection::vec(line, 0..20).prop_map(|lines| lines.join("\n"))
}

proptest! {
    /// The sorted output is an ordered permutation of the input.
    #[test]
    fn merge_sort_is_an_ordered_permutation(values in prop::collection::vec(-1.0e9f64..1.0e9, 0..300)) {
        let sorted = merge_sort(&values);

        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = values.clone();
        expected.sort_by(|a, b| a.total_cmp(b));
        prop_assert_eq!(sorted, expected);
    }

    /// Every scanned token is counted exactly once as valid or invalid.
    #[test]
    fn valid_plus_invalid_is_total(text in numeric_text()) {
        let ingest = ingest_numbers_from_reader(text.as_bytes()).unwrap();

        prop_assert_eq!(ingest.valid_count() + ingest.invalid_count(), ingest.total_tokens);
        prop_assert!(ingest.dataset.values().iter().all(|v| v.is_finite()));
    }

    /// Tokens never contain separators and are never empty.
    #[test]
    fn tokens_are_nonempty_and_separator_free(line in "[0-9a-z,. \\t-]{0,80}") {
        for token in tokenize(&line) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(',') && !token.chars().any(char::is_whitespace));
        }
    }

    /// The Newton root squares back to its input.
    #[test]
    fn newton_sqrt_squares_back(v in 0.0f64..1.0e12) {
        let r = newton_sqrt(v).unwrap();
        prop_assert!((r * r - v).abs() <= 1e-9 * v.max(1.0));
    }

    /// Summary statistics stay inside the data range and variance is non-negative.
    #[test]
    fn statistics_stay_in_range(values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)) {
        let text = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        let ingest = ingest_numbers_from_reader(text.as_bytes()).unwrap();
        let sorted = ingest.dataset.sorted();
        let s = StatisticsSummary::compute(&ingest.dataset, &sorted);

        let lo = sorted.values()[0];
        let hi = sorted.values()[sorted.len() - 1];
        let mean = s.mean.unwrap();
        let median = s.median.unwrap();
        prop_assert!(mean >= lo - 1e-6 && mean <= hi + 1e-6);
        prop_assert!(median >= lo && median <= hi);
        prop_assert!(s.variance.unwrap() >= 0.0);
        prop_assert!(s.modes.iter().all(|m| sorted.values().contains(m)));
    }
}
