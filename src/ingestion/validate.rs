//! Token → [`NumericValue`] validation.

use crate::error::ValidationError;
use crate::types::NumericValue;

/// Parse `token` as a finite decimal.
///
/// `"nan"`, `"inf"`, `"-infinity"` and overflowing literals such as `"1e999"` all parse as
/// `f64`, so they are rejected explicitly after parsing.
pub fn parse_numeric(token: &str) -> Result<NumericValue, ValidationError> {
    let value = token
        .parse::<f64>()
        .map_err(|source| ValidationError::Unparseable {
            token: token.to_owned(),
            source,
        })?;

    if value.is_nan() {
        return Err(ValidationError::NotANumber {
            token: token.to_owned(),
        });
    }

    NumericValue::new(value).ok_or_else(|| ValidationError::Infinite {
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_numeric;
    use crate::error::ValidationError;

    #[test]
    fn accepts_plain_and_scientific_decimals() {
        assert_eq!(parse_numeric("42").unwrap().get(), 42.0);
        assert_eq!(parse_numeric("-0.5").unwrap().get(), -0.5);
        assert_eq!(parse_numeric("+1.25e2").unwrap().get(), 125.0);
    }

    #[test]
    fn rejects_nan_spellings() {
        for t in ["nan", "NaN", "-nan"] {
            assert!(matches!(parse_numeric(t), Err(ValidationError::NotANumber { .. })), "{t}");
        }
    }

    #[test]
    fn rejects_infinities_including_overflow() {
        for t in ["inf", "-inf", "Infinity", "1e999"] {
            let err = parse_numeric(t).unwrap_err();
            assert!(matches!(err, ValidationError::Infinite { .. }), "{t}");
            assert_eq!(err.to_string(), "Inf not allowed");
        }
    }

    #[test]
    fn rejects_garbage_with_parse_reason() {
        let err = parse_numeric("abc").unwrap_err();
        assert_eq!(err.token(), "abc");
        assert!(matches!(err, ValidationError::Unparseable { .. }));
        assert!(!err.to_string().is_empty());
    }
}
