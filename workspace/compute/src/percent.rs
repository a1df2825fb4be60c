use tracing::trace;

use crate::error::{ComputeError, Result};

/// Parses a percent string like `"+15%"`, `"-8%"` or `"12"` into its signed
/// numeric value.
///
/// The trailing percent sign is optional and surrounding whitespace is
/// ignored. The sign is preserved exactly as written.
pub fn parse_signed_percent(value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    numeric.parse::<f64>().map_err(|_| {
        trace!(value, "percent value failed to parse");
        ComputeError::MalformedPercent(value.to_string())
    })
}

/// Whether a predicted change reads as a gain.
///
/// Gain styling keys off the literal `+` marker in the rendered string, not
/// the parsed numeric sign. The two differ for malformed or zero values and
/// the marker convention is the one the dashboard has always used.
pub fn is_gain(value: &str) -> bool {
    value.contains('+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_signed_values() {
        assert_eq!(parse_signed_percent("+15%").unwrap(), 15.0);
        assert_eq!(parse_signed_percent("-8%").unwrap(), -8.0);
        assert_eq!(parse_signed_percent("+15").unwrap(), 15.0);
        assert_eq!(parse_signed_percent("-8").unwrap(), -8.0);
    }

    #[test]
    fn test_parses_unsigned_and_fractional_values() {
        assert_eq!(parse_signed_percent("12").unwrap(), 12.0);
        assert_eq!(parse_signed_percent("85%").unwrap(), 85.0);
        assert_eq!(parse_signed_percent("+15.5%").unwrap(), 15.5);
        assert_eq!(parse_signed_percent(" 7 % ").unwrap(), 7.0);
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(matches!(
            parse_signed_percent("abc"),
            Err(ComputeError::MalformedPercent(_))
        ));
        assert!(matches!(
            parse_signed_percent(""),
            Err(ComputeError::MalformedPercent(_))
        ));
        assert!(matches!(
            parse_signed_percent("%"),
            Err(ComputeError::MalformedPercent(_))
        ));
    }

    #[test]
    fn test_gain_follows_plus_marker_not_parsed_sign() {
        assert!(is_gain("+15%"));
        assert!(!is_gain("-8%"));
        assert!(!is_gain("15%"));
        // Malformed values still style by marker.
        assert!(is_gain("+n/a"));
        assert!(!is_gain("0%"));
    }
}
