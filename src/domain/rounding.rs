use std::fmt;

/// Ceiling-round a value to two decimal places: the smallest multiple
/// of 0.01 that is >= the input. This is not banker's rounding;
/// 12.001 becomes 12.01 and -2.401 becomes -2.40.
///
/// Every figure in a report goes through this before display or
/// accumulation, so aggregates are sums of rounded parts.
pub fn round_up(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}

/// Format a liter (or km) figure with two decimals for reports.
/// Example: 20.4 -> "20.40", -2.4 -> "-2.40"
pub fn format_liters(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse a counter reading from user input.
/// Accepts a comma as the decimal separator ("12,5" == "12.5"), since
/// dashboards in comma-decimal locales are the common source of these
/// numbers.
pub fn parse_reading(input: &str) -> Result<f64, ParseReadingError> {
    let normalized = input.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| ParseReadingError::InvalidNumber(input.trim().to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseReadingError {
    InvalidNumber(String),
}

impl fmt::Display for ParseReadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseReadingError::InvalidNumber(input) => {
                write!(f, "invalid numeric reading: '{}'", input)
            }
        }
    }
}

impl std::error::Error for ParseReadingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_exact_hundredths() {
        assert_eq!(round_up(12.0), 12.0);
        assert_eq!(round_up(12.01), 12.01);
        assert_eq!(round_up(4.6), 4.6);
        assert_eq!(round_up(0.0), 0.0);
        assert_eq!(round_up(100.0), 100.0);
    }

    #[test]
    fn test_round_up_always_rounds_towards_positive() {
        assert_eq!(round_up(12.001), 12.01);
        assert_eq!(round_up(15.2256), 15.23);
        assert_eq!(round_up(-2.401), -2.4);
        assert_eq!(round_up(-2.4), -2.4);
    }

    #[test]
    fn test_round_up_bounds() {
        for value in [3.14159, -7.77, 0.001, 123.456, -0.009] {
            let rounded = round_up(value);
            assert!(rounded >= value);
            assert!(rounded - value < 0.01);
        }
    }

    #[test]
    fn test_round_up_idempotent() {
        for value in [12.001, 4.6, -2.401, 0.0, 15.2256] {
            let once = round_up(value);
            assert_eq!(round_up(once), once);
        }
    }

    #[test]
    fn test_format_liters() {
        assert_eq!(format_liters(20.4), "20.40");
        assert_eq!(format_liters(0.0), "0.00");
        assert_eq!(format_liters(-2.4), "-2.40");
        assert_eq!(format_liters(123.456), "123.46");
    }

    #[test]
    fn test_parse_reading() {
        assert_eq!(parse_reading("12.5"), Ok(12.5));
        assert_eq!(parse_reading("12,5"), Ok(12.5));
        assert_eq!(parse_reading("  1200 "), Ok(1200.0));
        assert_eq!(parse_reading("-3,25"), Ok(-3.25));
    }

    #[test]
    fn test_parse_reading_invalid() {
        assert!(parse_reading("abc").is_err());
        assert!(parse_reading("12.5.3").is_err());
        assert!(parse_reading("").is_err());
    }
}
