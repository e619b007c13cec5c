//! Display formatting and input validation at the UI boundary.

use crate::core::catalog::{self, Category};
use crate::shared::error::{ConversionError, ConversionResult};

use super::Converted;

/// Rendered in place of a numeral outside 1..=3999.
pub const OUT_OF_RANGE: &str = "Out of range";
/// Rendered for NaN and any other failed conversion.
pub const ERROR_TEXT: &str = "Error";

pub const DEFAULT_DECIMAL_PLACES: usize = 2;
pub const MAX_DECIMAL_PLACES: usize = 10;

/// Fixed-point rendering with `places` decimals. NaN renders as "Error".
pub fn format_value(value: f64, places: usize) -> String {
    if value.is_nan() {
        return ERROR_TEXT.to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }
    format!("{:.*}", places.min(MAX_DECIMAL_PLACES), value)
}

/// Render a conversion outcome the way the result panel shows it.
pub fn format_result(result: &ConversionResult<Converted>, places: usize) -> String {
    match result {
        Ok(Converted::Number(value)) => format_value(*value, places),
        Ok(Converted::Numeral(numeral)) => numeral.clone(),
        Err(ConversionError::RomanOutOfRange(_)) => OUT_OF_RANGE.to_string(),
        Err(_) => ERROR_TEXT.to_string(),
    }
}

fn add_thousands_separators(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}

/// Thousands separators, at most two decimals, trailing zeros stripped.
/// 130000.0 -> "130,000", 12.5 -> "12.5", 12.567 -> "12.57"
pub fn format_compact(value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        return format_value(value, 0);
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let fraction = fraction.trim_end_matches('0');

    // "-0.00" collapses to "0"
    let sign = if integer == "0" && fraction.is_empty() { "" } else { sign };

    if fraction.is_empty() {
        format!("{}{}", sign, add_thousands_separators(integer))
    } else {
        format!("{}{}.{}", sign, add_thousands_separators(integer), fraction)
    }
}

/// Reject input the converter form refuses to submit.
pub fn validate_input(value: f64, category: Category, from_unit: &str) -> ConversionResult<()> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidInput("Please enter a valid number".to_string()));
    }
    if value >= 0.0 {
        return Ok(());
    }
    match category {
        Category::Temperature if catalog::resolve(category, from_unit).is_some_and(|u| u.code == "K") => Err(
            ConversionError::InvalidInput("Kelvin cannot be negative".to_string()),
        ),
        Category::Data | Category::Frequency | Category::Energy => Err(
            ConversionError::InvalidInput("Value cannot be negative".to_string()),
        ),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_decimal_places() {
        assert_eq!(format_value(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_value(2.0 / 3.0, 0), "1");
        assert_eq!(format_value(1.609344, 4), "1.6093");
        assert_eq!(format_value(f64::NAN, 2), "Error");
        assert_eq!(format_value(f64::INFINITY, 2), "∞");
    }

    #[test]
    fn test_format_result_sentinels() {
        assert_eq!(format_result(&Err(ConversionError::RomanOutOfRange(0)), 2), "Out of range");
        assert_eq!(
            format_result(&Err(ConversionError::InvalidNumeral("Q".into())), 2),
            "Error"
        );
        assert_eq!(format_result(&Ok(Converted::Numeral("XII".into())), 2), "XII");
        assert_eq!(format_result(&Ok(Converted::Number(0.5)), 3), "0.500");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(130000.0), "130,000");
        assert_eq!(format_compact(12.5), "12.5");
        assert_eq!(format_compact(12.567), "12.57");
        assert_eq!(format_compact(-1234.5), "-1,234.5");
        assert_eq!(format_compact(-0.001), "0");
        assert_eq!(format_compact(999.999), "1,000");
    }

    #[test]
    fn test_validate_input() {
        assert!(validate_input(-40.0, Category::Temperature, "C").is_ok());
        assert!(validate_input(-1.0, Category::Temperature, "K").is_err());
        assert!(validate_input(-1.0, Category::Temperature, "kelvin").is_err());
        assert!(validate_input(-1.0, Category::Data, "MB").is_err());
        assert!(validate_input(-1.0, Category::Length, "m").is_ok());
        assert!(validate_input(f64::NAN, Category::Length, "m").is_err());
    }
}
