//! Roman numeral rendering and parsing.

use crate::shared::error::{ConversionError, ConversionResult};

pub const MIN_ROMAN: i64 = 1;
pub const MAX_ROMAN: i64 = 3999;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Render `n` with the greedy subtractive algorithm. Valid for 1..=3999.
pub fn to_roman(n: i64) -> ConversionResult<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&n) {
        return Err(ConversionError::RomanOutOfRange(n));
    }

    let mut remaining = n;
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(out)
}

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse a numeral with subtractive notation: a symbol smaller than its
/// successor is subtracted. Non-canonical forms such as `IIII` are summed
/// rather than rejected.
pub fn from_roman(numeral: &str) -> ConversionResult<u32> {
    let trimmed = numeral.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidNumeral(numeral.to_string()));
    }

    let values = trimmed
        .chars()
        .map(|c| symbol_value(c.to_ascii_uppercase()))
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| ConversionError::InvalidNumeral(numeral.to_string()))?;

    let mut total: i64 = 0;
    for (i, current) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if current < next => total -= i64::from(*current),
            _ => total += i64::from(*current),
        }
    }
    u32::try_from(total).map_err(|_| ConversionError::InvalidNumeral(numeral.to_string()))
}
