//! Free-text conversion queries: "12 km to mi", "-40 C in F", "3.5 lbs".

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::catalog::{self, Category};
use crate::shared::error::{ConversionError, ConversionResult};

const ERR_CANNOT_PARSE_UNIT: &str = "Could not parse unit from text";

// Compile-time constant patterns
static RE_WITH_TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*([+-]?(?:\d[\d,]*(?:\.\d+)?|\.\d+))\s*(.+?)\s*(?:\s(?:to|in|into|as)\s|->|→|=)\s*(.+?)\s*$",
    )
    .expect("Failed to compile query pattern")
});

static RE_AMOUNT_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*([+-]?(?:\d[\d,]*(?:\.\d+)?|\.\d+))\s*(.+?)\s*$")
        .expect("Failed to compile amount pattern")
});

static RE_THOUSANDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?\d{1,3}(?:,\d{3})+(?:\.\d+)?$").expect("Failed to compile thousands pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub amount: f64,
    pub category: Category,
    pub from: &'static str,
    pub to: Option<&'static str>,
}

/// Parse a number, treating `1,000` as a thousands separator and `1,5` as
/// a decimal comma.
pub fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let normalized = if RE_THOUSANDS.is_match(raw) {
        raw.replace(',', "")
    } else {
        raw.replace(',', ".")
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a query into amount, category and unit codes. The category is the
/// first one, in catalog order, that knows both units.
pub fn parse_query(text: &str) -> ConversionResult<ParsedQuery> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::InvalidInput("Empty text".to_string()));
    }

    let (amount_raw, from_raw, to_raw) = if let Some(caps) = RE_WITH_TARGET.captures(text) {
        (caps[1].to_string(), caps[2].to_string(), Some(caps[3].to_string()))
    } else if let Some(caps) = RE_AMOUNT_ONLY.captures(text) {
        (caps[1].to_string(), caps[2].to_string(), None)
    } else {
        debug!("[parse_query] no amount in '{}'", text);
        return Err(ConversionError::InvalidInput(format!("{}: {}", ERR_CANNOT_PARSE_UNIT, text)));
    };

    let amount = parse_number(&amount_raw)
        .ok_or_else(|| ConversionError::InvalidInput(format!("Invalid number: {}", amount_raw)))?;

    let candidates: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| catalog::resolve(*c, &from_raw).is_some())
        .collect();

    let Some(first) = candidates.first().copied() else {
        debug!("[parse_query] unknown source unit '{}'", from_raw);
        return Err(ConversionError::InvalidInput(format!("{}: {}", ERR_CANNOT_PARSE_UNIT, text)));
    };

    let parsed = match to_raw {
        None => ParsedQuery {
            amount,
            category: first,
            from: resolved_code(first, &from_raw)?,
            to: None,
        },
        Some(to_raw) => {
            let category = candidates
                .iter()
                .copied()
                .find(|c| catalog::resolve(*c, &to_raw).is_some())
                .ok_or_else(|| ConversionError::UnknownUnit {
                    category: first,
                    unit: to_raw.clone(),
                })?;
            ParsedQuery {
                amount,
                category,
                from: resolved_code(category, &from_raw)?,
                to: Some(resolved_code(category, &to_raw)?),
            }
        }
    };

    debug!(
        "[parse_query] '{}' -> {} {} -> {:?} ({})",
        text, parsed.amount, parsed.from, parsed.to, parsed.category
    );
    Ok(parsed)
}

fn resolved_code(category: Category, raw: &str) -> ConversionResult<&'static str> {
    catalog::resolve(category, raw)
        .map(|u| u.code)
        .ok_or_else(|| ConversionError::UnknownUnit {
            category,
            unit: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("1,000"), Some(1000.0));
        assert_eq!(parse_number("1,234,567.5"), Some(1234567.5));
        assert_eq!(parse_number("1,5"), Some(1.5));
        assert_eq!(parse_number("-.5"), Some(-0.5));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn test_parse_query_with_target() {
        let parsed = parse_query("12 km to mi").unwrap();
        assert_eq!(parsed.amount, 12.0);
        assert_eq!(parsed.category, Category::Length);
        assert_eq!(parsed.from, "km");
        assert_eq!(parsed.to, Some("mi"));
    }

    #[test]
    fn test_parse_query_inches_versus_connector() {
        let parsed = parse_query("12 in to cm").unwrap();
        assert_eq!((parsed.from, parsed.to), ("in", Some("cm")));

        let parsed = parse_query("3 ft in m").unwrap();
        assert_eq!((parsed.from, parsed.to), ("ft", Some("m")));

        let parsed = parse_query("5 in").unwrap();
        assert_eq!((parsed.from, parsed.to), ("in", None));
    }

    #[test]
    fn test_parse_query_arrow_and_aliases() {
        let parsed = parse_query("-40 celsius -> °F").unwrap();
        assert_eq!(parsed.amount, -40.0);
        assert_eq!(parsed.category, Category::Temperature);
        assert_eq!((parsed.from, parsed.to), ("C", Some("F")));

        let parsed = parse_query("2 fluid ounces = ml").unwrap();
        assert_eq!(parsed.category, Category::Volume);
        assert_eq!((parsed.from, parsed.to), ("floz", Some("ml")));
    }

    #[test]
    fn test_parse_query_picks_category_knowing_both_units() {
        // "psi" exists in pressure and tire; "atm" only in pressure
        let parsed = parse_query("30 psi to atm").unwrap();
        assert_eq!(parsed.category, Category::Pressure);

        let parsed = parse_query("10 mph to Bf").unwrap();
        assert_eq!(parsed.category, Category::Wind);
        assert_eq!(parsed.to, Some("Bf"));
    }

    #[test]
    fn test_parse_query_without_target() {
        let parsed = parse_query("3.5 lbs").unwrap();
        assert_eq!(parsed.category, Category::Weight);
        assert_eq!(parsed.from, "lb");
        assert_eq!(parsed.to, None);
    }

    #[test]
    fn test_parse_query_errors() {
        assert!(matches!(parse_query(""), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_query("km to mi"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(parse_query("12 furlongs"), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(
            parse_query("12 km to parsecs"),
            Err(ConversionError::UnknownUnit { category: Category::Length, .. })
        ));
    }
}
