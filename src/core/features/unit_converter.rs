//! Conversion engine
//!
//! Every category maps to exactly one [`Converter`] variant, so adding a
//! category without a handler is a compile error. Unit codes are resolved
//! through the catalog before dispatch; handlers only ever see canonical
//! codes.

use std::sync::Arc;

use enum_dispatch::enum_dispatch;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::core::catalog::{self, Category};
use crate::core::features::currency::RateTable;
use crate::shared::error::{AppError, AppResult, ConversionError, ConversionResult};
use crate::shared::types::{
    ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, ParseUnitResponse, UnitDto,
};

pub mod format;
pub mod parsing;
pub mod roman;
mod tables;

use tables::{PairEntry, BEAUFORT_COEFFICIENT, BEAUFORT_MAX, MPG_L100KM, MPG_TO_KML};

/// Outcome of a conversion: a number, or a numeral for the `roman` category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum Converted {
    Number(f64),
    Numeral(String),
}

impl Converted {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Converted::Number(v) => Some(*v),
            Converted::Numeral(_) => None,
        }
    }

    pub fn format(&self, places: usize) -> String {
        match self {
            Converted::Number(v) => format::format_value(*v, places),
            Converted::Numeral(s) => s.clone(),
        }
    }
}

// ============================================================================
// Per-category handlers
// ============================================================================

#[enum_dispatch]
pub trait UnitConversion {
    /// Convert between two canonical, distinct unit codes of one category.
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted>;
}

#[enum_dispatch(UnitConversion)]
#[derive(Debug, Clone)]
pub enum Converter {
    Linear(LinearScale),
    Temperature(TemperatureScale),
    Fuel(FuelEconomy),
    Pairwise(PairTable),
    Wind(WindScale),
    Roman(RomanNumerals),
    Currency(CurrencyRates),
}

fn unsupported(category: Category, from: &str, to: &str) -> ConversionError {
    ConversionError::UnsupportedPair {
        category,
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// `value * factor(from) / factor(to)`
#[derive(Debug, Clone)]
pub struct LinearScale {
    category: Category,
    factors: &'static [(&'static str, f64)],
}

impl LinearScale {
    fn factor(&self, code: &str) -> Option<f64> {
        self.factors.iter().find(|(c, _)| *c == code).map(|(_, f)| *f)
    }
}

impl UnitConversion for LinearScale {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        let (Some(from_factor), Some(to_factor)) = (self.factor(from), self.factor(to)) else {
            return Err(unsupported(self.category, from, to));
        };
        Ok(Converted::Number(value * from_factor / to_factor))
    }
}

#[derive(Debug, Clone)]
pub struct TemperatureScale;

impl UnitConversion for TemperatureScale {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        let result = match (from, to) {
            ("C", "F") => value * 1.8 + 32.0,
            ("C", "K") => value + 273.15,
            ("F", "C") => (value - 32.0) / 1.8,
            ("F", "K") => (value + 459.67) / 1.8,
            ("K", "C") => value - 273.15,
            ("K", "F") => value * 1.8 - 459.67,
            _ => return Err(unsupported(Category::Temperature, from, to)),
        };
        Ok(Converted::Number(result))
    }
}

/// L/100km and mpg/km/L are reciprocal; mpg and km/L are proportional.
#[derive(Debug, Clone)]
pub struct FuelEconomy;

impl FuelEconomy {
    fn reciprocal(value: f64, k: f64, from: &str, to: &str) -> ConversionResult<f64> {
        if value == 0.0 {
            return Err(ConversionError::DivisionByZero {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(k / value)
    }
}

impl UnitConversion for FuelEconomy {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        let result = match (from, to) {
            ("L/100km", "mpg") | ("mpg", "L/100km") => {
                Self::reciprocal(value, MPG_L100KM, from, to)?
            }
            ("L/100km", "km/L") | ("km/L", "L/100km") => Self::reciprocal(value, 100.0, from, to)?,
            ("mpg", "km/L") => value * MPG_TO_KML,
            ("km/L", "mpg") => value / MPG_TO_KML,
            _ => return Err(unsupported(Category::Fuel, from, to)),
        };
        Ok(Converted::Number(result))
    }
}

/// Closed table of directed pair constants.
#[derive(Debug, Clone)]
pub struct PairTable {
    category: Category,
    entries: &'static [PairEntry],
}

impl PairTable {
    fn lookup(&self, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
        self.entries
            .iter()
            .find(|(f, t, _)| *f == from && *t == to)
            .map(|(_, _, op)| op.apply(value))
            .ok_or_else(|| unsupported(self.category, from, to))
    }
}

impl UnitConversion for PairTable {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        self.lookup(value, from, to).map(Converted::Number)
    }
}

/// Wind speeds through the pair table, plus the Beaufort scale via m/s.
#[derive(Debug, Clone)]
pub struct WindScale {
    speeds: PairTable,
}

impl WindScale {
    const BEAUFORT: &'static str = "Bf";
    const METERS_PER_SECOND: &'static str = "m/s";

    fn out_of_domain(value: f64) -> ConversionError {
        ConversionError::OutOfDomain {
            category: Category::Wind,
            value,
        }
    }

    fn from_beaufort(b: f64) -> ConversionResult<f64> {
        if b < 0.0 {
            return Err(Self::out_of_domain(b));
        }
        Ok(BEAUFORT_COEFFICIENT * b.min(BEAUFORT_MAX).powf(1.5))
    }

    fn to_beaufort(meters_per_second: f64) -> ConversionResult<f64> {
        if meters_per_second < 0.0 {
            return Err(Self::out_of_domain(meters_per_second));
        }
        Ok((meters_per_second / BEAUFORT_COEFFICIENT)
            .powf(2.0 / 3.0)
            .min(BEAUFORT_MAX))
    }

    fn to_meters_per_second(&self, value: f64, from: &str) -> ConversionResult<f64> {
        if from == Self::METERS_PER_SECOND {
            Ok(value)
        } else {
            self.speeds.lookup(value, from, Self::METERS_PER_SECOND)
        }
    }
}

impl UnitConversion for WindScale {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        let result = if from == Self::BEAUFORT {
            let mps = Self::from_beaufort(value)?;
            if to == Self::METERS_PER_SECOND {
                mps
            } else {
                self.speeds.lookup(mps, Self::METERS_PER_SECOND, to)?
            }
        } else if to == Self::BEAUFORT {
            Self::to_beaufort(self.to_meters_per_second(value, from)?)?
        } else {
            self.speeds.lookup(value, from, to)?
        };
        Ok(Converted::Number(result))
    }
}

/// `decimal -> roman` renders the rounded value. `roman -> decimal` expects
/// the numeral already decoded (see [`ConversionEngine::convert_text`]).
#[derive(Debug, Clone)]
pub struct RomanNumerals;

impl UnitConversion for RomanNumerals {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        match (from, to) {
            ("decimal", "roman") => {
                if !value.is_finite() {
                    return Err(ConversionError::InvalidInput(format!(
                        "Invalid number: {}",
                        value
                    )));
                }
                roman::to_roman(value.round() as i64).map(Converted::Numeral)
            }
            ("roman", "decimal") => Ok(Converted::Number(value)),
            _ => Err(unsupported(Category::Roman, from, to)),
        }
    }
}

/// `value * rate` against an injected rate snapshot.
#[derive(Debug, Clone)]
pub struct CurrencyRates {
    rates: Option<Arc<RateTable>>,
}

impl UnitConversion for CurrencyRates {
    fn convert(&self, value: f64, from: &str, to: &str) -> ConversionResult<Converted> {
        let rate = self
            .rates
            .as_ref()
            .and_then(|table| table.cross_rate(from, to))
            .and_then(|rate| rate.to_f64())
            .ok_or_else(|| ConversionError::RateUnavailable {
                from: from.to_string(),
                to: to.to_string(),
            })?;
        Ok(Converted::Number(value * rate))
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Stateless apart from the optional currency snapshot; cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    rates: Option<Arc<RateTable>>,
}

impl ConversionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: Arc<RateTable>) -> Self {
        Self { rates: Some(rates) }
    }

    pub fn set_rates(&mut self, rates: Arc<RateTable>) {
        self.rates = Some(rates);
    }

    pub fn rates(&self) -> Option<&RateTable> {
        self.rates.as_deref()
    }

    fn converter(&self, category: Category) -> Converter {
        let linear = |category| {
            let factors = tables::linear_factors(category).unwrap_or(&[]);
            Converter::from(LinearScale { category, factors })
        };
        let pairs = |category, entries| Converter::from(PairTable { category, entries });

        match category {
            Category::Length
            | Category::Weight
            | Category::Area
            | Category::Volume
            | Category::Time
            | Category::Speed
            | Category::Data
            | Category::Pressure
            | Category::Angle
            | Category::Energy
            | Category::Power
            | Category::Force
            | Category::Frequency => linear(category),
            Category::Temperature => TemperatureScale.into(),
            Category::Fuel => FuelEconomy.into(),
            Category::Resolution => pairs(category, tables::RESOLUTION),
            Category::Bmi => pairs(category, tables::BMI),
            Category::Clothing => pairs(category, tables::CLOTHING),
            Category::Shoe => pairs(category, tables::SHOE),
            Category::Tire => pairs(category, tables::TIRE),
            Category::Wind => WindScale {
                speeds: PairTable {
                    category,
                    entries: tables::WIND,
                },
            }
            .into(),
            Category::Roman => RomanNumerals.into(),
            Category::Currency => CurrencyRates {
                rates: self.rates.clone(),
            }
            .into(),
        }
    }

    /// Convert `value` from one unit to another within `category`.
    ///
    /// Equal unit strings return `value` untouched without resolving them.
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Category,
    ) -> ConversionResult<Converted> {
        if from == to {
            return Ok(Converted::Number(value));
        }

        let resolve = |code: &str| {
            catalog::resolve(category, code).ok_or_else(|| ConversionError::UnknownUnit {
                category,
                unit: code.to_string(),
            })
        };
        let from_unit = resolve(from)?;
        let to_unit = resolve(to)?;
        if from_unit.code == to_unit.code {
            return Ok(Converted::Number(value));
        }

        let result = self
            .converter(category)
            .convert(value, from_unit.code, to_unit.code);
        debug!(
            "[ConversionEngine] {} {} -> {} ({}): {:?}",
            value, from_unit.code, to_unit.code, category, result
        );
        result
    }

    /// Like [`convert`](Self::convert), but an unknown unit yields the input
    /// value instead of an error.
    pub fn convert_lenient(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: Category,
    ) -> ConversionResult<Converted> {
        match self.convert(value, from, to, category) {
            Err(ConversionError::UnknownUnit { unit, .. }) => {
                debug!("[ConversionEngine] unknown unit '{}', passing value through", unit);
                Ok(Converted::Number(value))
            }
            other => other,
        }
    }

    /// Convert raw form input. A `roman` source unit takes a numeral; every
    /// other unit takes a number (thousands separators allowed).
    pub fn convert_text(
        &self,
        text: &str,
        from: &str,
        to: &str,
        category: Category,
    ) -> ConversionResult<Converted> {
        let numeral_input = category == Category::Roman
            && catalog::resolve(category, from).is_some_and(|u| u.code == "roman");

        if numeral_input {
            let decoded = roman::from_roman(text)?;
            if from == to {
                return Ok(Converted::Numeral(text.trim().to_ascii_uppercase()));
            }
            return self.convert(f64::from(decoded), from, to, category);
        }

        let value = parsing::parse_number(text)
            .ok_or_else(|| ConversionError::InvalidInput(format!("Invalid number: {}", text.trim())))?;
        self.convert(value, from, to, category)
    }

    /// Parse and run a free-text query. Without an explicit target the
    /// category's default counterpart unit is used.
    pub fn convert_query(&self, text: &str) -> ConversionResult<(parsing::ParsedQuery, Converted)> {
        let parsed = parsing::parse_query(text)?;
        let to = parsed.to.unwrap_or_else(|| {
            let (first, second) = catalog::default_units(parsed.category);
            if first.code == parsed.from {
                second.code
            } else {
                first.code
            }
        });
        let result = self.convert(parsed.amount, parsed.from, to, parsed.category)?;
        Ok((
            parsing::ParsedQuery {
                to: Some(to),
                ..parsed
            },
            result,
        ))
    }
}

/// One-shot conversion without currency rates.
pub fn convert(value: f64, from: &str, to: &str, category: Category) -> ConversionResult<Converted> {
    ConversionEngine::new().convert(value, from, to, category)
}

// ============================================================================
// Commands
// ============================================================================

/// Validate, convert and format one converter-form submission.
///
/// An out-of-range numeral is not an error here: the response carries no
/// value and the "Out of range" sentinel as its formatted result.
pub fn convert_units_command(
    engine: &ConversionEngine,
    request: ConvertUnitsRequest,
) -> AppResult<ConvertUnitsResponse> {
    let places = request
        .decimal_places
        .unwrap_or(format::DEFAULT_DECIMAL_PLACES)
        .min(format::MAX_DECIMAL_PLACES);

    let numeral_input = request.category == Category::Roman
        && catalog::resolve(request.category, &request.from_unit).is_some_and(|u| u.code == "roman");
    if !numeral_input {
        let value = parsing::parse_number(&request.value).ok_or_else(|| {
            AppError::Validation(format!("Invalid number: {}", request.value.trim()))
        })?;
        format::validate_input(value, request.category, &request.from_unit)?;
    }

    let outcome = engine.convert_text(
        &request.value,
        &request.from_unit,
        &request.to_unit,
        request.category,
    );
    let formatted_result = format::format_result(&outcome, places);
    let result = match outcome {
        Ok(converted) => Some(converted),
        Err(ConversionError::RomanOutOfRange(_)) => None,
        Err(e) => return Err(e.into()),
    };

    Ok(ConvertUnitsResponse {
        result,
        formatted_result,
        from_unit: request.from_unit,
        to_unit: request.to_unit,
        category: request.category,
    })
}

/// Parse a free-text query such as "12 km to mi".
pub fn parse_text_command(text: &str) -> AppResult<ParseUnitResponse> {
    let parsed = parsing::parse_query(text)?;
    Ok(ParseUnitResponse {
        amount: parsed.amount,
        category: parsed.category,
        from_unit: parsed.from.to_string(),
        to_unit: parsed.to.map(str::to_string),
    })
}

/// Units of one category in selector order, with its default pair.
pub fn get_units_command(category: Category) -> GetUnitsResponse {
    let units = catalog::list_units(category)
        .iter()
        .map(UnitDto::from)
        .collect();
    let (default_from, default_to) = catalog::default_units(category);

    GetUnitsResponse {
        category,
        units,
        default_from: default_from.code.to_string(),
        default_to: default_to.code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    const LINEAR: [Category; 13] = [
        Category::Length,
        Category::Weight,
        Category::Area,
        Category::Volume,
        Category::Time,
        Category::Speed,
        Category::Data,
        Category::Pressure,
        Category::Angle,
        Category::Energy,
        Category::Power,
        Category::Force,
        Category::Frequency,
    ];

    fn number(result: ConversionResult<Converted>) -> f64 {
        result.unwrap().as_f64().unwrap()
    }

    fn usd_rates() -> Arc<RateTable> {
        let rates = HashMap::from([
            ("EUR".to_string(), Decimal::from_str("0.8").unwrap()),
            ("JPY".to_string(), Decimal::from_str("150").unwrap()),
        ]);
        Arc::new(RateTable::new("USD", rates, None, Utc::now()))
    }

    #[test]
    fn test_linear_round_trip_every_pair() {
        for category in LINEAR {
            let units = catalog::list_units(category);
            for a in units {
                for b in units {
                    for x in [1.0, 100.0, 0.001] {
                        let there = number(convert(x, a.code, b.code, category));
                        let back = number(convert(there, b.code, a.code, category));
                        assert_relative_eq!(back, x, max_relative = 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_for_every_unit() {
        let engine = ConversionEngine::new();
        for category in Category::ALL {
            for unit in catalog::list_units(category) {
                assert_eq!(
                    engine.convert(42.5, unit.code, unit.code, category).unwrap(),
                    Converted::Number(42.5),
                    "{} {}",
                    category,
                    unit.code
                );
            }
            // unknown codes and currency without rates still pass through
            assert_eq!(
                engine.convert(7.0, "nope", "nope", category).unwrap(),
                Converted::Number(7.0)
            );
        }
    }

    #[test]
    fn test_identity_through_aliases() {
        assert_eq!(
            convert(3.0, "kg", "kilograms", Category::Weight).unwrap(),
            Converted::Number(3.0)
        );
    }

    #[test]
    fn test_temperature_fixed_points() {
        let t = Category::Temperature;
        assert_eq!(number(convert(0.0, "C", "F", t)), 32.0);
        assert_eq!(number(convert(100.0, "C", "F", t)), 212.0);
        assert_eq!(number(convert(0.0, "C", "K", t)), 273.15);
        assert_eq!(number(convert(32.0, "F", "C", t)), 0.0);
        assert_abs_diff_eq!(number(convert(-40.0, "F", "C", t)), -40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(number(convert(0.0, "K", "F", t)), -459.67, epsilon = 1e-9);
        assert_abs_diff_eq!(number(convert(32.0, "F", "K", t)), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_round_trip() {
        for (a, b) in [("C", "F"), ("C", "K"), ("F", "K")] {
            let there = number(convert(21.5, a, b, Category::Temperature));
            let back = number(convert(there, b, a, Category::Temperature));
            assert_abs_diff_eq!(back, 21.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_length_and_weight() {
        assert_relative_eq!(
            number(convert(1.0, "mi", "km", Category::Length)),
            1.609344,
            max_relative = 1e-12
        );
        assert_eq!(number(convert(1000.0, "m", "km", Category::Length)), 1.0);
        assert_abs_diff_eq!(
            number(convert(1.0, "kg", "lb", Category::Weight)),
            2.20462,
            epsilon = 0.01
        );
    }

    #[test]
    fn test_unknown_unit_is_an_error() {
        let err = convert(1.0, "m", "parsec", Category::Length).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                category: Category::Length,
                unit: "parsec".to_string()
            }
        );
    }

    #[test]
    fn test_lenient_passes_unknown_units_through() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.convert_lenient(5.0, "m", "parsec", Category::Length).unwrap(),
            Converted::Number(5.0)
        );
        assert_eq!(
            engine.convert_lenient(1.0, "km", "m", Category::Length).unwrap(),
            Converted::Number(1000.0)
        );
    }

    #[test]
    fn test_roman_conversions() {
        let engine = ConversionEngine::new();
        let r = Category::Roman;
        assert_eq!(
            engine.convert(1994.0, "decimal", "roman", r).unwrap(),
            Converted::Numeral("MCMXCIV".to_string())
        );
        assert_eq!(
            engine.convert(11.6, "decimal", "roman", r).unwrap(),
            Converted::Numeral("XII".to_string())
        );
        assert_eq!(
            engine.convert(0.0, "decimal", "roman", r),
            Err(ConversionError::RomanOutOfRange(0))
        );
        assert_eq!(
            engine.convert(4000.0, "decimal", "roman", r),
            Err(ConversionError::RomanOutOfRange(4000))
        );
        assert_eq!(
            engine.convert_text("XII", "roman", "decimal", r).unwrap(),
            Converted::Number(12.0)
        );
        assert_eq!(
            engine.convert_text("xii", "roman", "roman", r).unwrap(),
            Converted::Numeral("XII".to_string())
        );
        assert!(matches!(
            engine.convert_text("XIIQ", "roman", "decimal", r),
            Err(ConversionError::InvalidNumeral(_))
        ));
    }

    #[test]
    fn test_numeral_identity_still_validates() {
        let engine = ConversionEngine::new();
        assert!(matches!(
            engine.convert_text("hello", "roman", "roman", Category::Roman),
            Err(ConversionError::InvalidNumeral(_))
        ));
        assert!(matches!(
            engine.convert_text("", "roman", "roman", Category::Roman),
            Err(ConversionError::InvalidNumeral(_))
        ));
    }

    #[test]
    fn test_fuel_reciprocal_identity() {
        let f = Category::Fuel;
        assert_relative_eq!(number(convert(235.215, "L/100km", "mpg", f)), 1.0);
        assert_relative_eq!(number(convert(10.0, "L/100km", "km/L", f)), 10.0);
        assert_relative_eq!(number(convert(20.0, "mpg", "km/L", f)), 8.50288, max_relative = 1e-9);
        assert_relative_eq!(number(convert(8.50288, "km/L", "mpg", f)), 20.0, max_relative = 1e-9);
        assert!(matches!(
            convert(0.0, "mpg", "L/100km", f),
            Err(ConversionError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_pairwise_tables() {
        assert_relative_eq!(number(convert(2.0, "px", "dpi", Category::Resolution)), 50.8);
        assert_relative_eq!(number(convert(300.0, "dpi", "ppi", Category::Resolution)), 300.0 / 25.4);
        assert_relative_eq!(number(convert(254.0, "ppi", "dpi", Category::Resolution)), 10.0);
        assert_relative_eq!(number(convert(30.0, "psi", "kPa", Category::Tire)), 206.85);
        assert_relative_eq!(number(convert(2.0, "bar", "kPa", Category::Tire)), 200.0);
        assert_relative_eq!(number(convert(10.0, "m/s", "km/h", Category::Wind)), 36.0);
        assert_relative_eq!(number(convert(10.0, "US", "EU", Category::Clothing)), 9.144);
    }

    #[test]
    fn test_shoe_eu_uk_is_not_a_round_trip() {
        let uk = number(convert(40.0, "EU", "UK", Category::Shoe));
        let back = number(convert(uk, "UK", "EU", Category::Shoe));
        assert!((back - 40.0).abs() > 1.0);
    }

    #[test]
    fn test_beaufort() {
        let w = Category::Wind;
        assert_abs_diff_eq!(number(convert(0.0, "Bf", "m/s", w)), 0.0);
        assert_relative_eq!(number(convert(4.0, "Bf", "m/s", w)), 6.688, max_relative = 1e-9);
        assert_relative_eq!(number(convert(6.688, "m/s", "Bf", w)), 4.0, max_relative = 1e-9);
        assert_relative_eq!(number(convert(24.0768, "km/h", "Bf", w)), 4.0, max_relative = 1e-9);
        // clamped at hurricane force
        assert_eq!(number(convert(200.0, "m/s", "Bf", w)), 12.0);
        assert_eq!(number(convert(15.0, "Bf", "m/s", w)), number(convert(12.0, "Bf", "m/s", w)));
        assert!(matches!(
            convert(-1.0, "Bf", "m/s", w),
            Err(ConversionError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_currency_needs_rates() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.convert(10.0, "USD", "EUR", Category::Currency),
            Err(ConversionError::RateUnavailable {
                from: "USD".to_string(),
                to: "EUR".to_string()
            })
        );

        let engine = ConversionEngine::with_rates(usd_rates());
        assert_relative_eq!(number(engine.convert(10.0, "usd", "EUR", Category::Currency)), 8.0);
        assert_relative_eq!(number(engine.convert(8.0, "EUR", "JPY", Category::Currency)), 1500.0);
    }

    #[test]
    fn test_every_listed_pair_converts() {
        let engine = ConversionEngine::with_rates(usd_rates());
        let has_rate = |code: &str| engine.rates().and_then(|t| t.rate(code)).is_some();
        for category in Category::ALL {
            let units = catalog::list_units(category);
            for a in units {
                for b in units {
                    if category == Category::Currency && !(has_rate(a.code) && has_rate(b.code)) {
                        continue;
                    }
                    let value = if a.code == "roman" { 1.0 } else { 5.0 };
                    let result = engine.convert(value, a.code, b.code, category);
                    assert!(result.is_ok(), "{} {} -> {}: {:?}", category, a.code, b.code, result);
                }
            }
        }
    }

    #[test]
    fn test_convert_text_accepts_separators() {
        let engine = ConversionEngine::new();
        assert_eq!(
            engine.convert_text("1,000", "m", "km", Category::Length).unwrap(),
            Converted::Number(1.0)
        );
        assert!(matches!(
            engine.convert_text("ten", "m", "km", Category::Length),
            Err(ConversionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_convert_query() {
        let engine = ConversionEngine::new();
        let (parsed, result) = engine.convert_query("1000 m to km").unwrap();
        assert_eq!(parsed.category, Category::Length);
        assert_eq!(result, Converted::Number(1.0));

        let (parsed, _) = engine.convert_query("20 C").unwrap();
        assert_eq!(parsed.to, Some("F"));
        let (parsed, _) = engine.convert_query("20 F").unwrap();
        assert_eq!(parsed.to, Some("C"));
    }

    #[test]
    fn test_convert_units_command() {
        let engine = ConversionEngine::new();
        let request = ConvertUnitsRequest {
            value: "1".to_string(),
            from_unit: "mi".to_string(),
            to_unit: "km".to_string(),
            category: Category::Length,
            decimal_places: Some(4),
        };
        let response = convert_units_command(&engine, request).unwrap();
        assert_eq!(response.formatted_result, "1.6093");

        let request = ConvertUnitsRequest {
            value: "5000".to_string(),
            from_unit: "decimal".to_string(),
            to_unit: "roman".to_string(),
            category: Category::Roman,
            decimal_places: None,
        };
        let response = convert_units_command(&engine, request).unwrap();
        assert_eq!(response.result, None);
        assert_eq!(response.formatted_result, format::OUT_OF_RANGE);

        let request = ConvertUnitsRequest {
            value: "-5".to_string(),
            from_unit: "MB".to_string(),
            to_unit: "KB".to_string(),
            category: Category::Data,
            decimal_places: None,
        };
        assert!(matches!(
            convert_units_command(&engine, request),
            Err(AppError::Conversion(ConversionError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_get_units_command() {
        let response = get_units_command(Category::Temperature);
        assert_eq!(response.units.len(), 3);
        assert_eq!(response.units[0].code, "C");
        assert_eq!((response.default_from.as_str(), response.default_to.as_str()), ("C", "F"));
    }

    #[test]
    fn test_parse_text_command() {
        let response = parse_text_command("12 km to mi").unwrap();
        assert_eq!(response.category, Category::Length);
        assert_eq!(response.to_unit.as_deref(), Some("mi"));
        assert!(matches!(parse_text_command("hello"), Err(AppError::Conversion(_))));
    }
}
