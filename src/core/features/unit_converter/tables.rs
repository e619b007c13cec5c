//! Conversion constants.
//!
//! Linear categories carry one factor per unit, relative to the category's
//! base unit. Pairwise categories carry the literal per-pair constants; they
//! are empirical approximations (clothing and shoe sizes especially) and are
//! kept as-is rather than re-derived.

use std::f64::consts::PI;

use crate::core::catalog::Category;

/// Length, base: meters
const LENGTH: &[(&str, f64)] = &[
    ("mm", 0.001),
    ("cm", 0.01),
    ("m", 1.0),
    ("km", 1000.0),
    ("in", 0.0254),
    ("ft", 0.3048),
    ("yd", 0.9144),
    ("mi", 1609.344),
];

/// Weight, base: grams
const WEIGHT: &[(&str, f64)] = &[
    ("mg", 0.001),
    ("g", 1.0),
    ("kg", 1000.0),
    ("oz", 28.3495),
    ("lb", 453.592),
    ("st", 6350.29),
    ("t", 1_000_000.0),
];

/// Area, base: square meters
const AREA: &[(&str, f64)] = &[
    ("mm2", 0.000001),
    ("cm2", 0.0001),
    ("m2", 1.0),
    ("ha", 10_000.0),
    ("km2", 1_000_000.0),
    ("in2", 0.00064516),
    ("ft2", 0.092903),
    ("ac", 4046.86),
    ("mi2", 2_589_988.11),
];

/// Volume, base: liters
const VOLUME: &[(&str, f64)] = &[
    ("ml", 0.001),
    ("l", 1.0),
    ("floz", 0.0295735),
    ("cup", 0.236588),
    ("pt", 0.473176),
    ("qt", 0.946353),
    ("gal", 3.78541),
];

/// Time, base: seconds. Month and year are Gregorian averages.
const TIME: &[(&str, f64)] = &[
    ("ms", 0.001),
    ("s", 1.0),
    ("min", 60.0),
    ("h", 3600.0),
    ("d", 86_400.0),
    ("wk", 604_800.0),
    ("mo", 2_629_746.0),
    ("yr", 31_556_952.0),
];

/// Speed, base: meters per second
const SPEED: &[(&str, f64)] = &[
    ("m/s", 1.0),
    ("km/h", 1000.0 / 3600.0),
    ("mph", 0.44704),
    ("kn", 0.514444),
    ("ft/s", 0.3048),
];

/// Data, base: bytes (binary prefixes)
const DATA: &[(&str, f64)] = &[
    ("bit", 0.125),
    ("B", 1.0),
    ("KB", 1024.0),
    ("MB", 1_048_576.0),
    ("GB", 1_073_741_824.0),
    ("TB", 1_099_511_627_776.0),
    ("PB", 1_125_899_906_842_624.0),
];

/// Pressure, base: pascals
const PRESSURE: &[(&str, f64)] = &[
    ("Pa", 1.0),
    ("kPa", 1000.0),
    ("bar", 100_000.0),
    ("psi", 6894.76),
    ("atm", 101_325.0),
    ("torr", 133.322),
];

/// Angle, base: radians
const ANGLE: &[(&str, f64)] = &[
    ("deg", PI / 180.0),
    ("rad", 1.0),
    ("grad", PI / 200.0),
    ("arcmin", PI / 10_800.0),
    ("arcsec", PI / 648_000.0),
    ("turn", 2.0 * PI),
];

/// Energy, base: joules
const ENERGY: &[(&str, f64)] = &[
    ("J", 1.0),
    ("kJ", 1000.0),
    ("cal", 4.184),
    ("kcal", 4184.0),
    ("Wh", 3600.0),
    ("kWh", 3_600_000.0),
    ("BTU", 1055.06),
];

/// Power, base: watts
const POWER: &[(&str, f64)] = &[
    ("W", 1.0),
    ("kW", 1000.0),
    ("hp", 745.7),
    ("BTU/h", 0.293071),
];

/// Force, base: newtons
const FORCE: &[(&str, f64)] = &[
    ("N", 1.0),
    ("kN", 1000.0),
    ("dyn", 0.00001),
    ("lbf", 4.44822),
    ("kgf", 9.80665),
];

/// Frequency, base: hertz
const FREQUENCY: &[(&str, f64)] = &[
    ("Hz", 1.0),
    ("kHz", 1000.0),
    ("MHz", 1_000_000.0),
    ("GHz", 1_000_000_000.0),
];

/// Base-unit factors for a linear category, `None` for every other category.
pub(crate) fn linear_factors(category: Category) -> Option<&'static [(&'static str, f64)]> {
    match category {
        Category::Length => Some(LENGTH),
        Category::Weight => Some(WEIGHT),
        Category::Area => Some(AREA),
        Category::Volume => Some(VOLUME),
        Category::Time => Some(TIME),
        Category::Speed => Some(SPEED),
        Category::Data => Some(DATA),
        Category::Pressure => Some(PRESSURE),
        Category::Angle => Some(ANGLE),
        Category::Energy => Some(ENERGY),
        Category::Power => Some(POWER),
        Category::Force => Some(FORCE),
        Category::Frequency => Some(FREQUENCY),
        _ => None,
    }
}

/// One directed entry of a pairwise table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PairOp {
    Mul(f64),
    Div(f64),
}

impl PairOp {
    pub(crate) fn apply(self, value: f64) -> f64 {
        match self {
            PairOp::Mul(k) => value * k,
            PairOp::Div(k) => value / k,
        }
    }
}

pub(crate) type PairEntry = (&'static str, &'static str, PairOp);

use PairOp::{Div, Mul};

pub(crate) const RESOLUTION: &[PairEntry] = &[
    ("px", "dpi", Mul(25.4)),
    ("px", "ppi", Mul(25.4)),
    ("dpi", "px", Div(25.4)),
    ("ppi", "px", Div(25.4)),
    // Both directions divide; this pair is not a round trip.
    ("dpi", "ppi", Div(25.4)),
    ("ppi", "dpi", Div(25.4)),
];

pub(crate) const BMI: &[PairEntry] = &[
    ("kg/m²", "lb/ft²", Mul(20.4816)),
    ("kg/m²", "BMI", Mul(1.0)),
    ("lb/ft²", "kg/m²", Div(20.4816)),
    ("lb/ft²", "BMI", Mul(703.0)),
    ("BMI", "kg/m²", Mul(1.0)),
    ("BMI", "lb/ft²", Div(703.0)),
];

pub(crate) const CLOTHING: &[PairEntry] = &[
    ("US", "EU", Mul(0.9144)),
    ("US", "UK", Mul(0.8382)),
    ("US", "JP", Mul(0.9144)),
    ("EU", "US", Div(0.9144)),
    ("EU", "UK", Mul(0.9144)),
    ("EU", "JP", Mul(0.9144)),
    ("UK", "US", Div(0.8382)),
    ("UK", "EU", Div(0.9144)),
    ("UK", "JP", Mul(0.8382)),
    ("JP", "US", Div(0.9144)),
    ("JP", "EU", Div(0.9144)),
    ("JP", "UK", Div(0.8382)),
];

// EU -> UK and UK -> EU use different constants; not a round trip.
pub(crate) const SHOE: &[PairEntry] = &[
    ("US", "EU", Mul(0.9144)),
    ("US", "UK", Mul(0.8382)),
    ("US", "JP", Mul(0.9144)),
    ("EU", "US", Div(0.9144)),
    ("EU", "UK", Mul(0.8382)),
    ("EU", "JP", Mul(0.9144)),
    ("UK", "US", Div(0.8382)),
    ("UK", "EU", Div(0.9144)),
    ("UK", "JP", Mul(0.8382)),
    ("JP", "US", Div(0.9144)),
    ("JP", "EU", Div(0.9144)),
    ("JP", "UK", Div(0.8382)),
];

pub(crate) const WIND: &[PairEntry] = &[
    ("m/s", "km/h", Mul(3.6)),
    ("m/s", "mph", Mul(2.237)),
    ("m/s", "knot", Mul(1.944)),
    ("km/h", "m/s", Div(3.6)),
    ("km/h", "mph", Div(1.609)),
    ("km/h", "knot", Div(1.852)),
    ("mph", "m/s", Div(2.237)),
    ("mph", "km/h", Mul(1.609)),
    ("mph", "knot", Div(1.151)),
    ("knot", "m/s", Div(1.944)),
    ("knot", "km/h", Mul(1.852)),
    ("knot", "mph", Mul(1.151)),
];

pub(crate) const TIRE: &[PairEntry] = &[
    ("psi", "kPa", Mul(6.895)),
    ("psi", "bar", Div(14.504)),
    ("kPa", "psi", Div(6.895)),
    ("bar", "psi", Mul(14.504)),
    ("bar", "kPa", Mul(100.0)),
    ("kPa", "bar", Div(100.0)),
];

/// Fuel economy constants.
pub(crate) const MPG_L100KM: f64 = 235.215;
pub(crate) const MPG_TO_KML: f64 = 0.425144;

/// Beaufort: v[m/s] = 0.836 * B^1.5
pub(crate) const BEAUFORT_COEFFICIENT: f64 = 0.836;
pub(crate) const BEAUFORT_MAX: f64 = 12.0;
