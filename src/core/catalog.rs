//! Category and unit catalog
//!
//! Read-only registry consumed by selectors, search and the query parser.
//! The engine resolves every unit code through [`resolve`], so the catalog
//! and the conversion tables cannot drift apart silently (see the
//! consistency tests in `unit_converter`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::shared::error::ConversionError;

mod units;

/// A closed family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Time,
    Speed,
    Data,
    Pressure,
    Angle,
    Currency,
    Energy,
    Power,
    Force,
    Frequency,
    Fuel,
    Resolution,
    Bmi,
    Clothing,
    Shoe,
    Wind,
    Tire,
    Roman,
}

/// Selector grouping used by the category browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub enum CategoryGroup {
    Common,
    Engineering,
    Digital,
    Lifestyle,
}

impl Category {
    pub const ALL: [Category; 23] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Area,
        Category::Volume,
        Category::Time,
        Category::Speed,
        Category::Data,
        Category::Pressure,
        Category::Angle,
        Category::Currency,
        Category::Energy,
        Category::Power,
        Category::Force,
        Category::Frequency,
        Category::Fuel,
        Category::Resolution,
        Category::Bmi,
        Category::Clothing,
        Category::Shoe,
        Category::Wind,
        Category::Tire,
        Category::Roman,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Area => "area",
            Category::Volume => "volume",
            Category::Time => "time",
            Category::Speed => "speed",
            Category::Data => "data",
            Category::Pressure => "pressure",
            Category::Angle => "angle",
            Category::Currency => "currency",
            Category::Energy => "energy",
            Category::Power => "power",
            Category::Force => "force",
            Category::Frequency => "frequency",
            Category::Fuel => "fuel",
            Category::Resolution => "resolution",
            Category::Bmi => "bmi",
            Category::Clothing => "clothing",
            Category::Shoe => "shoe",
            Category::Wind => "wind",
            Category::Tire => "tire",
            Category::Roman => "roman",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight & Mass",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Volume => "Volume",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Data => "Data Storage",
            Category::Pressure => "Pressure",
            Category::Angle => "Angle",
            Category::Currency => "Currency",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Force => "Force",
            Category::Frequency => "Frequency",
            Category::Fuel => "Fuel Consumption",
            Category::Resolution => "Image Resolution",
            Category::Bmi => "BMI Calculator",
            Category::Clothing => "Clothing Size",
            Category::Shoe => "Shoe Size",
            Category::Wind => "Wind Speed",
            Category::Tire => "Tire Pressure",
            Category::Roman => "Roman Numerals",
        }
    }

    pub fn group(self) -> CategoryGroup {
        match self {
            Category::Length
            | Category::Weight
            | Category::Temperature
            | Category::Volume
            | Category::Time
            | Category::Speed
            | Category::Area
            | Category::Currency => CategoryGroup::Common,
            Category::Pressure
            | Category::Energy
            | Category::Power
            | Category::Force
            | Category::Frequency
            | Category::Angle => CategoryGroup::Engineering,
            Category::Data | Category::Resolution | Category::Roman => CategoryGroup::Digital,
            Category::Fuel
            | Category::Bmi
            | Category::Clothing
            | Category::Shoe
            | Category::Wind
            | Category::Tire => CategoryGroup::Lifestyle,
        }
    }

    /// Units of this category in display order.
    pub fn units(self) -> &'static [Unit] {
        match self {
            Category::Length => units::LENGTH,
            Category::Weight => units::WEIGHT,
            Category::Temperature => units::TEMPERATURE,
            Category::Area => units::AREA,
            Category::Volume => units::VOLUME,
            Category::Time => units::TIME,
            Category::Speed => units::SPEED,
            Category::Data => units::DATA,
            Category::Pressure => units::PRESSURE,
            Category::Angle => units::ANGLE,
            Category::Currency => units::CURRENCY,
            Category::Energy => units::ENERGY,
            Category::Power => units::POWER,
            Category::Force => units::FORCE,
            Category::Frequency => units::FREQUENCY,
            Category::Fuel => units::FUEL,
            Category::Resolution => units::RESOLUTION,
            Category::Bmi => units::BMI,
            Category::Clothing => units::CLOTHING,
            Category::Shoe => units::SHOE,
            Category::Wind => units::WIND,
            Category::Tire => units::TIRE,
            Category::Roman => units::ROMAN,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConversionError::InvalidInput(format!("Unknown category: {}", s)))
    }
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 4] = [
        CategoryGroup::Common,
        CategoryGroup::Engineering,
        CategoryGroup::Digital,
        CategoryGroup::Lifestyle,
    ];

    pub fn categories(self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| c.group() == self)
            .collect()
    }
}

/// Groups in browser order, each with its categories.
pub fn category_groups() -> Vec<(CategoryGroup, Vec<Category>)> {
    CategoryGroup::ALL
        .into_iter()
        .map(|g| (g, g.categories()))
        .collect()
}

/// Unit definition. `code` is unique within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: Option<&'static str>,
    pub aliases: &'static [&'static str],
}

impl Unit {
    fn matches_exact(&self, code: &str) -> bool {
        self.code == code || self.aliases.contains(&code)
    }

    fn matches_loose(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(code))
    }
}

/// Ordered unit listing for a category selector.
pub fn list_units(category: Category) -> &'static [Unit] {
    category.units()
}

/// Resolve a unit code within a category: exact code or alias first, then
/// a case-insensitive match.
pub fn resolve(category: Category, code: &str) -> Option<&'static Unit> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    let units = category.units();
    units
        .iter()
        .find(|u| u.code == code)
        .or_else(|| units.iter().find(|u| u.matches_exact(code)))
        .or_else(|| units.iter().find(|u| u.matches_loose(code)))
}

/// Default selector pair: first and second listed unit.
pub fn default_units(category: Category) -> (&'static Unit, &'static Unit) {
    let units = category.units();
    let from = &units[0];
    let to = units.get(1).unwrap_or(from);
    (from, to)
}

// ============================================================================
// Search
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct SearchHit {
    pub category: Category,
    pub group: CategoryGroup,
    pub label: String,
    /// Set when the hit came from a unit name rather than the category label.
    pub matched_unit: Option<String>,
}

/// Case-insensitive substring search. Category labels rank ahead of unit
/// name matches; an empty term yields nothing.
pub fn search(term: &str) -> Vec<SearchHit> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let ordered: Vec<Category> = CategoryGroup::ALL
        .into_iter()
        .flat_map(|g| g.categories())
        .collect();

    let mut hits: Vec<SearchHit> = ordered
        .iter()
        .filter(|c| c.label().to_lowercase().contains(&needle) || c.id().contains(&needle))
        .map(|c| SearchHit {
            category: *c,
            group: c.group(),
            label: c.label().to_string(),
            matched_unit: None,
        })
        .collect();

    for category in ordered {
        if hits.iter().any(|h| h.category == category) {
            continue;
        }
        let unit_hit = category.units().iter().find(|u| {
            u.name.to_lowercase().contains(&needle) || u.code.eq_ignore_ascii_case(&needle)
        });
        if let Some(unit) = unit_hit {
            hits.push(SearchHit {
                category,
                group: category.group(),
                label: category.label().to_string(),
                matched_unit: Some(unit.name.to_string()),
            });
        }
    }

    hits
}

// ============================================================================
// Quick shortcuts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickConversion {
    pub label: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub category: Category,
}

const QUICK_CONVERSIONS: [QuickConversion; 7] = [
    QuickConversion { label: "cm → in", from: "cm", to: "in", category: Category::Length },
    QuickConversion { label: "kg → lbs", from: "kg", to: "lb", category: Category::Weight },
    QuickConversion { label: "°C → °F", from: "C", to: "F", category: Category::Temperature },
    QuickConversion { label: "L → gal", from: "l", to: "gal", category: Category::Volume },
    QuickConversion { label: "mi → km", from: "mi", to: "km", category: Category::Length },
    QuickConversion { label: "m → ft", from: "m", to: "ft", category: Category::Length },
    QuickConversion { label: "g → oz", from: "g", to: "oz", category: Category::Weight },
];

pub fn quick_conversions() -> &'static [QuickConversion] {
    &QUICK_CONVERSIONS
}
