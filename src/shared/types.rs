use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::catalog::{Category, Unit};
use crate::core::features::unit_converter::Converted;

/// One converter-form submission.
///
/// `value` is the raw input text: a number for every unit except the
/// `roman` source unit, which takes a numeral.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertUnitsRequest {
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
    #[ts(type = "number | null")]
    pub decimal_places: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertUnitsResponse {
    /// `None` when the result panel shows a sentinel instead of a value.
    pub result: Option<Converted>,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct GetUnitsResponse {
    pub category: Category,
    pub units: Vec<UnitDto>,
    pub default_from: String,
    pub default_to: String,
}

// Unit Data Transfer Object for the selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct UnitDto {
    pub code: String,        // e.g. "km/h"
    pub name: String,        // e.g. "Kilometers per hour"
    pub symbol: String,
    pub description: Option<String>,
}

impl From<&Unit> for UnitDto {
    fn from(unit: &Unit) -> Self {
        Self {
            code: unit.code.to_string(),
            name: unit.name.to_string(),
            symbol: unit.symbol.to_string(),
            description: unit.description.map(str::to_string),
        }
    }
}
