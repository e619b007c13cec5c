//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::core::catalog::{Category, CategoryGroup, SearchHit};
    use crate::core::features::currency::{ConvertCurrencyRequest, ConvertCurrencyResponse};
    use crate::core::features::unit_converter::Converted;
    use crate::core::history::HistoryEntry;
    use crate::shared::settings::Preferences;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // The bindings are written to web/src/types/bindings.ts
        Category::export().expect("Failed to export Category");
        CategoryGroup::export().expect("Failed to export CategoryGroup");
        SearchHit::export().expect("Failed to export SearchHit");
        Converted::export().expect("Failed to export Converted");

        ConvertUnitsRequest::export().expect("Failed to export ConvertUnitsRequest");
        ConvertUnitsResponse::export().expect("Failed to export ConvertUnitsResponse");
        ParseUnitResponse::export().expect("Failed to export ParseUnitResponse");
        GetUnitsResponse::export().expect("Failed to export GetUnitsResponse");
        UnitDto::export().expect("Failed to export UnitDto");

        ConvertCurrencyRequest::export().expect("Failed to export ConvertCurrencyRequest");
        ConvertCurrencyResponse::export().expect("Failed to export ConvertCurrencyResponse");
        HistoryEntry::export().expect("Failed to export HistoryEntry");
        Preferences::export().expect("Failed to export Preferences");
    }

    #[test]
    fn test_units_request_uses_camel_case() {
        let request: ConvertUnitsRequest = serde_json::from_str(
            r#"{ "value": "12", "fromUnit": "km", "toUnit": "mi", "category": "length", "decimalPlaces": 3 }"#,
        )
        .unwrap();
        assert_eq!(request.category, Category::Length);
        assert_eq!(request.decimal_places, Some(3));
    }

    #[test]
    fn test_converted_serializes_untagged() {
        assert_eq!(serde_json::to_string(&Converted::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&Converted::Numeral("XII".into())).unwrap(),
            "\"XII\""
        );
    }
}
