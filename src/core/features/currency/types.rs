use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use ts_rs::TS;

use crate::core::catalog::Category;
use crate::shared::error::{AppError, AppResult};

/// Request payload for currency conversion.
///
/// Amount accepts either a JSON number or string to avoid JS float precision loss;
/// it is parsed into `Decimal` for all calculations.
#[derive(Debug, Clone, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertCurrencyRequest {
    #[ts(type = "string | number")]
    pub amount: Decimal,
    pub from: String,
    pub to: String,
}

/// Response payload for currency conversion.
///
/// Decimal fields are serialized as strings to protect precision across the IPC boundary.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct ConvertCurrencyResponse {
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub result: Decimal,
    #[serde(serialize_with = "serialize_decimal")]
    #[ts(type = "string")]
    pub rate: Decimal,
    pub timestamp: String,
    /// Set when the rates are past their freshness window and a refresh failed.
    pub stale: bool,
}

/// Network payload from the currency CDN:
/// `{ "date": "2024-03-01", "usd": { "eur": 0.92, ... } }`.
#[derive(Debug, Deserialize)]
pub struct RatesApiResponse {
    pub date: Option<String>,
    #[serde(flatten)]
    pub tables: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct RatesMap(#[serde(deserialize_with = "deserialize_rates")] HashMap<String, Decimal>);

impl RatesApiResponse {
    /// Extract the table for `base`. Codes outside the supported set are dropped.
    pub fn into_table(mut self, base: &str, fetched_at: DateTime<Utc>) -> AppResult<RateTable> {
        let raw = self
            .tables
            .remove(&base.to_lowercase())
            .ok_or_else(|| AppError::Validation(format!("Rates payload has no '{}' table", base)))?;
        let RatesMap(rates) = serde_json::from_value(raw)?;
        Ok(RateTable::new(base, rates, self.date, fetched_at))
    }
}

/// Exchange rates relative to one base currency, as fetched at `fetched_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, Decimal>,
    pub date: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    pub fn new(
        base: &str,
        rates: HashMap<String, Decimal>,
        date: Option<String>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let base = base.trim().to_ascii_uppercase();
        let mut rates: HashMap<String, Decimal> = rates
            .into_iter()
            .map(|(code, rate)| (code.to_ascii_uppercase(), rate))
            .collect();
        rates.insert(base.clone(), Decimal::ONE);
        Self {
            base,
            rates,
            date,
            fetched_at,
        }
    }

    /// Units of `code` per one unit of the base currency.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.trim().to_ascii_uppercase()).copied()
    }

    /// Units of `to` per one unit of `from`, triangulated through the base.
    pub fn cross_rate(&self, from: &str, to: &str) -> Option<Decimal> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        if from_rate == to_rate {
            return Some(Decimal::ONE);
        }
        to_rate.checked_div(from_rate)
    }
}

pub fn is_supported(code: &str) -> bool {
    let code = code.trim();
    Category::Currency
        .units()
        .iter()
        .any(|u| u.code.eq_ignore_ascii_case(code))
}

// ---- Serde helpers ----

impl<'de> Deserialize<'de> for ConvertCurrencyRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(deserialize_with = "deserialize_decimal")]
            amount: Decimal,
            from: String,
            to: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self {
            amount: raw.amount,
            from: raw.from.trim().to_uppercase(),
            to: raw.to.trim().to_uppercase(),
        })
    }
}

fn serialize_decimal<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.normalize().to_string())
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(n) => Decimal::try_from(n).map_err(serde::de::Error::custom),
        NumOrString::Str(s) => Decimal::from_str_exact(s.trim()).map_err(serde::de::Error::custom),
    }
}

fn deserialize_rates<'de, D>(deserializer: D) -> Result<HashMap<String, Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .filter(|(code, _)| is_supported(code))
        .map(|(code, value)| {
            let dec = match value {
                Value::Number(num) => num
                    .as_f64()
                    .and_then(|f| Decimal::try_from(f).ok())
                    .ok_or_else(|| serde::de::Error::custom("invalid numeric rate"))?,
                Value::String(s) => Decimal::from_str_exact(&s)
                    .map_err(|e| serde::de::Error::custom(format!("invalid rate string: {}", e)))?,
                _ => return Err(serde::de::Error::custom("unsupported rate type")),
            };
            Ok((code.to_uppercase(), dec))
        })
        .collect()
}
