//! Currency conversion
//!
//! Rates come from the jsDelivr-hosted currency API and are cached per base
//! currency; arithmetic stays in `Decimal` end to end.

pub mod service;
pub mod types;

pub use service::{CurrencyService, HttpRateProvider, RateProvider, RateSnapshot};
pub use types::{is_supported, ConvertCurrencyRequest, ConvertCurrencyResponse, RateTable};
