use serde::Serialize;
use thiserror::Error;

use crate::core::catalog::Category;

/// Failures of a single conversion.
///
/// The engine never panics or silently returns a misleading number; every
/// out-of-domain input comes back as one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum ConversionError {
    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("No {category} conversion defined from {from} to {to}")]
    UnsupportedPair {
        category: Category,
        from: String,
        to: String,
    },

    /// Rendered as the "Out of range" sentinel at the display boundary.
    #[error("{0} is outside the Roman numeral range 1-3999")]
    RomanOutOfRange(i64),

    #[error("Invalid Roman numeral: {0}")]
    InvalidNumeral(String),

    #[error("Division by zero converting {from} to {to}")]
    DivisionByZero { from: String, to: String },

    #[error("{value} is outside the domain of {category}")]
    OutOfDomain { category: Category, value: f64 },

    #[error("Exchange rate unavailable for {from} to {to}")]
    RateUnavailable { from: String, to: String },

    #[error("{0}")]
    InvalidInput(String),
}

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Rate unavailable: {0}")]
    RateUnavailable(String),

    #[error("Conversion Error: {0}")]
    Conversion(#[from] ConversionError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub type ConversionResult<T> = Result<T, ConversionError>;
