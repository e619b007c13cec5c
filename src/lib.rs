//! Unit conversion engine for the converter web app.
//!
//! The engine in [`crate::core::features::unit_converter`] is a pure function of
//! its inputs; persistence ([`crate::core::storage`]), history and the currency
//! rate cache are injected around it by [`state::AppState`].
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod core;
pub mod shared;
pub mod state;

pub use crate::core::catalog::{Category, CategoryGroup, Unit};
pub use crate::core::features::unit_converter::{convert, ConversionEngine, Converted};
pub use crate::shared::error::{AppError, AppResult, ConversionError, ConversionResult};
pub use crate::state::AppState;
