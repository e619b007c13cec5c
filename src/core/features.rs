//! Conversion features
//!
//! The unit engine is synchronous and pure; currency is the only feature
//! that reaches the network.

pub mod currency;
pub mod unit_converter;
