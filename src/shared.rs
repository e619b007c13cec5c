pub mod error;
pub mod settings;
pub mod types;

#[cfg(test)]
mod types_test;

// Re-export for convenience
pub use error::{AppError, AppResult, ConversionError, ConversionResult};
