//! Conversion history
//!
//! One JSON array under [`HISTORY_KEY`], newest first, shared by every
//! category. The store keeps at most [`MAX_HISTORY_SIZE`] entries overall;
//! a category view shows its newest [`MAX_CATEGORY_HISTORY`].

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::core::catalog::{self, Category};
use crate::core::features::unit_converter::Converted;
use crate::core::storage::KeyValueStore;
use crate::shared::error::AppResult;

pub const HISTORY_KEY: &str = "conversionHistory";

/// Maximum number of entries kept in the store
pub const MAX_HISTORY_SIZE: usize = 50;
/// Maximum number of entries shown per category
pub const MAX_CATEGORY_HISTORY: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct HistoryEntry {
    pub id: String,
    /// RFC 3339
    pub timestamp: String,
    pub category: Category,
    pub from_value: f64,
    pub from_unit: String,
    /// `None` for numeral results
    pub to_value: Option<f64>,
    pub to_unit: String,
    pub formatted_result: String,
}

pub struct ConversionHistory {
    store: Arc<dyn KeyValueStore>,
}

impl ConversionHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> AppResult<Vec<HistoryEntry>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("[ConversionHistory] Discarding unreadable history: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, entries: &[HistoryEntry]) -> AppResult<()> {
        let content = serde_json::to_string(entries)?;
        self.store.set(HISTORY_KEY, &content)
    }

    /// Record a submitted conversion. Returns `None` without touching the
    /// store when the value or result is zero or both units resolve to the
    /// same catalog unit.
    pub fn record(
        &self,
        category: Category,
        from_value: f64,
        from_unit: &str,
        result: &Converted,
        to_unit: &str,
        formatted_result: &str,
    ) -> AppResult<Option<HistoryEntry>> {
        let to_value = result.as_f64();
        if from_value == 0.0 || to_value == Some(0.0) || same_unit(category, from_unit, to_unit) {
            debug!(
                "[ConversionHistory] Skipping {} {} -> {}",
                from_value, from_unit, to_unit
            );
            return Ok(None);
        }

        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            category,
            from_value,
            from_unit: from_unit.to_string(),
            to_value,
            to_unit: to_unit.to_string(),
            formatted_result: formatted_result.to_string(),
        };

        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY_SIZE);
        self.persist(&entries)?;

        Ok(Some(entry))
    }

    /// Newest entries of one category.
    pub fn list(&self, category: Category) -> AppResult<Vec<HistoryEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.category == category)
            .take(MAX_CATEGORY_HISTORY)
            .collect())
    }

    pub fn list_all(&self) -> AppResult<Vec<HistoryEntry>> {
        let mut entries = self.load()?;
        entries.truncate(MAX_HISTORY_SIZE);
        Ok(entries)
    }

    /// Remove one entry. Returns whether it existed.
    pub fn remove(&self, id: &str) -> AppResult<bool> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.persist(&entries)?;
        Ok(true)
    }

    pub fn clear_category(&self, category: Category) -> AppResult<()> {
        let mut entries = self.load()?;
        entries.retain(|e| e.category != category);
        self.persist(&entries)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(HISTORY_KEY)
    }
}

/// Two spellings of one catalog unit count as the same unit.
fn same_unit(category: Category, a: &str, b: &str) -> bool {
    match (catalog::resolve(category, a), catalog::resolve(category, b)) {
        (Some(a), Some(b)) => a.code == b.code,
        _ => a == b,
    }
}
