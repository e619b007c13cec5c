use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use ts_rs::TS;

use crate::core::catalog::Category;
use crate::core::features::unit_converter::format::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use crate::core::storage::KeyValueStore;
use crate::shared::error::{AppError, AppResult};

/// Store key shared with the web build's `localStorage`.
pub const PREFERENCES_KEY: &str = "converterPreferences";

pub const DEFAULT_RATES_API_URL: &str =
    "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@latest/latest/currencies";

// ============================================================================
// User preferences (key-value store)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "../web/src/types/bindings.ts")]
pub struct Preferences {
    #[ts(type = "number")]
    pub decimal_places: usize,
    pub last_category: Option<Category>,
    pub last_from_unit: Option<String>,
    pub last_to_unit: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            last_category: None,
            last_from_unit: None,
            last_to_unit: None,
        }
    }
}

impl Preferences {
    /// Load from the store. A missing or unreadable entry yields defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let raw = match store.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("[Preferences] Failed to read preferences: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&raw) {
            Ok(prefs) => prefs.clamped(),
            Err(e) => {
                warn!("[Preferences] Corrupt preferences, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        let content = serde_json::to_string(&self.clone().clamped())?;
        store.set(PREFERENCES_KEY, &content)
    }

    /// Remember the selector state after a conversion.
    pub fn remember(&mut self, category: Category, from_unit: &str, to_unit: &str) {
        self.last_category = Some(category);
        self.last_from_unit = Some(from_unit.to_string());
        self.last_to_unit = Some(to_unit.to_string());
    }

    fn clamped(mut self) -> Self {
        self.decimal_places = self.decimal_places.min(MAX_DECIMAL_PLACES);
        self
    }
}

// ============================================================================
// Application settings (JSON file in the config dir)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub currency: CurrencySettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub api_url: String,
    pub stale_after_minutes: i64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data directory for the store file.
    pub data_dir: Option<PathBuf>,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_RATES_API_URL.to_string(),
            stale_after_minutes: 60,
            timeout_secs: 10,
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "converter", "unit-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        Self::load_from(&Self::get_settings_path()?).await
    }

    /// Read settings from `path`, writing defaults there if it does not exist.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !fs::try_exists(path).await? {
            info!("[Settings] No settings at {}, writing defaults", path.display());
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save(&self) -> AppResult<()> {
        self.save_to(&Self::get_settings_path()?).await
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use uuid::Uuid;

    #[test]
    fn test_preferences_default_when_missing() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.decimal_places, 2);
    }

    #[test]
    fn test_preferences_default_when_corrupt() {
        let store = MemoryStore::new();
        store.set(PREFERENCES_KEY, "{not json").unwrap();
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn test_preferences_round_trip_through_store() {
        let store = MemoryStore::new();
        let mut prefs = Preferences {
            decimal_places: 4,
            ..Preferences::default()
        };
        prefs.remember(Category::Temperature, "C", "F");
        prefs.save(&store).unwrap();

        let raw = store.get(PREFERENCES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"lastCategory\":\"temperature\""));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_preferences_partial_document_fills_defaults() {
        let store = MemoryStore::new();
        store.set(PREFERENCES_KEY, r#"{"lastFromUnit":"km","decimalPlaces":40}"#).unwrap();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.last_from_unit.as_deref(), Some("km"));
        assert_eq!(prefs.decimal_places, MAX_DECIMAL_PLACES);
        assert_eq!(prefs.last_category, None);
    }

    #[tokio::test]
    async fn test_settings_written_with_defaults_when_missing() {
        let path = std::env::temp_dir()
            .join("unit-converter-tests")
            .join(format!("{}.json", Uuid::new_v4()));

        let settings = AppSettings::load_from(&path).await.unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());

        let mut changed = settings.clone();
        changed.currency.stale_after_minutes = 15;
        changed.save_to(&path).await.unwrap();
        assert_eq!(AppSettings::load_from(&path).await.unwrap(), changed);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_settings_invalid_json_is_config_error() {
        let path = std::env::temp_dir()
            .join("unit-converter-tests")
            .join(format!("{}.json", Uuid::new_v4()));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        for contents in ["{not json", "42"] {
            std::fs::write(&path, contents).unwrap();
            assert!(matches!(
                AppSettings::load_from(&path).await,
                Err(AppError::Config(_))
            ));
        }
        let _ = std::fs::remove_file(&path);
    }
}
