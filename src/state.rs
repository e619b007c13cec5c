//! Application state shared by the UI commands.

use std::sync::{Arc, RwLock};

use chrono::Duration;
use tracing::{info, warn};

use crate::core::catalog::{self, Category};
use crate::core::features::currency::{
    ConvertCurrencyRequest, ConvertCurrencyResponse, CurrencyService, HttpRateProvider,
    RateProvider, RateSnapshot,
};
use crate::core::features::unit_converter::{
    convert_units_command, parsing, roman, ConversionEngine,
};
use crate::core::history::ConversionHistory;
use crate::core::storage::{open_store, KeyValueStore};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::{AppSettings, Preferences};
use crate::shared::types::{ConvertUnitsRequest, ConvertUnitsResponse};

pub struct AppState<P: RateProvider = HttpRateProvider> {
    settings: AppSettings,
    engine: RwLock<ConversionEngine>,
    currency: CurrencyService<P>,
    history: ConversionHistory,
    store: Arc<dyn KeyValueStore>,
}

impl AppState<HttpRateProvider> {
    /// Load settings (falling back to defaults), open the store and build
    /// the HTTP-backed currency service.
    pub async fn initialize() -> AppResult<Self> {
        let settings = AppSettings::load().await.unwrap_or_else(|e| {
            warn!("[AppState] Failed to load settings: {}", e);
            AppSettings::default()
        });
        let store = open_store(&settings.storage);
        let provider = HttpRateProvider::new(&settings.currency)?;
        info!("[AppState] Initialized");
        Ok(Self::new(settings, store, provider))
    }
}

impl<P: RateProvider> AppState<P> {
    pub fn new(settings: AppSettings, store: Arc<dyn KeyValueStore>, provider: P) -> Self {
        let stale_after = Duration::minutes(settings.currency.stale_after_minutes);
        Self {
            engine: RwLock::new(ConversionEngine::new()),
            currency: CurrencyService::new(provider, stale_after),
            history: ConversionHistory::new(Arc::clone(&store)),
            store,
            settings,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Snapshot of the engine, including whatever rates were last loaded.
    pub fn engine(&self) -> AppResult<ConversionEngine> {
        self.engine
            .read()
            .map(|engine| engine.clone())
            .map_err(|_| AppError::Storage("engine lock poisoned".into()))
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::load(self.store.as_ref())
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> AppResult<()> {
        preferences.save(self.store.as_ref())
    }

    /// Fetch (or reuse) rates for `base` and hand them to the engine.
    pub async fn refresh_rates(&self, base: &str) -> AppResult<RateSnapshot> {
        let snapshot = self.currency.rates(base).await?;
        self.engine
            .write()
            .map_err(|_| AppError::Storage("engine lock poisoned".into()))?
            .set_rates(Arc::clone(&snapshot.table));
        Ok(snapshot)
    }

    pub async fn convert_currency(
        &self,
        request: ConvertCurrencyRequest,
    ) -> AppResult<ConvertCurrencyResponse> {
        self.currency.convert(request).await
    }

    /// Run a converter-form submission: convert, record history and
    /// remember the selection. Decimal places default to the saved
    /// preference.
    pub async fn submit(&self, mut request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
        let mut preferences = self.preferences();
        request.decimal_places = request.decimal_places.or(Some(preferences.decimal_places));

        if request.category == Category::Currency {
            let from = catalog::resolve(Category::Currency, &request.from_unit);
            let to = catalog::resolve(Category::Currency, &request.to_unit);
            // Unknown codes fall through so the engine reports them.
            if let (Some(from), Some(to)) = (from, to) {
                if from.code != to.code {
                    self.refresh_rates(from.code).await?;
                }
            }
        }

        let engine = self.engine()?;
        let response = convert_units_command(&engine, request.clone())?;

        if let Some(result) = &response.result {
            let from_value = parsing::parse_number(&request.value)
                .or_else(|| roman::from_roman(&request.value).ok().map(f64::from));
            if let Some(from_value) = from_value {
                self.history.record(
                    request.category,
                    from_value,
                    &request.from_unit,
                    result,
                    &request.to_unit,
                    &response.formatted_result,
                )?;
            }
        }

        preferences.remember(request.category, &request.from_unit, &request.to_unit);
        if let Err(e) = preferences.save(self.store.as_ref()) {
            warn!("[AppState] Failed to save preferences: {}", e);
        }

        Ok(response)
    }
}
