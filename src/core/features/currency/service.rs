use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::Duration as StdDuration,
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::CurrencySettings;

use super::types::{
    is_supported, ConvertCurrencyRequest, ConvertCurrencyResponse, RateTable, RatesApiResponse,
};

/// Source of exchange-rate tables.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch(&self, base: &str) -> AppResult<RateTable>;
}

/// Fetches `{api_url}/{base}.json` from the currency CDN.
pub struct HttpRateProvider {
    http: Client,
    api_url: String,
}

impl HttpRateProvider {
    pub fn new(settings: &CurrencySettings) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent("unit-converter/currency")
            .timeout(StdDuration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, base: &str) -> String {
        format!("{}/{}.json", self.api_url, base.to_lowercase())
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch(&self, base: &str) -> AppResult<RateTable> {
        let url = self.url_for(base);
        info!("[Currency] Fetching rates from {}", url);

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::Network(format!(
                "Failed to fetch rates: {}",
                resp.status()
            )));
        }

        let json: RatesApiResponse = resp
            .json()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid response: {}", e)))?;

        json.into_table(base, Utc::now())
    }
}

/// A rate table handed out by the service, flagged when past its window.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub table: Arc<RateTable>,
    pub stale: bool,
}

/// Per-base rate cache in front of a [`RateProvider`].
///
/// Entries stay fresh for `stale_after`. When a refresh fails the old entry
/// is served with `stale = true`; only a base that was never fetched
/// surfaces `RateUnavailable`.
pub struct CurrencyService<P: RateProvider = HttpRateProvider> {
    provider: P,
    cache: RwLock<HashMap<String, Arc<RateTable>>>,
    stale_after: Duration,
}

impl CurrencyService<HttpRateProvider> {
    pub fn from_settings(settings: &CurrencySettings) -> AppResult<Self> {
        let provider = HttpRateProvider::new(settings)?;
        Ok(Self::new(provider, Duration::minutes(settings.stale_after_minutes)))
    }
}

impl<P: RateProvider> CurrencyService<P> {
    pub fn new(provider: P, stale_after: Duration) -> Self {
        Self {
            provider,
            cache: RwLock::new(HashMap::new()),
            stale_after,
        }
    }

    pub fn is_fresh(&self, table: &RateTable) -> bool {
        Utc::now() - table.fetched_at <= self.stale_after
    }

    /// Last table fetched for `base`, fresh or not. Never touches the network.
    pub fn cached(&self, base: &str) -> Option<Arc<RateTable>> {
        let key = base.trim().to_ascii_uppercase();
        self.cache.read().ok()?.get(&key).cloned()
    }

    /// Rates for `base`, fetching when the cached entry is missing or stale.
    pub async fn rates(&self, base: &str) -> AppResult<RateSnapshot> {
        let base = base.trim().to_ascii_uppercase();
        if !is_supported(&base) {
            return Err(AppError::Validation(format!("Currency not supported: {}", base)));
        }

        // Guard is dropped before the fetch is awaited
        let cached = self.cached(&base);
        if let Some(table) = &cached {
            if self.is_fresh(table) {
                debug!("[CurrencyService] cache hit for {}", base);
                return Ok(RateSnapshot {
                    table: Arc::clone(table),
                    stale: false,
                });
            }
        }

        match self.provider.fetch(&base).await {
            Ok(table) => {
                let table = Arc::new(table);
                self.cache
                    .write()
                    .map_err(|_| AppError::Storage("rate cache poisoned".into()))?
                    .insert(base.clone(), Arc::clone(&table));
                info!(
                    "[CurrencyService] Cached {} rates for {}",
                    table.rates.len(),
                    base
                );
                Ok(RateSnapshot { table, stale: false })
            }
            Err(e) => match cached {
                Some(table) => {
                    warn!(
                        "[CurrencyService] Refresh for {} failed, serving rates from {}: {}",
                        base, table.fetched_at, e
                    );
                    Ok(RateSnapshot { table, stale: true })
                }
                None => {
                    warn!("[CurrencyService] No rates for {}: {}", base, e);
                    Err(AppError::RateUnavailable(format!("{}: {}", base, e)))
                }
            },
        }
    }

    pub async fn convert(
        &self,
        request: ConvertCurrencyRequest,
    ) -> AppResult<ConvertCurrencyResponse> {
        let amount = request.amount;
        let from = request.from.trim().to_ascii_uppercase();
        let to = request.to.trim().to_ascii_uppercase();
        debug!(
            "[CurrencyService] convert called: amount={}, from={}, to={}",
            amount, from, to
        );

        for code in [&from, &to] {
            if !is_supported(code) {
                return Err(AppError::Validation(format!("Currency not supported: {}", code)));
            }
        }

        if from == to {
            return Ok(ConvertCurrencyResponse {
                result: amount,
                rate: Decimal::ONE,
                timestamp: Utc::now().to_rfc3339(),
                stale: false,
            });
        }

        let snapshot = self.rates(&from).await?;
        let rate = snapshot
            .table
            .cross_rate(&from, &to)
            .ok_or_else(|| AppError::RateUnavailable(format!("{} to {}", from, to)))?;
        let result = amount
            .checked_mul(rate)
            .ok_or_else(|| AppError::Validation("Multiplication overflow".into()))?;

        debug!(
            "[CurrencyService] Conversion complete: {} {} -> {} {} (rate={}, stale={})",
            amount, from, result, to, rate, snapshot.stale
        );

        Ok(ConvertCurrencyResponse {
            result,
            rate,
            timestamp: snapshot.table.fetched_at.to_rfc3339(),
            stale: snapshot.stale,
        })
    }
}
