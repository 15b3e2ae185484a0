//! Client for exchangerate-api.com style services.
//!
//! `GET <base_url>/<BASE>` returns `{"rates": {"EUR": 0.92, ...}, ...}`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use fxchat_core::config::{RatesConfig, UpstreamConfig};
use serde::Deserialize;

use crate::error::RateError;
use crate::provider::RateProvider;

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// HTTP rate provider backed by an exchangerate-api compatible endpoint.
#[derive(Clone)]
pub struct ExchangeRateApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ExchangeRateApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeRateApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ExchangeRateApiClient {
    /// Build a client with its own connection pool.
    ///
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build()?;
        Ok(Self::with_client(http, base_url, api_key))
    }

    /// Build a client from the `[rates]` and `[upstream]` config sections.
    pub fn from_config(
        rates: &RatesConfig,
        upstream: &UpstreamConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, RateError> {
        Self::new(rates.base_url.clone(), api_key, upstream.timeout())
    }

    /// Build a client on top of an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn latest_url(&self, base: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), base)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    async fn fetch_rate(&self, base: &str, target: &str) -> Result<f64, RateError> {
        let url = self.latest_url(base);
        tracing::debug!(url = %url, "Requesting latest rates");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        let body: LatestRatesResponse = response
            .json()
            .await
            .map_err(|e| RateError::Decode(e.to_string()))?;

        body.rates
            .get(target)
            .copied()
            .ok_or_else(|| RateError::MissingRate(target.to_string()))
    }
}
