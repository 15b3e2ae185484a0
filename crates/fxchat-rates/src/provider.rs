//! Rate provider trait and the logging fetcher used by the rest of the app.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RateError;

/// Pseudo-currency treated as the dollar when talking to rate services.
const USDT: &str = "USDT";
const USD: &str = "USD";

/// A source of exchange rates.
///
/// Implementations perform one upstream lookup per call. Codes arrive already
/// normalized (see [`normalize_code`]).
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Units of `target` per one unit of `base`.
    async fn fetch_rate(&self, base: &str, target: &str) -> Result<f64, RateError>;
}

/// Map a currency code to the code the upstream service understands.
///
/// `USDT` is queried as `USD`; everything else passes through.
pub fn normalize_code(code: &str) -> &str {
    if code == USDT {
        USD
    } else {
        code
    }
}

/// Fetches rates and reduces every failure to `None`.
///
/// Failures are logged here with the pair and the cause, so callers only
/// decide what to do when no rate is available.
#[derive(Clone)]
pub struct RateFetcher {
    provider: Arc<dyn RateProvider>,
}

impl RateFetcher {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Look up the `from` → `to` rate.
    pub async fn rate(&self, from: &str, to: &str) -> Option<f64> {
        let base = normalize_code(from);
        let target = normalize_code(to);

        match self.provider.fetch_rate(base, target).await {
            Ok(rate) if rate.is_finite() && rate > 0.0 => {
                tracing::debug!(from, to, rate, "Exchange rate fetched");
                Some(rate)
            }
            Ok(rate) => {
                let err = RateError::InvalidRate {
                    code: target.to_string(),
                    value: rate,
                };
                tracing::warn!(from, to, error = %err, "Discarding exchange rate");
                None
            }
            Err(RateError::MissingRate(code)) => {
                tracing::warn!(target_code = %code, "Target currency not found in rates");
                None
            }
            Err(RateError::Status(status)) => {
                tracing::warn!(status, from = base, "Rate API request failed");
                None
            }
            Err(e) => {
                tracing::warn!(from, to, error = %e, "Error fetching exchange rate");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every call and answers from a fixed result.
    struct RecordingProvider {
        calls: Mutex<Vec<(String, String)>>,
        answer: fn() -> Result<f64, RateError>,
    }

    impl RecordingProvider {
        fn new(answer: fn() -> Result<f64, RateError>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                answer,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RateProvider for RecordingProvider {
        async fn fetch_rate(&self, base: &str, target: &str) -> Result<f64, RateError> {
            self.calls
                .lock()
                .unwrap()
                .push((base.to_string(), target.to_string()));
            (self.answer)()
        }
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("USDT"), "USD");
        assert_eq!(normalize_code("USD"), "USD");
        assert_eq!(normalize_code("JPY"), "JPY");
        assert_eq!(normalize_code("usdt"), "usdt");
    }

    #[tokio::test]
    async fn test_usdt_base_is_queried_as_usd() {
        let provider = RecordingProvider::new(|| Ok(151.2));
        let fetcher = RateFetcher::new(provider.clone());

        assert_eq!(fetcher.rate("USDT", "JPY").await, Some(151.2));
        assert_eq!(provider.calls(), vec![("USD".to_string(), "JPY".to_string())]);
    }

    #[tokio::test]
    async fn test_usdt_target_is_queried_as_usd() {
        let provider = RecordingProvider::new(|| Ok(1.08));
        let fetcher = RateFetcher::new(provider.clone());

        assert_eq!(fetcher.rate("EUR", "USDT").await, Some(1.08));
        assert_eq!(provider.calls(), vec![("EUR".to_string(), "USD".to_string())]);
    }

    #[tokio::test]
    async fn test_failures_become_none() {
        let fetcher = RateFetcher::new(RecordingProvider::new(|| Err(RateError::Status(500))));
        assert_eq!(fetcher.rate("USD", "EUR").await, None);

        let fetcher = RateFetcher::new(RecordingProvider::new(|| {
            Err(RateError::MissingRate("EUR".to_string()))
        }));
        assert_eq!(fetcher.rate("USD", "EUR").await, None);

        let fetcher = RateFetcher::new(RecordingProvider::new(|| {
            Err(RateError::Transport("dns failure".to_string()))
        }));
        assert_eq!(fetcher.rate("USD", "EUR").await, None);
    }

    #[tokio::test]
    async fn test_non_positive_rate_is_rejected() {
        let fetcher = RateFetcher::new(RecordingProvider::new(|| Ok(0.0)));
        assert_eq!(fetcher.rate("USD", "EUR").await, None);

        let fetcher = RateFetcher::new(RecordingProvider::new(|| Ok(f64::NAN)));
        assert_eq!(fetcher.rate("USD", "EUR").await, None);
    }

    #[tokio::test]
    async fn test_one_upstream_call_per_lookup() {
        let provider = RecordingProvider::new(|| Ok(0.79));
        let fetcher = RateFetcher::new(provider.clone());

        fetcher.rate("USD", "GBP").await;
        fetcher.rate("USD", "GBP").await;
        assert_eq!(provider.calls().len(), 2);
    }
}
