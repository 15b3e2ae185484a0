//! Exchange-rate lookups for fxchat.
//!
//! [`RateProvider`] is the seam to the external rate service;
//! [`RateFetcher`] wraps a provider, applies code normalization and turns
//! every failure into a logged `None`.

pub mod error;
pub mod exchange_rate_api;
pub mod provider;

pub use error::RateError;
pub use exchange_rate_api::ExchangeRateApiClient;
pub use provider::{normalize_code, RateFetcher, RateProvider};
