//! Application state shared across all route handlers.
//!
//! Everything here is built once at startup and never mutated afterwards.

use std::sync::Arc;
use std::time::Instant;

use fxchat_chat::{ChatOrchestrator, TextGenerator};
use fxchat_core::config::FxConfig;
use fxchat_rates::{RateFetcher, RateProvider};

/// Shared application state.
///
/// All fields are cheap to clone across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<FxConfig>,
    /// Rate lookups for `/convert`.
    pub rates: RateFetcher,
    /// Chat flow for `/chat`.
    pub chat: Arc<ChatOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Wire the rate provider and text generator into a new state.
    ///
    /// `/convert` and `/chat` share the same rate provider.
    pub fn new(
        config: FxConfig,
        rate_provider: Arc<dyn RateProvider>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let rates = RateFetcher::new(rate_provider);
        let chat = ChatOrchestrator::new(rates.clone(), generator);
        Self {
            config: Arc::new(config),
            rates,
            chat: Arc::new(chat),
            start_time: Instant::now(),
        }
    }
}
