//! fxchat application binary - composition root.
//!
//! 1. Load `.env`, parse the command line and read the TOML config
//! 2. Read API keys from the environment (fail fast when missing)
//! 3. Build the exchange-rate and Gemini clients
//! 4. Start the axum server

mod cli;

use std::sync::Arc;

use clap::Parser;

use fxchat_api::AppState;
use fxchat_chat::GeminiClient;
use fxchat_core::config::{FxConfig, Secrets};
use fxchat_rates::ExchangeRateApiClient;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let loaded = if config_file.exists() {
        Some(FxConfig::load(&config_file))
    } else {
        None
    };
    let mut config = match loaded {
        Some(Ok(ref c)) => c.clone(),
        _ => FxConfig::default(),
    };
    args.apply(&mut config);

    // Tracing. RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting fxchat v{}", env!("CARGO_PKG_VERSION"));

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
    match loaded {
        Some(Ok(_)) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(Err(e)) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config, using defaults"
        ),
        None => tracing::info!(path = %config_file.display(), "No config file, using defaults"),
    }

    // Secrets.
    let secrets = match Secrets::from_env() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start without API keys");
            return Err(e.into());
        }
    };

    // Upstream clients.
    let rates = ExchangeRateApiClient::from_config(
        &config.rates,
        &config.upstream,
        secrets.exchange_api_key.clone(),
    )?;
    tracing::info!(base_url = %config.rates.base_url, "Exchange-rate client ready");

    let generator =
        GeminiClient::from_config(&config.llm, &config.upstream, secrets.gemini_api_key.clone())?;
    tracing::info!(model = %config.llm.model, "Gemini client ready");

    let state = AppState::new(config.clone(), Arc::new(rates), Arc::new(generator));

    tracing::info!(
        "UI at http://{}:{}/",
        config.general.host,
        config.general.port
    );

    fxchat_api::start_server(&config, state).await?;

    Ok(())
}
