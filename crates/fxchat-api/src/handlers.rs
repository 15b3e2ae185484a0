//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its JSON body via axum extractors, talks to the
//! services in `AppState`, and returns JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fxchat_chat::response::round2;
use fxchat_chat::INVALID_QUERY_REPLY;
use fxchat_core::directory;
use fxchat_core::CurrencyCode;

use crate::error::ApiError;
use crate::state::AppState;

/// The single-page chat and converter UI.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub from_currency: Option<String>,
    pub to_currency: Option<String>,
    /// A JSON number or a numeric string.
    pub amount: Option<Value>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub exchange_rate: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    pub supported: Vec<String>,
    pub countries: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET / - the UI page.
pub async fn home() -> impl IntoResponse {
    Html(INDEX_HTML)
}

/// POST /chat - answer a free-text message.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let message = req.message.unwrap_or_default();

    let reply = state.chat.handle_message(&message).await?;
    tracing::debug!(source = ?reply.source, "Chat reply ready");

    let response = if reply.text.is_empty() {
        INVALID_QUERY_REPLY.to_string()
    } else {
        reply.text
    };

    Ok(Json(ChatResponse { response }))
}

/// POST /convert - convert an amount between two supported currencies.
pub async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(req) = payload?;

    let from = req.from_currency.map(|c| c.trim().to_uppercase()).unwrap_or_default();
    let to = req.to_currency.map(|c| c.trim().to_uppercase()).unwrap_or_default();
    let raw_amount = req.amount.filter(|v| !is_missing_amount(v));

    let raw_amount = match raw_amount {
        Some(a) if !from.is_empty() && !to.is_empty() => a,
        _ => {
            return Err(ApiError::BadRequest(
                "Please provide all required fields: from_currency, to_currency, and amount"
                    .to_string(),
            ))
        }
    };

    if !CurrencyCode::is_supported(&from) || !CurrencyCode::is_supported(&to) {
        return Err(ApiError::BadRequest(format!(
            "Currency not supported. Supported currencies are: {}",
            CurrencyCode::supported_list()
        )));
    }

    let amount = parse_amount(&raw_amount)
        .ok_or_else(|| ApiError::BadRequest("Invalid amount provided".to_string()))?;

    if amount <= 0.0 {
        return Err(ApiError::BadRequest(
            "Amount must be greater than 0".to_string(),
        ));
    }

    let exchange_rate = state
        .rates
        .rate(&from, &to)
        .await
        .ok_or_else(|| ApiError::Internal("Failed to fetch exchange rate".to_string()))?;

    tracing::info!(from = %from, to = %to, amount, exchange_rate, "Converted currency");

    Ok(Json(ConvertResponse {
        from_currency: from,
        to_currency: to,
        amount,
        converted_amount: round2(amount * exchange_rate),
        exchange_rate,
    }))
}

/// GET /currencies - supported codes and every known country/currency name.
pub async fn currencies() -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        supported: CurrencyCode::ALL.iter().map(|c| c.to_string()).collect(),
        countries: directory::supported_countries(),
    })
}

/// GET /health - liveness and uptime.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Null, blank and zero amounts count as not provided.
fn is_missing_amount(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) if s.trim().is_empty() => true,
        other => parse_amount(other) == Some(0.0),
    }
}

/// Accept a JSON number or a string holding a number; reject anything else.
fn parse_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}
