//! The closed set of currency codes accepted for conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported currency code.
///
/// `Usdt` is a pseudo-currency pegged to the dollar; rate lookups treat it as
/// `Usd` (see `fxchat_rates::normalize_code`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Jpy,
    Gbp,
    Aud,
    Cad,
    Chf,
    Cny,
    Hkd,
    Nzd,
    Sek,
    Krw,
    Sgd,
    Inr,
    Usdt,
}

impl CurrencyCode {
    /// Every supported code, in display order.
    pub const ALL: [CurrencyCode; 15] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Jpy,
        CurrencyCode::Gbp,
        CurrencyCode::Aud,
        CurrencyCode::Cad,
        CurrencyCode::Chf,
        CurrencyCode::Cny,
        CurrencyCode::Hkd,
        CurrencyCode::Nzd,
        CurrencyCode::Sek,
        CurrencyCode::Krw,
        CurrencyCode::Sgd,
        CurrencyCode::Inr,
        CurrencyCode::Usdt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Jpy => "JPY",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Aud => "AUD",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Chf => "CHF",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Hkd => "HKD",
            CurrencyCode::Nzd => "NZD",
            CurrencyCode::Sek => "SEK",
            CurrencyCode::Krw => "KRW",
            CurrencyCode::Sgd => "SGD",
            CurrencyCode::Inr => "INR",
            CurrencyCode::Usdt => "USDT",
        }
    }

    /// Whether `code` is one of the supported codes (exact, uppercase).
    pub fn is_supported(code: &str) -> bool {
        code.parse::<CurrencyCode>().is_ok()
    }

    /// Comma-separated list of all supported codes, e.g. `"USD, EUR, ..."`.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the supported codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct UnsupportedCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnsupportedCurrency(s.to_string()))
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = UnsupportedCurrency;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
