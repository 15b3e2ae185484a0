//! Error types for rate lookups.

/// Why an exchange rate could not be obtained.
///
/// Callers above [`crate::RateFetcher`] never see these; they are logged and
/// collapsed into "no rate available".
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rate service returned status {0}")]
    Status(u16),
    #[error("could not decode rate response: {0}")]
    Decode(String),
    #[error("target currency {0} not found in rates")]
    MissingRate(String),
    #[error("rate for {code} is not a positive number: {value}")]
    InvalidRate { code: String, value: f64 },
}

impl From<reqwest::Error> for RateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RateError::Decode(err.to_string())
        } else {
            RateError::Transport(err.to_string())
        }
    }
}
