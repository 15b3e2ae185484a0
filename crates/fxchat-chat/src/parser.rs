//! Conversion-intent extraction from free text.
//!
//! Tokenizes on whitespace and runs two independent left-to-right passes:
//! one for the amount, one for up to two currency references.

use fxchat_core::directory;

/// Words skipped by the currency pass ("100 yen to dollar").
static CONNECTOR_WORDS: &[&str] = &["to", "into", "in"];

/// What the extractor found in a message. Any part may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConversionIntent {
    pub amount: Option<f64>,
    pub from: Option<&'static str>,
    pub to: Option<&'static str>,
}

impl ConversionIntent {
    /// The `(amount, from, to)` triple when the message names all three and
    /// the amount is non-zero.
    pub fn complete(&self) -> Option<(f64, &'static str, &'static str)> {
        match (self.amount, self.from, self.to) {
            (Some(amount), Some(from), Some(to)) if amount != 0.0 => Some((amount, from, to)),
            _ => None,
        }
    }
}

/// Heuristic extractor for "convert 100 dollar to yen" style messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentExtractor;

impl IntentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, message: &str) -> ConversionIntent {
        let tokens: Vec<String> = message.split_whitespace().map(str::to_lowercase).collect();
        let (from, to) = self.extract_currencies(&tokens);

        ConversionIntent {
            amount: self.extract_amount(&tokens),
            from,
            to,
        }
    }

    /// First token that parses as a finite number.
    fn extract_amount(&self, tokens: &[String]) -> Option<f64> {
        tokens
            .iter()
            .find_map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
    }

    /// First and second tokens that resolve to a currency, skipping connectors.
    fn extract_currencies(&self, tokens: &[String]) -> (Option<&'static str>, Option<&'static str>) {
        let mut found = tokens
            .iter()
            .filter(|t| !CONNECTOR_WORDS.contains(&t.as_str()))
            .filter_map(|t| directory::resolve_token(t));

        let from = found.next();
        let to = found.next();
        (from, to)
    }
}
