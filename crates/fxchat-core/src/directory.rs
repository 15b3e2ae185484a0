//! Country and currency-name directory.
//!
//! Maps lowercase common names ("japan", "dollar", "new zealand") to currency
//! codes. The table is static and many-to-one. Some entries resolve to codes
//! outside [`CurrencyCode::ALL`]; callers that convert must check support
//! themselves.

use crate::currency::CurrencyCode;

static COUNTRY_TO_CURRENCY: &[(&str, &str)] = &[
    // North America
    ("united states", "USD"),
    ("canada", "CAD"),
    ("mexico", "MXN"),
    // Europe
    ("european union", "EUR"),
    ("united kingdom", "GBP"),
    ("switzerland", "CHF"),
    // Asia
    ("india", "INR"),
    ("china", "CNY"),
    ("japan", "JPY"),
    ("south korea", "KRW"),
    ("singapore", "SGD"),
    ("malaysia", "MYR"),
    ("indonesia", "IDR"),
    ("thailand", "THB"),
    ("philippines", "PHP"),
    ("vietnam", "VND"),
    // Oceania
    ("australia", "AUD"),
    ("new zealand", "NZD"),
    // Common currency names
    ("dollar", "USD"),
    ("euro", "EUR"),
    ("pound", "GBP"),
    ("yen", "JPY"),
    ("rupee", "INR"),
    ("yuan", "CNY"),
];

/// Look up the currency code for a country or currency name.
///
/// Case-insensitive and whitespace-trimmed, otherwise an exact match. Returns
/// `None` for anything not in the table.
pub fn lookup(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    COUNTRY_TO_CURRENCY
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, code)| *code)
}

/// Resolve a single chat token to a currency code.
///
/// Tries the alias table first, then accepts the token itself when it is a
/// supported code written in any case ("usd", "Eur").
pub fn resolve_token(token: &str) -> Option<&'static str> {
    lookup(token).or_else(|| {
        token
            .trim()
            .to_uppercase()
            .parse::<CurrencyCode>()
            .ok()
            .map(|code| code.as_str())
    })
}

/// Every alias rendered as `"Title Case Name: CODE"`, in table order.
pub fn supported_countries() -> Vec<String> {
    COUNTRY_TO_CURRENCY
        .iter()
        .map(|(name, code)| format!("{}: {}", title_case(name), code))
        .collect()
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
