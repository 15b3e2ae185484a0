pub mod config;
pub mod currency;
pub mod directory;
pub mod error;

pub use config::{FxConfig, Secrets};
pub use currency::{CurrencyCode, UnsupportedCurrency};
pub use error::{FxError, Result};
