pub mod convert;
pub mod route;
pub mod setup;
pub mod ui;
pub mod verify;

use crate::core::{ConverterFactory, Currency};
use tracing::warn;

/// Looks up a currency by code. Codes missing from the currency table still
/// produce a bare `Currency`, so the core decides whether the conversion is
/// possible (same-currency conversions always are).
pub fn currency_arg(factory: &ConverterFactory, code: &str) -> Currency {
    factory.currency(code).cloned().unwrap_or_else(|| {
        warn!("Currency {} is not in the currency table", code);
        Currency::new(code, "")
    })
}
