//! Error kinds raised while building the conversion graph or resolving a converter.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The source currency is not referenced by any rate.
    #[error("No conversion rate found for currency: {0}")]
    UnknownCurrency(String),

    /// Both currencies are known but sit in disconnected parts of the graph.
    #[error("No conversion rate found between {from} and {to}")]
    NoRoute { from: String, to: String },

    /// A rate in the input data cannot be placed in the graph.
    #[error("Malformed rate {ticker}: {reason}")]
    MalformedRate { ticker: String, reason: String },

    /// The composed multiplier or a converted amount exceeds the `Decimal` range.
    #[error("Conversion from {from} to {to} is out of range")]
    Overflow { from: String, to: String },
}

impl ConversionError {
    pub(crate) fn malformed(ticker: &str, reason: impl Into<String>) -> Self {
        ConversionError::MalformedRate {
            ticker: ticker.to_string(),
            reason: reason.into(),
        }
    }
}
