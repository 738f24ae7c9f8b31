//! Core conversion logic: currencies, rates, the conversion graph and route search

pub mod composer;
pub mod config;
pub mod converter;
pub mod currency;
pub mod error;
pub mod graph;
pub mod log;
pub mod rate;
pub mod resolver;

// Re-export main types for cleaner imports
pub use converter::{Converter, ConverterFactory};
pub use currency::Currency;
pub use error::ConversionError;
pub use graph::ConversionGraph;
pub use rate::{CurrencyRate, EdgeKind, RateEdge};
pub use resolver::Route;
