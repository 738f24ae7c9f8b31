//! Loads currency and rate tables from JSON files.

use crate::core::config::AppConfig;
use crate::core::{ConverterFactory, Currency, CurrencyRate};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One expected conversion from a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    #[serde(rename = "FromAlfa3")]
    pub from: String,
    #[serde(rename = "ToAlfa3")]
    pub to: String,
    #[serde(rename = "FromAmount")]
    pub from_amount: Decimal,
    #[serde(rename = "ToAmount")]
    pub to_amount: Decimal,
}

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P, what: &str) -> Result<Vec<T>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} table: {}", path.display()))?;
    let rows: Vec<T> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {what} table: {}", path.display()))?;
    debug!(rows = rows.len(), "Loaded {} table from {}", what, path.display());
    Ok(rows)
}

pub fn load_currencies<P: AsRef<Path>>(path: P) -> Result<Vec<Currency>> {
    load_json(path, "currency")
}

pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<Vec<CurrencyRate>> {
    load_json(path, "rate")
}

pub fn load_expectations<P: AsRef<Path>>(path: P) -> Result<Vec<Expectation>> {
    load_json(path, "expectation")
}

/// Reads both tables named in `config` and builds the converter factory.
pub fn load_factory(config: &AppConfig) -> Result<ConverterFactory> {
    let currencies = load_currencies(config.currencies_path())?;
    let rates = load_rates(config.rates_path())?;
    let factory = ConverterFactory::new(currencies, &rates)
        .context("Failed to build conversion graph from rate table")?;
    Ok(factory)
}
