//! Exchange rate shapes: the raw table row and the resolved graph edge

use crate::core::currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A known rate as it appears in the rate table, referencing currencies by code.
///
/// `amount_in(to) = amount_in(from) * rate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    #[serde(rename = "Ticker", default)]
    pub ticker: Option<String>,
    #[serde(rename = "Rate")]
    pub rate: Decimal,
    #[serde(rename = "FromAlfa3")]
    pub from: String,
    #[serde(rename = "ToAlfa3")]
    pub to: String,
}

impl CurrencyRate {
    pub fn new(from: &str, to: &str, rate: Decimal) -> Self {
        Self {
            ticker: None,
            rate,
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// The ticker if present, otherwise `FROMTO`.
    pub fn label(&self) -> String {
        self.ticker
            .clone()
            .unwrap_or_else(|| format!("{}{}", self.from, self.to))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Supplied by the rate table.
    Quoted { ticker: Option<String> },
    /// Reciprocal of a quoted rate in the opposite direction.
    Inverse,
}

impl Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Quoted { ticker: Some(ticker) } => write!(f, "quoted ({ticker})"),
            EdgeKind::Quoted { ticker: None } => write!(f, "quoted"),
            EdgeKind::Inverse => write!(f, "inverse"),
        }
    }
}

/// A directed edge of the conversion graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEdge {
    pub from: Currency,
    pub to: Currency,
    pub rate: Decimal,
    pub kind: EdgeKind,
}

impl RateEdge {
    pub fn is_inverse(&self) -> bool {
        self.kind == EdgeKind::Inverse
    }

    /// Builds the synthetic opposite edge. Callers guarantee `rate > 0`.
    pub(crate) fn inverse(&self) -> RateEdge {
        RateEdge {
            from: self.to.clone(),
            to: self.from.clone(),
            rate: Decimal::ONE / self.rate,
            kind: EdgeKind::Inverse,
        }
    }
}
