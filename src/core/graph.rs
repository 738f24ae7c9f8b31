//! Conversion graph built from quoted rates and their reciprocals.

use crate::core::currency::Currency;
use crate::core::error::ConversionError;
use crate::core::rate::{CurrencyRate, EdgeKind, RateEdge};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Adjacency list keyed by alphabetic code.
///
/// Each node keeps its outgoing edges in insertion order so that path search
/// visits neighbours in the same order on every run.
#[derive(Debug, Clone, Default)]
pub struct ConversionGraph {
    currencies: HashMap<String, Currency>,
    adjacency: HashMap<String, Vec<RateEdge>>,
}

impl ConversionGraph {
    /// Builds the graph from a currency set and the quoted rates between them.
    ///
    /// Every rate is inserted as given; its reciprocal is added unless the
    /// opposite direction is already present. Quoted rates always replace
    /// earlier edges for the same pair, so an explicitly quoted reverse rate
    /// wins over a synthetic one.
    pub fn build(
        currencies: impl IntoIterator<Item = Currency>,
        rates: &[CurrencyRate],
    ) -> Result<Self, ConversionError> {
        let mut graph = ConversionGraph::default();

        for currency in currencies {
            let code = currency.alphabetic_code.clone();
            if graph.currencies.insert(code.clone(), currency).is_some() {
                warn!("Duplicate currency {} in currency table, keeping last", code);
            }
        }

        for rate in rates {
            let label = rate.label();
            let from = graph.lookup(&rate.from, &label)?;
            let to = graph.lookup(&rate.to, &label)?;

            if rate.rate <= Decimal::ZERO {
                return Err(ConversionError::malformed(
                    &label,
                    format!("rate must be positive, got {}", rate.rate),
                ));
            }

            if from == to {
                warn!("Skipping self-referential rate {}", label);
                continue;
            }

            let forward = RateEdge {
                from,
                to,
                rate: rate.rate,
                kind: EdgeKind::Quoted {
                    ticker: rate.ticker.clone(),
                },
            };
            let inverse = forward.inverse();

            graph.upsert(forward);
            // A synthetic reverse edge is refreshed; a quoted one is left alone.
            if graph
                .edge(inverse.from.code(), inverse.to.code())
                .is_none_or(RateEdge::is_inverse)
            {
                graph.upsert(inverse);
            }
        }

        debug!(
            currencies = graph.currencies.len(),
            nodes = graph.adjacency.len(),
            edges = graph.edge_count(),
            "Built conversion graph"
        );
        Ok(graph)
    }

    fn lookup(&self, code: &str, label: &str) -> Result<Currency, ConversionError> {
        self.currencies.get(code).cloned().ok_or_else(|| {
            ConversionError::malformed(label, format!("unknown currency code {code}"))
        })
    }

    fn upsert(&mut self, edge: RateEdge) {
        // Create the destination node too, so it is a key even before its own edges arrive.
        self.adjacency
            .entry(edge.to.alphabetic_code.clone())
            .or_default();

        let edges = self
            .adjacency
            .entry(edge.from.alphabetic_code.clone())
            .or_default();
        match edges.iter_mut().find(|existing| existing.to == edge.to) {
            Some(existing) => *existing = edge,
            None => edges.push(edge),
        }
    }

    /// Outgoing edges of `code`. Unknown codes have no neighbours.
    pub fn neighbors(&self, code: &str) -> &[RateEdge] {
        self.adjacency.get(code).map_or(&[], Vec::as_slice)
    }

    /// Whether any edge touches `code`.
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    /// A currency from the input set, whether or not it has edges.
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&RateEdge> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to.alphabetic_code == to)
    }

    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
