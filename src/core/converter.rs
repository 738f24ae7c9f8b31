//! Converter factory: the public entry point of the conversion core.

use crate::core::composer::compose;
use crate::core::currency::Currency;
use crate::core::error::ConversionError;
use crate::core::graph::ConversionGraph;
use crate::core::rate::CurrencyRate;
use crate::core::resolver::{Route, resolve};
use rust_decimal::Decimal;
use tracing::debug;

/// A conversion bound to a source and target currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    pub from: Currency,
    pub to: Currency,
    pub multiplier: Decimal,
}

impl Converter {
    /// Panics if the product leaves the `Decimal` range, see [`Converter::checked_convert`].
    pub fn convert(&self, amount: Decimal) -> Decimal {
        amount * self.multiplier
    }

    pub fn checked_convert(&self, amount: Decimal) -> Result<Decimal, ConversionError> {
        amount
            .checked_mul(self.multiplier)
            .ok_or_else(|| ConversionError::Overflow {
                from: self.from.alphabetic_code.clone(),
                to: self.to.alphabetic_code.clone(),
            })
    }
}

/// Builds the conversion graph once and hands out converters against it.
#[derive(Debug, Clone)]
pub struct ConverterFactory {
    graph: ConversionGraph,
}

impl ConverterFactory {
    pub fn new(
        currencies: impl IntoIterator<Item = Currency>,
        rates: &[CurrencyRate],
    ) -> Result<Self, ConversionError> {
        let graph = ConversionGraph::build(currencies, rates)?;
        Ok(Self { graph })
    }

    pub fn graph(&self) -> &ConversionGraph {
        &self.graph
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.graph.currency(code)
    }

    /// Resolves the route used to convert `from` into `to`.
    pub fn route(&self, from: &Currency, to: &Currency) -> Result<Route, ConversionError> {
        if from == to {
            return Ok(Route::default());
        }
        if !self.graph.contains(from.code()) {
            return Err(ConversionError::UnknownCurrency(from.alphabetic_code.clone()));
        }
        resolve(&self.graph, from.code(), to.code()).ok_or_else(|| ConversionError::NoRoute {
            from: from.alphabetic_code.clone(),
            to: to.alphabetic_code.clone(),
        })
    }

    pub fn get_converter(
        &self,
        from: &Currency,
        to: &Currency,
    ) -> Result<Converter, ConversionError> {
        let route = self.route(from, to)?;
        let multiplier = compose(route.edges())?;
        debug!(
            from = from.code(),
            to = to.code(),
            hops = route.hops(),
            %multiplier,
            "Created converter"
        );
        Ok(Converter {
            from: from.clone(),
            to: to.clone(),
            multiplier,
        })
    }
}
