//! Folds the rates along a route into a single multiplier.

use crate::core::error::ConversionError;
use crate::core::rate::RateEdge;
use rust_decimal::Decimal;

/// Multiplies edge rates in route order, starting from one.
///
/// No rounding is applied; any rounding to currency precision belongs to the
/// caller.
pub fn compose(route: &[RateEdge]) -> Result<Decimal, ConversionError> {
    route.iter().try_fold(Decimal::ONE, |acc, edge| {
        acc.checked_mul(edge.rate)
            .ok_or_else(|| ConversionError::Overflow {
                from: route[0].from.alphabetic_code.clone(),
                to: edge.to.alphabetic_code.clone(),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::Currency;
    use crate::core::rate::EdgeKind;
    use rust_decimal_macros::dec;

    fn edge(from: &str, to: &str, rate: Decimal) -> RateEdge {
        RateEdge {
            from: Currency::new(from, "000"),
            to: Currency::new(to, "000"),
            rate,
            kind: EdgeKind::Quoted { ticker: None },
        }
    }

    #[test]
    fn test_empty_route_is_one() {
        assert_eq!(compose(&[]).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_multiplies_in_order() {
        let route = [edge("USD", "EUR", dec!(0.90)), edge("EUR", "RUB", dec!(100.0))];
        assert_eq!(compose(&route).unwrap(), dec!(90));
    }

    #[test]
    fn test_keeps_full_precision() {
        let route = [
            edge("AAA", "BBB", dec!(1.23456789)),
            edge("BBB", "CCC", dec!(9.87654321)),
        ];
        assert_eq!(compose(&route).unwrap(), dec!(12.1932631112635269));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let route = [edge("AAA", "BBB", Decimal::MAX), edge("BBB", "CCC", dec!(10))];
        assert_eq!(
            compose(&route).unwrap_err(),
            ConversionError::Overflow {
                from: "AAA".to_string(),
                to: "CCC".to_string()
            }
        );
    }
}
