use super::ui;
use crate::core::{ConverterFactory, Currency};
use anyhow::Result;
use rust_decimal::Decimal;

const DEFAULT_PRECISION: u32 = 2;

/// Decimal places used when printing an amount in `target`.
pub fn display_precision(precision: Option<u32>, target: &Currency) -> u32 {
    precision
        .or_else(|| target.minor_unit_digits())
        .unwrap_or(DEFAULT_PRECISION)
}

/// Converts `amount` and renders the rounded result.
pub fn run(
    factory: &ConverterFactory,
    from: &Currency,
    to: &Currency,
    amount: Decimal,
    precision: Option<u32>,
) -> Result<String> {
    let converter = factory.get_converter(from, to)?;
    let converted = converter.checked_convert(amount)?;
    let dp = display_precision(precision, to);
    let mut rounded = converted.round_dp(dp);
    // Pad whole amounts so "900" prints as "900.00".
    rounded.rescale(dp);

    Ok(format!(
        "{} {} = {} {}\n{}",
        amount,
        from.code(),
        ui::style_text(&rounded.to_string(), ui::StyleType::TotalValue),
        to.code(),
        ui::style_text(
            &format!("rate: {}", converter.multiplier.normalize()),
            ui::StyleType::Subtle
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CurrencyRate;
    use rust_decimal_macros::dec;

    fn factory() -> ConverterFactory {
        let currencies = vec![
            Currency::new("USD", "840").with_minor_unit(2),
            Currency::new("JPY", "392").with_minor_unit(0),
            Currency::new("BHD", "048").with_minor_unit(3),
        ];
        let rates = [
            CurrencyRate::new("USD", "JPY", dec!(151.37)),
            CurrencyRate::new("USD", "BHD", dec!(0.376)),
        ];
        ConverterFactory::new(currencies, &rates).unwrap()
    }

    #[test]
    fn test_display_precision_fallbacks() {
        let jpy = Currency::new("JPY", "392").with_minor_unit(0);
        assert_eq!(display_precision(Some(4), &jpy), 4);
        assert_eq!(display_precision(None, &jpy), 0);
        assert_eq!(display_precision(None, &Currency::new("XAU", "959")), 2);
    }

    #[test]
    fn test_rounds_to_target_minor_unit() {
        let factory = factory();
        let usd = factory.currency("USD").unwrap().clone();
        let jpy = factory.currency("JPY").unwrap().clone();
        let bhd = factory.currency("BHD").unwrap().clone();

        let output = run(&factory, &usd, &jpy, dec!(10), None).unwrap();
        assert!(output.contains("1514"));
        assert!(!output.contains("1513.7 "));

        let output = run(&factory, &jpy, &bhd, dec!(15137), None).unwrap();
        assert!(output.contains("37.600"));
    }

    #[test]
    fn test_out_of_range_amount_is_error() {
        let factory = factory();
        let usd = factory.currency("USD").unwrap().clone();
        let jpy = factory.currency("JPY").unwrap().clone();
        let amount = Decimal::from_i128_with_scale(10_i128.pow(27), 0);

        let err = run(&factory, &usd, &jpy, amount, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::core::ConversionError>(),
            Some(crate::core::ConversionError::Overflow { .. })
        ));
    }

    #[test]
    fn test_unknown_source_is_error() {
        let factory = factory();
        let usd = factory.currency("USD").unwrap().clone();
        let err = run(&factory, &Currency::new("XYZ", ""), &usd, dec!(1), None).unwrap_err();
        assert!(err.to_string().contains("XYZ"));
    }
}
