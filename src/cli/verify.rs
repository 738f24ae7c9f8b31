//! Checks converter output against a fixture of expected conversions.

use super::ui;
use crate::cli;
use crate::core::ConverterFactory;
use crate::tables::Expectation;
use comfy_table::Cell;
use rust_decimal::Decimal;
use tracing::debug;

/// Expected amounts in fixtures carry two decimal places.
const FIXTURE_PRECISION: u32 = 2;

#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub expectation: Expectation,
    pub actual: Option<Decimal>,
    pub error: Option<String>,
}

impl VerifyOutcome {
    pub fn passed(&self) -> bool {
        self.actual == Some(self.expectation.to_amount)
    }
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    pub outcomes: Vec<VerifyOutcome>,
}

impl VerifyReport {
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("From"),
            ui::header_cell("To"),
            ui::header_cell("Amount"),
            ui::header_cell("Expected"),
            ui::header_cell("Actual"),
            ui::header_cell("Status"),
        ]);

        for outcome in &self.outcomes {
            let expectation = &outcome.expectation;
            let actual = match &outcome.error {
                Some(error) => Cell::new(ui::style_text(error, ui::StyleType::Error)),
                None => ui::optional_decimal_cell(outcome.actual),
            };
            table.add_row(vec![
                Cell::new(&expectation.from),
                Cell::new(&expectation.to),
                ui::decimal_cell(expectation.from_amount),
                ui::decimal_cell(expectation.to_amount),
                actual,
                ui::status_cell(outcome.passed()),
            ]);
        }

        let passed = self.outcomes.len() - self.failures();
        let summary_style = if self.failures() == 0 {
            ui::StyleType::TotalValue
        } else {
            ui::StyleType::Error
        };
        format!(
            "{}\n\n{} {}",
            table,
            ui::style_text("Passed:", ui::StyleType::TotalLabel),
            ui::style_text(&format!("{passed}/{}", self.outcomes.len()), summary_style)
        )
    }
}

fn check(factory: &ConverterFactory, expectation: &Expectation) -> VerifyOutcome {
    let from = cli::currency_arg(factory, &expectation.from);
    let to = cli::currency_arg(factory, &expectation.to);

    let result = factory
        .get_converter(&from, &to)
        .and_then(|converter| converter.checked_convert(expectation.from_amount))
        .map(|converted| converted.round_dp(FIXTURE_PRECISION))
        .map_err(|e| e.to_string());

    match result {
        Ok(actual) => VerifyOutcome {
            expectation: expectation.clone(),
            actual: Some(actual),
            error: None,
        },
        Err(error) => VerifyOutcome {
            expectation: expectation.clone(),
            actual: None,
            error: Some(error),
        },
    }
}

/// Converts every expectation and records how it compares.
pub fn run(factory: &ConverterFactory, expectations: &[Expectation]) -> VerifyReport {
    let outcomes: Vec<VerifyOutcome> = expectations
        .iter()
        .map(|expectation| check(factory, expectation))
        .collect();
    let report = VerifyReport { outcomes };
    debug!(
        total = report.outcomes.len(),
        failures = report.failures(),
        "Verified expectations"
    );
    report
}
