use super::ui;
use crate::core::composer::compose;
use crate::core::{ConverterFactory, Currency, Route};
use anyhow::Result;
use comfy_table::Cell;

fn display_as_table(route: &Route) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
        ui::header_cell("Source"),
    ]);

    for (i, edge) in route.edges().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(edge.from.to_string()),
            Cell::new(edge.to.to_string()),
            ui::decimal_cell(edge.rate),
            Cell::new(edge.kind.to_string()),
        ]);
    }

    table.to_string()
}

/// Renders the hops used to convert `from` into `to` and the composed multiplier.
pub fn run(factory: &ConverterFactory, from: &Currency, to: &Currency) -> Result<String> {
    let route = factory.route(from, to)?;
    let multiplier = compose(route.edges())?;

    let mut output = format!(
        "Route: {}\n\n",
        ui::style_text(&format!("{} -> {}", from.code(), to.code()), ui::StyleType::Title)
    );
    if route.is_empty() {
        output.push_str(&ui::style_text(
            "Same currency, no conversion needed",
            ui::StyleType::Subtle,
        ));
    } else {
        output.push_str(&display_as_table(&route));
    }
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text(
            &format!("Multiplier ({} hops):", route.hops()),
            ui::StyleType::TotalLabel
        ),
        ui::style_text(&multiplier.normalize().to_string(), ui::StyleType::TotalValue)
    ));
    Ok(output)
}
