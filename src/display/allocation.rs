//! Allocation report formatting

use rust_decimal::Decimal;

use crate::config::settings::Settings;
use crate::models::Money;
use crate::services::allocation::AllocationResult;

/// Format the allocation report for a period
///
/// The headline figures are always printed; the per-shareholder table is
/// replaced by a notice when there is nothing to show.
pub fn format_allocation(result: &AllocationResult, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Cost allocation for {}\n\n", result.period));
    output.push_str(&format!(
        "  Total costs:      {}\n",
        result.total_costs.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Value per share:  {}\n",
        format_per_share(result.per_share_value, symbol)
    ));
    output.push_str(&format!("  Entries:          {}\n\n", result.entry_count));

    if result.is_empty() {
        output.push_str("No data for this period.\n");
        return output;
    }

    let name_width = result
        .lines
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);
    let id_width = result
        .lines
        .iter()
        .map(|l| l.tax_id.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    output.push_str(&format!(
        "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}\n",
        "Name", "Tax ID", "Shares", "Owed",
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<id_width$}  {:->8}  {:->16}\n",
        "", "", "", "",
    ));

    for line in &result.lines {
        output.push_str(&format!(
            "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}\n",
            line.name,
            line.tax_id,
            line.shares,
            line.owed.format_with_symbol(symbol),
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:-<id_width$}  {:->8}  {:->16}\n",
        "", "", "", "",
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}\n",
        "TOTAL",
        "",
        result.lines.iter().map(|l| u64::from(l.shares)).sum::<u64>(),
        result.total_owed().format_with_symbol(symbol),
    ));

    output
}

/// Per-share value shown to the cent, like every other amount
fn format_per_share(value: Decimal, symbol: &str) -> String {
    Money::from_decimal(value).format_with_symbol(symbol)
}
