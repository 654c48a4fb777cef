//! Shareholder display formatting
//!
//! Formats the roster for terminal output as a table with totals.

use crate::config::settings::Settings;
use crate::models::Roster;
use crate::services::shareholder::RosterSummary;

/// Format the roster as a table followed by a totals row
pub fn format_shareholder_list(roster: &Roster, settings: &Settings) -> String {
    if roster.is_empty() {
        return "No shareholders found.".to_string();
    }

    let symbol = settings.currency_symbol.as_str();

    // Calculate column widths
    let name_width = roster
        .rows()
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let id_width = roster
        .rows()
        .iter()
        .map(|s| s.tax_id.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}  {:>18}\n",
        "Name", "Tax ID", "Shares", "Value/Share", "Capital",
    ));
    output.push_str(&separator(name_width, id_width));

    for s in roster.rows() {
        output.push_str(&format!(
            "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}  {:>18}\n",
            s.name,
            s.tax_id,
            s.shares,
            s.value_per_share.format_with_symbol(symbol),
            s.capital().format_with_symbol(symbol),
        ));
    }

    let summary = RosterSummary::of(roster);
    output.push_str(&separator(name_width, id_width));
    output.push_str(&format!(
        "{:<name_width$}  {:<id_width$}  {:>8}  {:>16}  {:>18}\n",
        "TOTAL",
        "",
        summary.total_shares,
        "",
        summary.total_capital.format_with_symbol(symbol),
    ));

    output
}

fn separator(name_width: usize, id_width: usize) -> String {
    format!(
        "{:-<name_width$}  {:-<id_width$}  {:->8}  {:->16}  {:->18}\n",
        "", "", "", "", "",
    )
}
