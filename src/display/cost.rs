//! Cost display formatting
//!
//! Formats the cost ledger and the cost center list for terminal output.

use std::fmt::Write;

use crate::config::settings::Settings;
use crate::models::{CostCenter, CostEntry, CostLedger, EntryDate, ALL_CENTERS};

/// Format cost entries as a table with a total row
pub fn format_cost_list(ledger: &CostLedger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return "No cost entries found.".to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let dates: Vec<String> = ledger
        .rows()
        .iter()
        .map(|e| format_entry_date(&e.date, &settings.date_format))
        .collect();

    let date_width = dates.iter().map(|d| d.chars().count()).max().unwrap_or(4).max(4);
    let center_width = ledger
        .rows()
        .iter()
        .map(|e| e.cost_center.chars().count())
        .max()
        .unwrap_or(11)
        .max(11);
    let desc_width = ledger
        .rows()
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<date_width$}  {:<center_width$}  {:<desc_width$}  {:>14}\n",
        "Date", "Cost Center", "Description", "Amount",
    ));
    output.push_str(&format!(
        "{:-<date_width$}  {:-<center_width$}  {:-<desc_width$}  {:->14}\n",
        "", "", "", "",
    ));

    for (entry, date) in ledger.rows().iter().zip(&dates) {
        output.push_str(&format!(
            "{:<date_width$}  {:<center_width$}  {:<desc_width$}  {:>14}\n",
            date,
            entry.cost_center,
            truncate(&entry.description, desc_width),
            entry.amount.format_with_symbol(symbol),
        ));
    }

    output.push_str(&format!(
        "{:-<date_width$}  {:-<center_width$}  {:-<desc_width$}  {:->14}\n",
        "", "", "", "",
    ));
    output.push_str(&format!(
        "{:<date_width$}  {:<center_width$}  {:<desc_width$}  {:>14}\n",
        "TOTAL",
        format!("{} entries", ledger.len()),
        "",
        ledger.total().format_with_symbol(symbol),
    ));

    output
}

/// Format a single entry on one line
pub fn format_cost_entry(entry: &CostEntry, settings: &Settings) -> String {
    let description = if entry.description.is_empty() {
        String::new()
    } else {
        format!(" - {}", entry.description)
    };

    format!(
        "{}  {}{}  {}",
        format_entry_date(&entry.date, &settings.date_format),
        entry.cost_center,
        description,
        entry.amount.format_with_symbol(&settings.currency_symbol),
    )
}

/// List the fixed cost centers and the ones present in the ledger
///
/// The filter option list puts the "Todos" sentinel first.
pub fn format_cost_centers(in_use: &[String]) -> String {
    let mut output = String::new();

    output.push_str("Cost centers:\n");
    for center in CostCenter::ALL {
        output.push_str(&format!("  {:<10}  {}\n", center.slug(), center.label()));
    }

    output.push_str("\nFilter options:\n");
    output.push_str(&format!("  {}\n", ALL_CENTERS));
    for label in in_use {
        output.push_str(&format!("  {}\n", label));
    }

    output
}

/// Render a date with the display format, or as stored when it does not parse
pub fn format_entry_date(date: &EntryDate, format: &str) -> String {
    let Some(parsed) = date.parsed() else {
        return date.raw().to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", parsed.format(format)) {
        Ok(()) => out,
        Err(_) => parsed.format("%Y-%m-%d").to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn entry(d: u32, center: CostCenter, desc: &str, cents: i64) -> CostEntry {
        CostEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            center,
            desc,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_ledger() {
        let output = format_cost_list(&CostLedger::new(), &Settings::default());
        assert_eq!(output, "No cost entries found.");
    }

    #[test]
    fn test_cost_list() {
        let ledger = CostLedger::new()
            .append(entry(5, CostCenter::Feed, "Feed purchase", 12000))
            .append(entry(6, CostCenter::Veterinary, "Vet visit", 18000));

        let output = format_cost_list(&ledger, &Settings::default());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Date"));
        assert!(lines[2].starts_with("05/03/2024"));
        assert!(lines[2].contains("Alimentação"));
        assert!(lines[3].contains("R$ 180.00"));
        assert!(lines[5].contains("2 entries"));
        assert!(lines[5].contains("R$ 300.00"));
    }

    #[test]
    fn test_unparseable_date_shown_raw() {
        let date = EntryDate::from_raw("ontem");
        assert_eq!(format_entry_date(&date, "%d/%m/%Y"), "ontem");
    }

    #[test]
    fn test_custom_date_format() {
        let date = EntryDate::from_raw("2024-03-05");
        assert_eq!(format_entry_date(&date, "%Y/%m/%d"), "2024/03/05");
    }

    #[test]
    fn test_cost_entry_line() {
        let line = format_cost_entry(&entry(5, CostCenter::Salt, "Sal mineral", 5000), &Settings::default());
        assert_eq!(line, "05/03/2024  Sal - Sal mineral  R$ 50.00");
    }

    #[test]
    fn test_cost_centers_lists_all_first() {
        let output = format_cost_centers(&["Sal".to_string()]);

        assert!(output.contains("labor       Peão"));
        assert!(output.contains("Filter options:\n  Todos\n  Sal\n"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
    }
}
