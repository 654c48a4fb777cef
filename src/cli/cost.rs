//! Cost CLI commands
//!
//! Implements CLI commands for recording, listing and removing costs.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::settings::Settings;
use crate::display::{format_cost_centers, format_cost_entry, format_cost_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{CostFilter, Money, RemovalOutcome};
use crate::services::CostService;
use crate::storage::Storage;

/// Cost subcommands
#[derive(Subcommand)]
pub enum CostCommands {
    /// Record a new cost
    Add {
        /// Cost center (label or slug, see `cost centers`)
        center: String,
        /// Amount (e.g., "150" or "320.50")
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },
    /// List costs, optionally filtered
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show the cost centers
    Centers,
    /// Remove the costs matching a filter
    #[command(alias = "rm")]
    Remove {
        #[command(flatten)]
        filter: FilterArgs,
        /// Remove without asking; otherwise only a preview is shown
        #[arg(short, long)]
        yes: bool,
    },
}

/// Filters shared by `list` and `remove`
#[derive(Args)]
pub struct FilterArgs {
    /// Case-insensitive text contained in the description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
    /// Exact date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Cost center label or slug; "Todos" means every center
    #[arg(short, long)]
    pub center: Option<String>,
}

impl FilterArgs {
    /// Build the ledger filter
    pub fn to_filter(&self) -> LedgerResult<CostFilter> {
        let mut filter = CostFilter::new().date(self.date.as_deref().map(parse_date).transpose()?);

        if let Some(description) = &self.description {
            filter = filter.description(description.as_str());
        }
        if let Some(center) = &self.center {
            filter = filter.center(center);
        }

        Ok(filter)
    }
}

fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
    })
}

/// Handle a cost command
pub fn handle_cost_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CostCommands,
) -> LedgerResult<()> {
    let service = CostService::new(storage);

    match cmd {
        CostCommands::Add {
            center,
            amount,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                LedgerError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let entry = service.record(date, &center, &description, amount)?;
            println!("Recorded cost: {}", format_cost_entry(&entry, settings));
        }

        CostCommands::List { filter } => {
            let ledger = service.list(&filter.to_filter()?);
            println!("{}", format_cost_list(&ledger, settings));
        }

        CostCommands::Centers => {
            print!("{}", format_cost_centers(&service.centers_in_use()));
        }

        CostCommands::Remove { filter, yes } => {
            let filter = filter.to_filter()?;
            let selection = service.list(&filter);

            if selection.is_empty() {
                println!("No cost entries selected; nothing removed.");
                return Ok(());
            }

            if !yes {
                println!("{}", format_cost_list(&selection, settings));
                println!();
                println!(
                    "{} entries would be removed. Re-run with --yes to remove them.",
                    selection.len()
                );
                return Ok(());
            }

            match service.remove_matching(selection.rows())? {
                RemovalOutcome::NothingSelected => {
                    println!("No cost entries selected; nothing removed.");
                }
                RemovalOutcome::Removed { count } => {
                    println!("Removed {} cost entries.", count);
                }
            }
        }
    }

    Ok(())
}
