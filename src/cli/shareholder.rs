//! Shareholder CLI commands
//!
//! Implements CLI commands for the shareholder registry.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_shareholder_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::ShareholderService;
use crate::storage::Storage;

/// Shareholder subcommands
#[derive(Subcommand)]
pub enum ShareholderCommands {
    /// Add a shareholder, or update the one with the same tax id
    Add {
        /// Full name
        name: String,
        /// Tax id (CPF)
        tax_id: String,
        /// Number of shares held
        #[arg(short, long)]
        shares: u32,
        /// Value per share (e.g., "1000" or "1500.50")
        #[arg(short, long, default_value = "0")]
        value: String,
    },
    /// List shareholders with totals
    #[command(alias = "ls")]
    List,
    /// Remove a shareholder by tax id
    #[command(alias = "rm")]
    Remove {
        /// Tax id (CPF)
        tax_id: String,
    },
    /// Replace the whole roster with the rows of a CSV file
    Replace {
        /// CSV file with Name,TaxId,Shares,ValuePerShare columns
        file: PathBuf,
    },
}

/// Handle a shareholder command
pub fn handle_shareholder_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ShareholderCommands,
) -> LedgerResult<()> {
    let service = ShareholderService::new(storage);

    match cmd {
        ShareholderCommands::Add {
            name,
            tax_id,
            shares,
            value,
        } => {
            let value = Money::parse(&value).map_err(|e| {
                LedgerError::Validation(format!("Invalid value per share '{}': {}", value, e))
            })?;

            let existed = service.list().contains(tax_id.trim());
            let shareholder = service.upsert(&name, &tax_id, shares, value)?;

            let verb = if existed { "Updated" } else { "Added" };
            println!(
                "{} shareholder: {} ({}), {} shares at {}",
                verb,
                shareholder.name,
                shareholder.tax_id,
                shareholder.shares,
                shareholder
                    .value_per_share
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        ShareholderCommands::List => {
            println!("{}", format_shareholder_list(&service.list(), settings));
        }

        ShareholderCommands::Remove { tax_id } => {
            let removed = service.remove(&tax_id)?;
            if removed == 0 {
                println!("No shareholder with tax id '{}'; nothing removed.", tax_id.trim());
            } else {
                println!("Removed shareholder with tax id '{}'.", tax_id.trim());
            }
        }

        ShareholderCommands::Replace { file } => {
            let roster = service.replace_from(&file)?;
            let duplicates = roster.duplicate_tax_ids();

            println!(
                "Replaced roster with {} shareholders from {}",
                roster.len(),
                file.display()
            );
            if !duplicates.is_empty() {
                println!("Warning: duplicated tax ids: {}", duplicates.join(", "));
            }
        }
    }

    Ok(())
}
