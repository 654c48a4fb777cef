//! Allocation CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_allocation;
use crate::error::{LedgerError, LedgerResult};
use crate::export::allocation_csv;
use crate::models::Period;
use crate::services::AllocationService;
use crate::storage::Storage;

/// Arguments of `cotas allocation`
#[derive(Args)]
pub struct AllocationArgs {
    /// Month to allocate (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub period: Option<String>,
    /// Also write the per-shareholder lines to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Handle the allocation command
pub fn handle_allocation_command(
    storage: &Storage,
    settings: &Settings,
    args: AllocationArgs,
) -> LedgerResult<()> {
    let period = match args.period.as_deref() {
        Some(s) => Period::parse(s)
            .map_err(|e| LedgerError::Validation(format!("Invalid period '{}': {}", s, e)))?,
        None => Period::current(),
    };

    let result = AllocationService::new(storage).allocate(period);
    print!("{}", format_allocation(&result, settings));

    if let Some(path) = args.csv {
        let file = File::create(&path).map_err(|e| {
            LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        allocation_csv(&result, BufWriter::new(file))?;
        println!();
        println!("Exported {} lines to {}", result.lines.len(), path.display());
    }

    Ok(())
}
