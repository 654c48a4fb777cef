//! CSV export of allocation reports

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::allocation::AllocationResult;

/// Header row of the allocation export
pub const ALLOCATION_COLUMNS: [&str; 4] = ["Name", "TaxId", "Shares", "Owed"];

/// Write the allocation lines as CSV: a header then one row per shareholder
pub fn allocation_csv<W: Write>(result: &AllocationResult, writer: W) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(ALLOCATION_COLUMNS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for line in &result.lines {
        let shares = line.shares.to_string();
        let owed = line.owed.to_plain_string();
        csv.write_record([
            line.name.as_str(),
            line.tax_id.as_str(),
            shares.as_str(),
            owed.as_str(),
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
