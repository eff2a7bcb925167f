//! CSV export of snapshot rows

use std::io::Write;

use crate::error::{FinError, FinResult};
use crate::services::SnapshotRow;

/// Write snapshot rows as CSV: a `month` column then one column per account
pub fn write_csv<W: Write>(writer: W, accounts: &[String], rows: &[SnapshotRow]) -> FinResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(std::iter::once("month").chain(accounts.iter().map(String::as_str)))
        .map_err(|e| FinError::Export(e.to_string()))?;

    for row in rows {
        let record: Vec<String> = std::iter::once(row.label.to_string())
            .chain(row.values.iter().map(|value| value.to_string()))
            .collect();
        csv_writer
            .write_record(&record)
            .map_err(|e| FinError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinError::Export(e.to_string()))?;

    Ok(())
}
