//! Balance Report
//!
//! Month-by-month balances of one view's declared accounts.

use std::io::Write;

use crate::display::{render_markdown, render_plain, write_csv, Encoding};
use crate::error::FinResult;
use crate::models::{Ledger, View};
use crate::services::{BalanceService, SnapshotRow};

/// Balances of one view, one row per month
#[derive(Debug, Clone)]
pub struct BalanceReport {
    /// Currency of the source ledger
    pub currency: String,
    /// View the report was computed for
    pub view: View,
    /// Column headers, in declared order
    pub accounts: Vec<String>,
    /// Snapshot rows, in month order
    pub rows: Vec<SnapshotRow>,
}

impl BalanceReport {
    /// Generate a balance report for a view
    pub fn generate(ledger: &Ledger, view: View) -> Self {
        Self {
            currency: ledger.currency.clone(),
            view,
            accounts: ledger.accounts(view).to_vec(),
            rows: BalanceService::new(ledger).snapshots(view),
        }
    }

    /// Format the report as a plain aligned table
    pub fn format_terminal(&self) -> String {
        render_plain(&self.accounts, &self.rows)
    }

    /// Format the report as a markup table
    pub fn format_markdown(&self) -> String {
        render_markdown(&self.accounts, &self.rows)
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinResult<()> {
        write_csv(writer, &self.accounts, &self.rows)
    }

    /// Format the report in the given encoding
    pub fn render(&self, encoding: Encoding) -> FinResult<String> {
        encoding.render(&self.accounts, &self.rows)
    }

    /// Number of month rows
    pub fn month_count(&self) -> usize {
        self.rows.len()
    }
}
