//! CLI commands for reports on local files
//!
//! Renders ledger documents read straight from disk, without touching the
//! store.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::config::Settings;
use crate::display::Encoding;
use crate::error::{FinError, FinResult};
use crate::import::decode_one;
use crate::models::{Ledger, View};
use crate::reports::{BalanceReport, CurrencyPage};

/// View and output format selection shared by report commands
#[derive(Args, Debug, Clone, Default)]
pub struct ReportOptions {
    /// View to report: holdings, incomes or expenses
    #[arg(short, long)]
    pub view: Option<View>,

    /// Output format: plain, markdown or csv
    #[arg(long)]
    pub format: Option<Encoding>,
}

impl ReportOptions {
    /// Explicit options, falling back to the settings' defaults
    pub fn resolve(&self, settings: &Settings) -> (View, Encoding) {
        (
            self.view.unwrap_or(settings.default_view),
            self.format.unwrap_or(settings.default_encoding),
        )
    }
}

/// Read and decode a ledger document from disk
pub fn read_ledger(path: &Path) -> FinResult<Ledger> {
    let bytes = std::fs::read(path)
        .map_err(|e| FinError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    decode_one(&bytes).map_err(|e| match e {
        FinError::Decode(cause) => FinError::Decode(format!("{}: {}", path.display(), cause)),
        other => other,
    })
}

/// Print one report per file
pub fn handle_view_command<W: Write>(
    out: &mut W,
    settings: &Settings,
    files: &[PathBuf],
    options: &ReportOptions,
) -> FinResult<()> {
    let (view, encoding) = options.resolve(settings);

    for path in files {
        let ledger = read_ledger(path)?;
        let report = BalanceReport::generate(&ledger, view);
        info!(
            file = %path.display(),
            currency = %report.currency,
            %view,
            %encoding,
            months = report.month_count(),
            "rendering report"
        );
        writeln!(out, "{}", report.render(encoding)?)?;
    }

    Ok(())
}

/// Print the combined markup page of a file
pub fn handle_page_command<W: Write>(
    out: &mut W,
    file: &Path,
    name: Option<String>,
) -> FinResult<()> {
    let ledger = read_ledger(file)?;
    let name = name.unwrap_or_else(|| ledger.currency.clone());

    write!(out, "{}", CurrencyPage::generate(name, &ledger).format_markdown())?;
    Ok(())
}
