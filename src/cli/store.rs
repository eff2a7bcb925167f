//! CLI commands for the per-currency store

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use super::report::ReportOptions;
use crate::config::Settings;
use crate::error::{FinError, FinResult};
use crate::reports::{index_page, BalanceReport, CurrencyPage};
use crate::storage::LedgerStore;

/// Store subcommands
#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Validate documents and store them under their currency
    Put {
        /// Ledger documents (JSON or YAML)
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,
    },

    /// Show a report for a stored currency
    Show {
        /// Currency code (e.g. gbp)
        currency: String,

        #[command(flatten)]
        options: ReportOptions,
    },

    /// Print the markup page of a stored currency
    Page {
        /// Currency code (e.g. gbp)
        currency: String,
    },

    /// List stored currencies
    #[command(alias = "ls")]
    List,

    /// Print the markup index of stored currencies
    Index,
}

/// Handle store commands
pub fn handle_store_command<W: Write>(
    out: &mut W,
    store: &LedgerStore,
    settings: &Settings,
    cmd: StoreCommands,
) -> FinResult<()> {
    match cmd {
        StoreCommands::Put { files } => {
            for path in files {
                let bytes = std::fs::read(&path).map_err(|e| {
                    FinError::Io(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let ledger = store.save(&bytes)?;
                writeln!(
                    out,
                    "Stored {} ({} months) from {}",
                    ledger.currency,
                    ledger.months.len(),
                    path.display()
                )?;
            }
        }
        StoreCommands::Show { currency, options } => {
            let (view, encoding) = options.resolve(settings);
            let ledger = store.load(&currency)?;
            let report = BalanceReport::generate(&ledger, view);
            writeln!(out, "{}", report.render(encoding)?)?;
        }
        StoreCommands::Page { currency } => {
            let ledger = store.load(&currency)?;
            write!(
                out,
                "{}",
                CurrencyPage::generate(currency, &ledger).format_markdown()
            )?;
        }
        StoreCommands::List => {
            let currencies = store.list()?;
            if currencies.is_empty() {
                writeln!(out, "No ledgers stored.")?;
            }
            for currency in currencies {
                writeln!(out, "{}", currency)?;
            }
        }
        StoreCommands::Index => {
            write!(out, "{}", index_page(&store.list()?))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinPaths;
    use crate::models::View;
    use tempfile::TempDir;

    const DOC: &str = r#"{"one": {
        "currency": "eur",
        "holdings": ["Bank"],
        "incomes": ["Salary"],
        "expenses": ["Rent"],
        "months": [
            {"year": 2024, "month": 3, "transactions": [
                {"src": "Salary", "dst": "Bank", "val": 310000, "note": "march"},
                {"src": "Bank", "dst": "Rent", "val": 95000}
            ]}
        ]
    }}"#;

    fn setup() -> (TempDir, LedgerStore, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let store =
            LedgerStore::new(FinPaths::with_base_dir(temp_dir.path().join("home"))).unwrap();
        let doc = temp_dir.path().join("eur.json");
        std::fs::write(&doc, DOC).unwrap();
        (temp_dir, store, doc)
    }

    fn run(store: &LedgerStore, cmd: StoreCommands) -> FinResult<String> {
        let mut out = Vec::new();
        handle_store_command(&mut out, store, &Settings::default(), cmd)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_put_then_show() {
        let (_temp_dir, store, doc) = setup();

        let put = run(&store, StoreCommands::Put { files: vec![doc] }).unwrap();
        assert!(put.starts_with("Stored eur (1 months)"));

        let shown = run(
            &store,
            StoreCommands::Show {
                currency: "EUR".into(),
                options: ReportOptions {
                    view: Some(View::Expenses),
                    format: None,
                },
            },
        )
        .unwrap();
        assert_eq!(shown, "     ---    Rent\n  2024-3  950.00\n\n");
    }

    #[test]
    fn test_show_missing_currency() {
        let (_temp_dir, store, _doc) = setup();
        let err = run(
            &store,
            StoreCommands::Show {
                currency: "gbp".into(),
                options: ReportOptions::default(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_and_index() {
        let (_temp_dir, store, doc) = setup();
        assert_eq!(run(&store, StoreCommands::List).unwrap(), "No ledgers stored.\n");

        run(&store, StoreCommands::Put { files: vec![doc] }).unwrap();
        assert_eq!(run(&store, StoreCommands::List).unwrap(), "eur\n");
        assert!(run(&store, StoreCommands::Index)
            .unwrap()
            .ends_with("- [EUR](/eur)\n"));
    }

    #[test]
    fn test_page() {
        let (_temp_dir, store, doc) = setup();
        run(&store, StoreCommands::Put { files: vec![doc] }).unwrap();

        let page = run(&store, StoreCommands::Page { currency: "eur".into() }).unwrap();
        assert!(page.contains("#### _income_\n\n|**month**|**Salary**|\n|---|---|\n|**2024- 3**|3100.00|\n"));
    }
}
