//! fin - monthly balance reports for per-currency ledgers
//!
//! A ledger document declares a currency, three ordered account lists
//! (holdings, incomes, expenses) and a chronological list of monthly
//! transaction batches. This crate folds those transactions into running
//! balances and renders them as tables, one row per month.
//!
//! # Architecture
//!
//! - `models`: the decoded ledger (months, transactions, views, money)
//! - `import`: JSON/YAML document decoding and validation
//! - `services`: the balance engine
//! - `display`: plain aligned, markup and CSV table encodings
//! - `reports`: balance reports and combined currency pages
//! - `storage`: per-currency document files
//! - `config`: paths and user settings
//! - `cli`: command handlers used by the `fin` binary
//!
//! # Example
//!
//! ```rust
//! use fin::import::decode_one;
//! use fin::models::View;
//! use fin::reports::BalanceReport;
//!
//! let doc = br#"{"one": {
//!     "currency": "gbp",
//!     "holdings": ["Cash", "Bank"],
//!     "incomes": ["Salary"],
//!     "expenses": [],
//!     "months": [{"year": 2024, "month": 1, "transactions": [
//!         {"src": "Salary", "dst": "Bank", "val": 500000}
//!     ]}]
//! }}"#;
//!
//! let ledger = decode_one(doc)?;
//! let report = BalanceReport::generate(&ledger, View::Holdings);
//! assert_eq!(
//!     report.format_terminal(),
//!     "     ---  Cash     Bank\n  2024-1  0.00  5000.00\n"
//! );
//! # Ok::<(), fin::FinError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinError, FinResult};
