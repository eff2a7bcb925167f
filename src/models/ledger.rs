//! Ledger model
//!
//! One currency's complete dataset: the three view account lists and the
//! chronological month batches.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinError, FinResult};

use super::transaction::Transaction;
use super::view::View;

/// One reporting period
///
/// `year` and `month` are not checked against a calendar; whatever integers
/// the document holds are carried through to the labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Month {
    pub year: i64,
    pub month: i64,
    /// Applied in order
    pub transactions: Vec<Transaction>,
}

impl Month {
    /// Create an empty month
    pub fn new(year: i64, month: i64) -> Self {
        Self {
            year,
            month,
            transactions: Vec::new(),
        }
    }

    /// Builder-style helper to append a transaction
    pub fn with_transaction(mut self, txn: Transaction) -> Self {
        self.transactions.push(txn);
        self
    }

    /// Row label, e.g. `2024-1`
    pub fn label(&self) -> MonthLabel {
        MonthLabel {
            year: self.year,
            month: self.month,
        }
    }
}

/// The `<year>-<month>` label of a snapshot row
///
/// `Display` renders it unpadded (`2024-5`); the markup table pads it
/// itself (`2024- 5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub year: i64,
    pub month: i64,
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// One currency's ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ledger {
    /// Currency code or name, non-empty
    pub currency: String,

    /// Display order is the declared order; never sorted
    pub holdings: Vec<String>,
    pub incomes: Vec<String>,
    pub expenses: Vec<String>,

    /// Caller-ordered; not re-sorted or checked for monotonicity
    pub months: Vec<Month>,
}

impl Ledger {
    /// Create a ledger with no accounts and no months
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            holdings: Vec::new(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            months: Vec::new(),
        }
    }

    /// The declared accounts of a view, in declared order
    pub fn accounts(&self, view: View) -> &[String] {
        match view {
            View::Holdings => &self.holdings,
            View::Incomes => &self.incomes,
            View::Expenses => &self.expenses,
        }
    }

    /// Number of transactions across all months
    pub fn transaction_count(&self) -> usize {
        self.months.iter().map(|m| m.transactions.len()).sum()
    }

    /// Check the invariants the document schema cannot express
    pub fn validate(&self) -> FinResult<()> {
        if self.currency.trim().is_empty() {
            return Err(FinError::Decode("validate: currency cannot be empty".into()));
        }
        Ok(())
    }
}
