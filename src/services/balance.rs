//! Balance engine
//!
//! Folds a ledger's transactions into per-account running balances and
//! emits one snapshot row per month for a requested view.
//!
//! Every transaction is applied to the full balance map, whether or not its
//! accounts are declared in the view; only the emitted columns are filtered.
//! Holdings keep one map for the whole history, the flow views start a fresh
//! map at every month.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Ledger, Money, Month, MonthLabel, Transaction, View};

/// Signed running balance per account name, in minor units
///
/// Names never seen read as zero; nothing has to be pre-populated.
#[derive(Debug, Clone, Default)]
pub struct RunningBalances {
    balances: HashMap<String, Money>,
}

impl RunningBalances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of an account, zero if it has never moved
    pub fn get(&self, account: &str) -> Money {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Move `val` out of `src` and into `dst`
    pub fn apply(&mut self, txn: &Transaction) {
        let amount = txn.amount();
        *self.balances.entry(txn.src.clone()).or_default() -= amount;
        *self.balances.entry(txn.dst.clone()).or_default() += amount;
    }

    /// Apply a month's transactions in declared order
    pub fn apply_month(&mut self, month: &Month) {
        for txn in &month.transactions {
            self.apply(txn);
        }
    }

    /// Forget every balance
    pub fn clear(&mut self) {
        self.balances.clear();
    }

    /// Sum over every account that has moved; zero for any history
    pub fn net_total(&self) -> Money {
        self.balances.values().copied().sum()
    }
}

/// Display values of one month for a view's declared accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub label: MonthLabel,
    /// Aligned with the view's declared account list
    pub values: Vec<Money>,
}

/// Fold months in order, calling `visit` with the balances after each one.
///
/// With `reset_each_month` the map is emptied before a month is applied, so
/// each visit sees only that month's net flow.
pub fn fold_months<F>(months: &[Month], reset_each_month: bool, mut visit: F)
where
    F: FnMut(&Month, &RunningBalances),
{
    let mut balances = RunningBalances::new();
    for month in months {
        if reset_each_month {
            balances.clear();
        }
        balances.apply_month(month);
        visit(month, &balances);
    }
}

/// Display transform for a raw balance under a view
///
/// Incomes are negated, except zero which stays zero.
pub fn display_value(raw: Money, view: View) -> Money {
    if view.flips_sign() && !raw.is_zero() {
        -raw
    } else {
        raw
    }
}

/// Stateless balance engine over one ledger
pub struct BalanceService<'a> {
    ledger: &'a Ledger,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// One snapshot row per month for `view`
    ///
    /// Builds fresh balance state on every call.
    pub fn snapshots(&self, view: View) -> Vec<SnapshotRow> {
        let accounts = self.ledger.accounts(view);
        let mut rows = Vec::with_capacity(self.ledger.months.len());

        fold_months(&self.ledger.months, view.resets_each_month(), |month, balances| {
            rows.push(SnapshotRow {
                label: month.label(),
                values: accounts
                    .iter()
                    .map(|name| display_value(balances.get(name), view))
                    .collect(),
            });
        });

        debug!(
            currency = %self.ledger.currency,
            %view,
            months = rows.len(),
            columns = accounts.len(),
            "computed balance snapshots"
        );

        rows
    }
}
