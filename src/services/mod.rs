//! Business logic layer
//!
//! Services operate on a decoded [`Ledger`](crate::models::Ledger) and hold
//! no state between calls.

pub mod balance;

pub use balance::{display_value, fold_months, BalanceService, RunningBalances, SnapshotRow};
