//! Core data models for fin
//!
//! The validated in-memory ledger: currency, view account lists, months
//! and transactions. Pure data with no behavior beyond its invariants.

pub mod ledger;
pub mod money;
pub mod transaction;
pub mod view;

pub use ledger::{Ledger, Month, MonthLabel};
pub use money::Money;
pub use transaction::Transaction;
pub use view::View;
