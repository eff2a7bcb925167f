//! Reports module for fin
//!
//! Balance tables for a single view and the markup pages that combine
//! every view of a currency.

pub mod balance;
pub mod page;

pub use balance::BalanceReport;
pub use page::{index_page, CurrencyPage};
