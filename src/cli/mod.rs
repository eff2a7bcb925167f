//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and storage layers.

pub mod report;
pub mod store;

pub use report::{handle_page_command, handle_view_command, read_ledger, ReportOptions};
pub use store::{handle_store_command, StoreCommands};
