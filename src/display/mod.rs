//! Table rendering for balance snapshots
//!
//! Every encoding consumes the same snapshot rows, so the numbers shown
//! never differ between them; only the decoration does.

pub mod csv;
pub mod markdown;
pub mod plain;

pub use self::csv::write_csv;
pub use markdown::render_markdown;
pub use plain::{render_plain, AlignedTable};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FinError, FinResult};
use crate::services::SnapshotRow;

/// Output encoding of a balance table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Right-aligned text columns
    #[default]
    Plain,
    /// Pipe-delimited markup
    Markdown,
    /// Comma-separated values
    Csv,
}

impl Encoding {
    /// Render a table in this encoding
    pub fn render(&self, accounts: &[String], rows: &[SnapshotRow]) -> FinResult<String> {
        match self {
            Self::Plain => Ok(render_plain(accounts, rows)),
            Self::Markdown => Ok(render_markdown(accounts, rows)),
            Self::Csv => {
                let mut buf = Vec::new();
                write_csv(&mut buf, accounts, rows)?;
                String::from_utf8(buf).map_err(|e| FinError::Export(e.to_string()))
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for Encoding {
    type Err = FinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            other => Err(FinError::UnknownFormat(other.to_string())),
        }
    }
}
