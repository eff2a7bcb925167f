//! Report views
//!
//! A view selects which declared accounts are shown and how balances are
//! aggregated over time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinError;

/// One of the three report views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Cumulative balances across all months
    #[default]
    Holdings,
    /// Month-local net flow, shown with the sign flipped
    Incomes,
    /// Month-local net flow
    Expenses,
}

impl View {
    /// All views in page order
    pub const ALL: [View; 3] = [View::Holdings, View::Incomes, View::Expenses];

    /// Whether the balance map starts empty at every month
    pub fn resets_each_month(&self) -> bool {
        !matches!(self, Self::Holdings)
    }

    /// Whether non-zero balances are negated for display
    pub fn flips_sign(&self) -> bool {
        matches!(self, Self::Incomes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Holdings => "holdings",
            Self::Incomes => "incomes",
            Self::Expenses => "expenses",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = FinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holdings" => Ok(Self::Holdings),
            "incomes" => Ok(Self::Incomes),
            "expenses" => Ok(Self::Expenses),
            other => Err(FinError::UnknownView(other.to_string())),
        }
    }
}
