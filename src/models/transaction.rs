//! Transaction model
//!
//! A single movement of value from one named account to another.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One balance movement within a month
///
/// `src` and `dst` are free account names. They do not have to be declared
/// in any view; undeclared accounts still take part in the fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Account the value leaves
    pub src: String,

    /// Account the value arrives in
    pub dst: String,

    /// Amount in minor units; negative reverses the direction
    pub val: i64,

    /// Free text, not used for balances
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Create a new transaction without a note
    pub fn new(src: impl Into<String>, dst: impl Into<String>, val: i64) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            val,
            note: String::new(),
        }
    }

    /// Create a new transaction with a note
    pub fn with_note(
        src: impl Into<String>,
        dst: impl Into<String>,
        val: i64,
        note: impl Into<String>,
    ) -> Self {
        Self {
            note: note.into(),
            ..Self::new(src, dst, val)
        }
    }

    /// The moved amount as Money
    pub fn amount(&self) -> Money {
        Money::from_minor(self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults_to_empty() {
        let txn: Transaction =
            serde_json::from_str(r#"{"src": "Salary", "dst": "Bank", "val": 500000}"#).unwrap();
        assert_eq!(txn, Transaction::new("Salary", "Bank", 500000));
        assert!(txn.note.is_empty());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result: Result<Transaction, _> =
            serde_json::from_str(r#"{"src": "a", "dst": "b", "val": 1, "memo": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_fractional_value() {
        let result: Result<Transaction, _> =
            serde_json::from_str(r#"{"src": "a", "dst": "b", "val": 1.5}"#);
        assert!(result.is_err());
    }
}
