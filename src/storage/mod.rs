//! Storage layer for fin
//!
//! Keeps one raw ledger document per currency in the data directory, as
//! `<currency>.ledger`. Documents are decoded before they are written, so
//! the store only ever holds documents that decode.

pub mod file_io;

pub use file_io::{read_optional, write_atomic};

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::paths::FinPaths;
use crate::error::{FinError, FinResult};
use crate::import::decode_one;
use crate::models::Ledger;

/// File extension of stored ledger documents
pub const LEDGER_EXTENSION: &str = "ledger";

/// Per-currency ledger document store
pub struct LedgerStore {
    paths: FinPaths,
}

impl LedgerStore {
    /// Create a new store, creating its directories if needed
    pub fn new(paths: FinPaths) -> Result<Self, FinError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinPaths {
        &self.paths
    }

    /// Location of a currency's document
    pub fn path_for(&self, currency: &str) -> FinResult<PathBuf> {
        let key = currency_key(currency)?;
        Ok(self
            .paths
            .data_dir()
            .join(format!("{}.{}", key, LEDGER_EXTENSION)))
    }

    /// Decode a document and store it under its currency
    ///
    /// Invalid documents are rejected with the decode error and leave any
    /// stored document untouched.
    pub fn save(&self, bytes: &[u8]) -> FinResult<Ledger> {
        let ledger = decode_one(bytes)?;
        let path = self.path_for(&ledger.currency)?;

        write_atomic(&path, bytes)?;
        info!(currency = %ledger.currency, path = %path.display(), "saved ledger");

        Ok(ledger)
    }

    /// Load and decode a currency's stored document
    pub fn load(&self, currency: &str) -> FinResult<Ledger> {
        let path = self.path_for(currency)?;
        let bytes = read_optional(&path)?.ok_or_else(|| FinError::ledger_not_found(currency))?;

        debug!(currency, path = %path.display(), "loading ledger");
        decode_one(&bytes)
    }

    /// Stored currencies, sorted
    pub fn list(&self) -> FinResult<Vec<String>> {
        let data_dir = self.paths.data_dir();
        let entries = std::fs::read_dir(&data_dir).map_err(|e| {
            FinError::Storage(format!("Failed to read {}: {}", data_dir.display(), e))
        })?;

        let mut currencies = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| FinError::Storage(format!("Failed to read directory entry: {}", e)))?
                .path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                currencies.push(stem.to_string());
            }
        }

        currencies.sort();
        Ok(currencies)
    }
}

/// File name key of a currency: trimmed, lower-cased, and limited to
/// ASCII letters, digits, `-` and `_`
pub fn currency_key(currency: &str) -> FinResult<String> {
    let key = currency.trim().to_lowercase();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(key)
    } else {
        Err(FinError::Storage(format!(
            "Currency {:?} cannot be used as a file name",
            currency
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::View;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = LedgerStore::new(paths).unwrap();
        (temp_dir, store)
    }

    fn document(currency: &str) -> String {
        format!(
            "one:\n  currency: {}\n  holdings: [Bank]\n  incomes: []\n  expenses: []\n  months: []\n",
            currency
        )
    }

    #[test]
    fn test_currency_key() {
        assert_eq!(currency_key(" GBP ").unwrap(), "gbp");
        assert_eq!(currency_key("usd_cash").unwrap(), "usd_cash");
        assert!(currency_key("../etc").is_err());
        assert!(currency_key("").is_err());
        assert!(currency_key("a b").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, store) = create_test_store();

        let saved = store.save(document("GBP").as_bytes()).unwrap();
        assert_eq!(saved.currency, "GBP");
        assert!(store.path_for("gbp").unwrap().exists());

        let loaded = store.load("gbp").unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.accounts(View::Holdings), ["Bank"]);
    }

    #[test]
    fn test_save_keeps_raw_bytes() {
        let (_temp_dir, store) = create_test_store();
        let doc = format!("# comment kept\n{}", document("eur"));

        store.save(doc.as_bytes()).unwrap();
        let stored = std::fs::read_to_string(store.path_for("eur").unwrap()).unwrap();
        assert_eq!(stored, doc);
    }

    #[test]
    fn test_invalid_document_is_not_stored() {
        let (_temp_dir, store) = create_test_store();
        store.save(document("twd").as_bytes()).unwrap();

        let err = store.save(b"one:\n  currency: twd\n").unwrap_err();
        assert!(err.is_decode());

        let stored = std::fs::read_to_string(store.path_for("twd").unwrap()).unwrap();
        assert_eq!(stored, document("twd"));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        let err = store.load("jpy").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let (_temp_dir, store) = create_test_store();
        store.save(document("twd").as_bytes()).unwrap();
        store.save(document("eur").as_bytes()).unwrap();
        std::fs::write(store.paths().data_dir().join("notes.txt"), "x").unwrap();

        assert_eq!(store.list().unwrap(), vec!["eur", "twd"]);
    }
}
