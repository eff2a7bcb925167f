//! Ledger document decoder
//!
//! A document carries one currency's ledger under the top-level `one` key.
//! Other top-level keys are ignored so documents can carry their own
//! annotations; inside the ledger, unknown keys are rejected.

use serde::Deserialize;
use tracing::debug;

use crate::error::{FinError, FinResult};
use crate::models::Ledger;

/// Text format of a ledger document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Sniff the format: an object literal is JSON, anything else YAML
    pub fn detect(bytes: &[u8]) -> Self {
        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'{') => Self::Json,
            _ => Self::Yaml,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    one: Ledger,
}

/// Decode and validate a single-ledger document
pub fn decode_one(bytes: &[u8]) -> FinResult<Ledger> {
    let format = DocumentFormat::detect(bytes);
    let document: Document = match format {
        DocumentFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| FinError::Decode(format!("decode: {}", e)))?,
        DocumentFormat::Yaml => serde_yaml::from_slice(bytes)
            .map_err(|e| FinError::Decode(format!("decode: {}", e)))?,
    };

    let ledger = document.one;
    ledger.validate()?;

    debug!(
        currency = %ledger.currency,
        ?format,
        months = ledger.months.len(),
        transactions = ledger.transaction_count(),
        "decoded ledger"
    );

    Ok(ledger)
}
