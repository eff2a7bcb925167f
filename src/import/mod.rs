//! Ledger document import
//!
//! Decodes a submitted ledger document (JSON or YAML) into a validated
//! [`Ledger`](crate::models::Ledger). Decoding either fully succeeds or
//! returns a decode error; nothing downstream ever sees a partial ledger.

pub mod document;

pub use document::{decode_one, DocumentFormat};
