//! Key-based reconciliation of two normalized ledgers

pub mod engine;
pub mod key;

pub use engine::{reconcile, ReconciliationEngine};
pub use key::{transaction_key, KEY_DELIMITER, MISSING_DATE_TAG};
