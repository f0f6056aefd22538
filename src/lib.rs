//! # Reconciliation Core
//!
//! A bank reconciliation library that compares an internal accounting ledger
//! against a bank statement and reports the entries present in one but
//! absent in the other.
//!
//! ## Features
//!
//! - **Row normalization**: tolerant mapping of human-authored spreadsheet
//!   rows (inconsistent headers, date encodings, and numeric formats) into
//!   canonical transactions
//! - **Locale profiles**: injectable header synonyms, decimal conventions,
//!   and date formats (Spanish/Argentine and US English profiles included)
//! - **Key-based matching**: deterministic transaction identity over date,
//!   detail, debit, and credit, with hash-set difference computation
//! - **Conservative handling of bad data**: malformed cells degrade to safe
//!   defaults; dateless transactions are always surfaced for manual review
//! - **Collaborator abstraction**: file decoding and export serialization
//!   live behind traits, keeping the core pure
//!
//! ## Quick Start
//!
//! ```rust
//! use reconciliation_core::{RawCellValue, RawRow, ReconciliationEngine};
//!
//! let rent: RawRow = vec![
//!     ("Fecha", RawCellValue::from("05/01/2024")),
//!     ("Detalle", RawCellValue::from("Alquiler")),
//!     ("Débito", RawCellValue::from("1.000,00")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let accounting = vec![rent.clone()];
//! let bank = vec![rent];
//!
//! let engine = ReconciliationEngine::new();
//! let result = engine.run(&accounting, &bank).unwrap();
//! assert!(result.is_clean());
//! ```

pub mod export;
pub mod locale;
pub mod normalizer;
pub mod reconciler;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use export::{build_export_sheet, ExportRow, ExportSheet};
pub use locale::{ExportLabels, LocaleProfile};
pub use normalizer::Normalizer;
pub use reconciler::{reconcile, transaction_key, ReconciliationEngine};
pub use traits::*;
pub use types::*;
