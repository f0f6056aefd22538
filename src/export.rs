//! Export-facing representation of a difference set
//!
//! The core never serializes files. It builds an [`ExportSheet`] — labeled
//! columns plus display-ready rows — and hands it to the export collaborator
//! (see [`crate::traits::SheetExporter`]) for the actual tabular encoding.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::locale::LocaleProfile;
use crate::types::Transaction;

/// One display-ready row of an export sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Locale-formatted date, empty when the date was unparseable
    pub date: String,
    pub detail: String,
    pub debit: BigDecimal,
    pub credit: BigDecimal,
    pub balance: BigDecimal,
}

/// A labeled difference set ready for tabular serialization.
///
/// Column labels always come in the fixed order date, detail, debit,
/// credit, balance, with the labels themselves taken from the locale
/// profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSheet {
    /// Target label for the sheet (e.g. a download file name base)
    pub label: String,
    /// Column header labels, in export order
    pub columns: Vec<String>,
    pub rows: Vec<ExportRow>,
}

/// Build an export sheet from a difference set, preserving row order
pub fn build_export_sheet(
    transactions: &[Transaction],
    label: impl Into<String>,
    profile: &LocaleProfile,
) -> ExportSheet {
    let labels = &profile.export;
    let rows = transactions
        .iter()
        .map(|tx| ExportRow {
            date: tx
                .date
                .map(|d| d.format(&labels.date_format).to_string())
                .unwrap_or_default(),
            detail: tx.detail.clone(),
            debit: tx.debit.clone(),
            credit: tx.credit.clone(),
            balance: tx.balance.clone(),
        })
        .collect();

    ExportSheet {
        label: label.into(),
        columns: vec![
            labels.date.clone(),
            labels.detail.clone(),
            labels.debit.clone(),
            labels.credit.clone(),
            labels.balance.clone(),
        ],
        rows,
    }
}
