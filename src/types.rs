//! Core types and data structures for the reconciliation system

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A raw cell value as delivered by the tabular-data reader.
///
/// Readers must deliver genuinely-typed dates as [`RawCellValue::Date`]
/// whenever the source format supports typed cells; text dates are still
/// handled, but go through the string-parsing fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawCellValue {
    /// Free text cell
    Text(String),
    /// Numeric cell (also used for spreadsheet date serial numbers)
    Number(f64),
    /// Typed date cell
    Date(NaiveDateTime),
    /// Blank or null cell
    Empty,
}

impl RawCellValue {
    /// Whether the cell carries no value at all
    pub fn is_empty(&self) -> bool {
        matches!(self, RawCellValue::Empty)
    }
}

impl From<&str> for RawCellValue {
    fn from(value: &str) -> Self {
        RawCellValue::Text(value.to_string())
    }
}

impl From<String> for RawCellValue {
    fn from(value: String) -> Self {
        RawCellValue::Text(value)
    }
}

impl From<f64> for RawCellValue {
    fn from(value: f64) -> Self {
        RawCellValue::Number(value)
    }
}

impl From<NaiveDateTime> for RawCellValue {
    fn from(value: NaiveDateTime) -> Self {
        RawCellValue::Date(value)
    }
}

/// One raw spreadsheet row: an ordered mapping from free-form header to cell
/// value.
///
/// Column order is preserved from the source sheet. This matters: when a row
/// carries more than one date-like header, the first one in source order
/// wins, so `RawRow` cannot be an unordered map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    fields: Vec<(String, RawCellValue)>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a header/value pair, preserving insertion order
    pub fn push(&mut self, header: impl Into<String>, value: impl Into<RawCellValue>) {
        self.fields.push((header.into(), value.into()));
    }

    /// Iterate header/value pairs in source column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawCellValue)> {
        self.fields.iter().map(|(h, v)| (h.as_str(), v))
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<H: Into<String>, V: Into<RawCellValue>> FromIterator<(H, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (H, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }
}

/// Canonical transaction record: the unit of comparison between ledgers.
///
/// Produced once per raw row by the normalizer and immutable afterwards.
/// `debit` and `credit` are always finite and non-negative; malformed input
/// normalizes to zero rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the movement, `None` when unparseable.
    /// Day granularity; time-of-day never participates in matching.
    pub date: Option<NaiveDate>,
    /// Trimmed free-text description (possibly empty)
    pub detail: String,
    /// Non-negative debit amount, zero when absent
    pub debit: BigDecimal,
    /// Non-negative credit amount, zero when absent
    pub credit: BigDecimal,
    /// Running balance as reported by the source. Informational only:
    /// never part of the matching key.
    pub balance: BigDecimal,
}

impl Transaction {
    /// Create a transaction with an explicit date and amounts
    pub fn new(
        date: Option<NaiveDate>,
        detail: impl Into<String>,
        debit: BigDecimal,
        credit: BigDecimal,
        balance: BigDecimal,
    ) -> Self {
        Self {
            date,
            detail: detail.into(),
            debit,
            credit,
            balance,
        }
    }
}

/// The two ledgers being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerSide {
    /// The internal accounting ledger
    Accounting,
    /// The bank statement
    Bank,
}

impl std::fmt::Display for LedgerSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerSide::Accounting => write!(f, "accounting"),
            LedgerSide::Bank => write!(f, "bank"),
        }
    }
}

/// Outcome of one reconciliation run: the two asymmetric difference sets.
///
/// Each list preserves the iteration order of the input collection it was
/// filtered from. Both lists empty means the ledgers agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Bank transactions with no matching accounting entry
    /// (values that likely need to be booked)
    pub missing_from_accounting: Vec<Transaction>,
    /// Accounting transactions with no matching bank movement
    /// (pending checks, transfers in flight, or booking errors)
    pub missing_from_bank: Vec<Transaction>,
}

impl ReconciliationResult {
    /// Whether the two ledgers matched with no discrepancies
    pub fn is_clean(&self) -> bool {
        self.missing_from_accounting.is_empty() && self.missing_from_bank.is_empty()
    }

    /// Per-side discrepancy counts for display
    pub fn summary(&self) -> ReconciliationSummary {
        ReconciliationSummary {
            items_to_adjust: self.missing_from_accounting.len(),
            items_pending_in_bank: self.missing_from_bank.len(),
            is_clean: self.is_clean(),
        }
    }
}

/// Headline counts derived from a [`ReconciliationResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Count of bank movements absent from the accounting ledger
    pub items_to_adjust: usize,
    /// Count of accounting entries absent from the bank statement
    pub items_pending_in_bank: usize,
    /// True when both counts are zero
    pub is_clean: bool,
}

/// Errors that can occur around the reconciliation core.
///
/// Per-field parse failures are never errors: the normalizer degrades them
/// to safe defaults so one malformed cell cannot abort a whole ledger.
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("the {0} ledger is empty or could not be processed")]
    EmptyLedger(LedgerSide),
    #[error("both ledgers are empty or could not be processed")]
    BothLedgersEmpty,
    #[error("export failed: {0}")]
    Export(String),
    #[error("validation error: {0}")]
    Validation(String),
}

/// Result type for reconciliation operations
pub type ReconResult<T> = Result<T, ReconciliationError>;
