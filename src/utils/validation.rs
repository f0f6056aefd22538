//! Pre-reconciliation input validation
//!
//! Per-field parse problems are handled inside the normalizer by degrading
//! to defaults. The checks here are the coarser, caller-facing ones: whole
//! ledgers that are missing or empty must be rejected *before* the pure core
//! runs, so that "nothing to reconcile" never masquerades as "no
//! differences found".

use crate::types::{LedgerSide, RawRow, ReconResult, ReconciliationError};

/// Validate that one side delivered at least one row
pub fn validate_rows_present(side: LedgerSide, rows: &[RawRow]) -> ReconResult<()> {
    if rows.is_empty() {
        Err(ReconciliationError::EmptyLedger(side))
    } else {
        Ok(())
    }
}

/// Validate both sides before a reconciliation run.
///
/// Both sides empty is reported as its own condition: it usually means the
/// uploads themselves failed to process, not that one ledger is missing.
pub fn validate_ledgers(accounting: &[RawRow], bank: &[RawRow]) -> ReconResult<()> {
    if accounting.is_empty() && bank.is_empty() {
        return Err(ReconciliationError::BothLedgersEmpty);
    }
    validate_rows_present(LedgerSide::Accounting, accounting)?;
    validate_rows_present(LedgerSide::Bank, bank)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawCellValue;

    fn one_row() -> Vec<RawRow> {
        vec![vec![("Detalle", RawCellValue::from("x"))]
            .into_iter()
            .collect()]
    }

    #[test]
    fn both_empty_is_its_own_error() {
        assert!(matches!(
            validate_ledgers(&[], &[]),
            Err(ReconciliationError::BothLedgersEmpty)
        ));
    }

    #[test]
    fn each_side_is_reported_by_name() {
        let rows = one_row();
        assert!(matches!(
            validate_ledgers(&[], &rows),
            Err(ReconciliationError::EmptyLedger(LedgerSide::Accounting))
        ));
        assert!(matches!(
            validate_ledgers(&rows, &[]),
            Err(ReconciliationError::EmptyLedger(LedgerSide::Bank))
        ));
    }

    #[test]
    fn populated_ledgers_pass() {
        let rows = one_row();
        assert!(validate_ledgers(&rows, &rows).is_ok());
        assert!(validate_rows_present(LedgerSide::Bank, &rows).is_ok());
    }
}
