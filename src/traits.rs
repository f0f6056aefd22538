//! Traits for collaborator abstraction
//!
//! The core is pure and file-format-agnostic. Everything that touches bytes
//! lives behind these seams: a [`RowSource`] turns one uploaded spreadsheet
//! into raw rows, a [`SheetExporter`] turns a difference set back into a
//! downloadable file. Implementations may do real I/O, hence async.

use async_trait::async_trait;

use crate::export::ExportSheet;
use crate::types::{RawRow, ReconResult};

/// Supplier of raw rows for one ledger.
///
/// A reader implementation is responsible for header/value extraction from
/// whatever binary spreadsheet format was uploaded, and must deliver
/// genuinely-typed dates as [`crate::types::RawCellValue::Date`] when the
/// source format supports typed cells. Failures surface as
/// [`crate::types::ReconciliationError::SourceUnavailable`].
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Read every data row, preserving sheet order
    async fn read_rows(&self) -> ReconResult<Vec<RawRow>>;

    /// Human-readable source name (file name, account label)
    fn name(&self) -> &str;
}

/// Sink for difference sheets produced after a reconciliation run.
///
/// Serialization failures surface as
/// [`crate::types::ReconciliationError::Export`].
#[async_trait]
pub trait SheetExporter: Send + Sync {
    /// Serialize one labeled sheet to its destination
    async fn export(&mut self, sheet: ExportSheet) -> ReconResult<()>;
}
