//! In-memory collaborator implementations for testing and development

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::export::ExportSheet;
use crate::traits::{RowSource, SheetExporter};
use crate::types::{RawRow, ReconResult};

/// In-memory [`RowSource`]: rows are staged programmatically instead of
/// being decoded from an uploaded file
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    name: String,
    rows: Arc<RwLock<Vec<RawRow>>>,
}

impl MemoryRowSource {
    /// Create a named source with pre-staged rows
    pub fn new(name: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self {
            name: name.into(),
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Stage one more row
    pub fn push_row(&self, row: RawRow) {
        self.rows.write().unwrap().push(row);
    }

    /// Drop all staged rows (useful for testing)
    pub fn clear(&self) {
        self.rows.write().unwrap().clear();
    }
}

#[async_trait]
impl RowSource for MemoryRowSource {
    async fn read_rows(&self) -> ReconResult<Vec<RawRow>> {
        Ok(self.rows.read().unwrap().clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// In-memory [`SheetExporter`] that records every exported sheet
#[derive(Debug, Clone, Default)]
pub struct MemorySheetExporter {
    sheets: Arc<RwLock<Vec<ExportSheet>>>,
}

impl MemorySheetExporter {
    /// Create an empty exporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every sheet exported so far
    pub fn sheets(&self) -> Vec<ExportSheet> {
        self.sheets.read().unwrap().clone()
    }

    /// Drop all recorded sheets (useful for testing)
    pub fn clear(&self) {
        self.sheets.write().unwrap().clear();
    }
}

#[async_trait]
impl SheetExporter for MemorySheetExporter {
    async fn export(&mut self, sheet: ExportSheet) -> ReconResult<()> {
        self.sheets.write().unwrap().push(sheet);
        Ok(())
    }
}
