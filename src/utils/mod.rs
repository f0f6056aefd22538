//! Utility modules

pub mod memory_source;
pub mod validation;

pub use memory_source::{MemoryRowSource, MemorySheetExporter};
