//! Basic reconciliation usage example

use reconciliation_core::utils::{MemoryRowSource, MemorySheetExporter};
use reconciliation_core::{
    build_export_sheet, RawCellValue, RawRow, ReconciliationEngine, RowSource, SheetExporter,
};

fn row(fields: Vec<(&str, RawCellValue)>) -> RawRow {
    fields.into_iter().collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏦 Reconciliation Core - Basic Example\n");

    // 1. Stage the two ledgers the way a spreadsheet reader would deliver them
    println!("📄 Loading ledgers...");
    let accounting_source = MemoryRowSource::new(
        "contabilidad.xlsx",
        vec![
            row(vec![
                ("Fecha", RawCellValue::from("05/01/2024")),
                ("Detalle", RawCellValue::from("Alquiler oficina")),
                ("Débito", RawCellValue::from("1.000,00")),
                ("Crédito", RawCellValue::from("0,00")),
                ("Saldo", RawCellValue::from("-1.000,00")),
            ]),
            row(vec![
                ("Fecha", RawCellValue::from("10/01/2024")),
                ("Detalle", RawCellValue::from("Cobro factura 0001")),
                ("Débito", RawCellValue::from("0,00")),
                ("Crédito", RawCellValue::from("2.500,00")),
                ("Saldo", RawCellValue::from("1.500,00")),
            ]),
        ],
    );

    let bank_source = MemoryRowSource::new(
        "banco.xlsx",
        vec![
            row(vec![
                ("Fecha", RawCellValue::Number(45296.0)), // date serial for 2024-01-05
                ("Detalle", RawCellValue::from("ALQUILER OFICINA")),
                ("Débito", RawCellValue::from("$ 1.000,00")),
            ]),
            row(vec![
                ("Fecha", RawCellValue::from("12/01/2024")),
                ("Detalle", RawCellValue::from("Comisión mantenimiento")),
                ("Débito", RawCellValue::from("350,00")),
            ]),
        ],
    );

    let accounting_rows = accounting_source.read_rows().await?;
    let bank_rows = bank_source.read_rows().await?;
    println!(
        "  ✓ {}: {} rows",
        accounting_source.name(),
        accounting_rows.len()
    );
    println!("  ✓ {}: {} rows\n", bank_source.name(), bank_rows.len());

    // 2. Run the reconciliation
    println!("⚖️  Reconciling...");
    let engine = ReconciliationEngine::new();
    let result = engine.run(&accounting_rows, &bank_rows)?;
    let summary = result.summary();
    println!("  ✓ Items to adjust: {}", summary.items_to_adjust);
    println!(
        "  ✓ Items pending in bank: {}\n",
        summary.items_pending_in_bank
    );

    for tx in &result.missing_from_accounting {
        println!(
            "  → In bank, not in accounting: {} | {} | debit {}",
            tx.date.map(|d| d.to_string()).unwrap_or_default(),
            tx.detail,
            tx.debit
        );
    }
    for tx in &result.missing_from_bank {
        println!(
            "  → In accounting, not in bank: {} | {} | credit {}",
            tx.date.map(|d| d.to_string()).unwrap_or_default(),
            tx.detail,
            tx.credit
        );
    }

    // 3. Hand the difference sets to the export collaborator
    println!("\n📤 Exporting difference sheets...");
    let mut exporter = MemorySheetExporter::new();
    let profile = engine.normalizer().profile();
    exporter
        .export(build_export_sheet(
            &result.missing_from_accounting,
            "Valores_A_Ajustar",
            profile,
        ))
        .await?;
    exporter
        .export(build_export_sheet(
            &result.missing_from_bank,
            "Valores_Pendientes_En_Banco",
            profile,
        ))
        .await?;

    for sheet in exporter.sheets() {
        println!("  ✓ {} ({} rows)", sheet.label, sheet.rows.len());
    }

    Ok(())
}
