//! Row normalization: raw spreadsheet rows into canonical transactions

pub mod amount;
pub mod date;

use crate::locale::LocaleProfile;
use crate::types::{RawCellValue, RawRow, Transaction};

/// Maps raw rows with free-form headers into canonical [`Transaction`]s.
///
/// Pure and infallible: header classification and per-field parsing follow
/// the configured [`LocaleProfile`], and anything unrecognized or malformed
/// degrades to that field's default. Unknown headers are ignored so extra
/// columns in a statement never break processing.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    profile: LocaleProfile,
}

impl Normalizer {
    /// Create a normalizer for the given locale profile
    pub fn new(profile: LocaleProfile) -> Self {
        Self { profile }
    }

    /// The profile this normalizer classifies headers with
    pub fn profile(&self) -> &LocaleProfile {
        &self.profile
    }

    /// Normalize one raw row into a canonical transaction.
    ///
    /// Only the first header containing the date term is considered for the
    /// date; for the remaining fields the last matching header wins, which is
    /// irrelevant for well-formed sheets (one column per field).
    pub fn normalize(&self, row: &RawRow) -> Transaction {
        let mut tx = Transaction::default();
        let mut date_seen = false;

        for (header, value) in row.iter() {
            if self.profile.matches_date(header) {
                if !date_seen {
                    date_seen = true;
                    tx.date = date::parse_date(value, &self.profile);
                }
            } else if self.profile.matches_detail(header) {
                tx.detail = detail_text(value);
            } else if self.profile.matches_debit(header) {
                // Magnitude: some banks sign the debit column
                tx.debit = amount::parse_amount(value, &self.profile).abs();
            } else if self.profile.matches_credit(header) {
                tx.credit = amount::parse_amount(value, &self.profile).abs();
            } else if self.profile.matches_balance(header) {
                tx.balance = amount::parse_amount(value, &self.profile);
            }
        }

        tx
    }

    /// Normalize a whole ledger, preserving row order
    pub fn normalize_all(&self, rows: &[RawRow]) -> Vec<Transaction> {
        rows.iter().map(|row| self.normalize(row)).collect()
    }
}

/// Coerce a detail cell to trimmed text
fn detail_text(value: &RawCellValue) -> String {
    match value {
        RawCellValue::Text(s) => s.trim().to_string(),
        RawCellValue::Number(n) => n.to_string(),
        RawCellValue::Date(dt) => dt.to_string(),
        RawCellValue::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn normalizes_a_full_spanish_row() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![
            ("Fecha", RawCellValue::from("05/01/2024")),
            ("Detalle", RawCellValue::from("  Alquiler oficina  ")),
            ("Débito", RawCellValue::from("1.000,00")),
            ("Crédito", RawCellValue::from("0")),
            ("Saldo", RawCellValue::from("-1.000,00")),
        ]
        .into_iter()
        .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, Some(ymd(2024, 1, 5)));
        assert_eq!(tx.detail, "Alquiler oficina");
        assert_eq!(tx.debit, dec("1000.00"));
        assert_eq!(tx.credit, BigDecimal::from(0));
        assert_eq!(tx.balance, dec("-1000.00"));
    }

    #[test]
    fn malformed_cells_degrade_to_defaults() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![("Fecha", "not-a-date"), ("Importe", "abc")]
            .into_iter()
            .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, None);
        assert_eq!(tx.detail, "");
        assert_eq!(tx.debit, BigDecimal::from(0));
        assert_eq!(tx.credit, BigDecimal::from(0));
        assert_eq!(tx.balance, BigDecimal::from(0));
    }

    #[test]
    fn date_serial_cell_becomes_its_calendar_day() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![("Fecha", RawCellValue::Number(45000.0))]
            .into_iter()
            .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, Some(ymd(2023, 3, 15)));
    }

    #[test]
    fn first_date_header_wins() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![
            ("Fecha", RawCellValue::from("05/01/2024")),
            ("Fecha valor", RawCellValue::from("09/01/2024")),
        ]
        .into_iter()
        .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn first_date_header_wins_even_when_unparseable() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![
            ("Fecha", RawCellValue::from("???")),
            ("Fecha valor", RawCellValue::from("09/01/2024")),
        ]
        .into_iter()
        .collect();

        // The date slot was claimed by the first date-like header
        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, None);
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![
            ("Sucursal", RawCellValue::from("Centro")),
            ("Detalle", RawCellValue::from("Comisión")),
            ("Nro. Comprobante", RawCellValue::Number(884421.0)),
        ]
        .into_iter()
        .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.detail, "Comisión");
        assert_eq!(tx.date, None);
    }

    #[test]
    fn signed_debit_cells_take_the_magnitude() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![("Débitos", RawCellValue::from("-250,50"))]
            .into_iter()
            .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.debit, dec("250.50"));
    }

    #[test]
    fn typed_date_cell_is_preferred() {
        let normalizer = Normalizer::default();
        let dt = ymd(2024, 2, 29).and_hms_opt(23, 59, 59).unwrap();
        let row: RawRow = vec![("Fecha", RawCellValue::Date(dt))].into_iter().collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn numeric_detail_is_stringified() {
        let normalizer = Normalizer::default();
        let row: RawRow = vec![("Descripcion", RawCellValue::Number(12345.0))]
            .into_iter()
            .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.detail, "12345");
    }

    #[test]
    fn normalize_all_preserves_row_order() {
        let normalizer = Normalizer::default();
        let rows: Vec<RawRow> = vec![
            vec![("Detalle", "primero")].into_iter().collect(),
            vec![("Detalle", "segundo")].into_iter().collect(),
        ];

        let txs = normalizer.normalize_all(&rows);
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].detail, "primero");
        assert_eq!(txs[1].detail, "segundo");
    }

    #[test]
    fn english_profile_classifies_english_headers() {
        let normalizer = Normalizer::new(LocaleProfile::en_us());
        let row: RawRow = vec![
            ("Date", RawCellValue::from("01/05/2024")),
            ("Description", RawCellValue::from("Rent")),
            ("Debit", RawCellValue::from("1,000.00")),
        ]
        .into_iter()
        .collect();

        let tx = normalizer.normalize(&row);
        assert_eq!(tx.date, Some(ymd(2024, 1, 5)));
        assert_eq!(tx.detail, "Rent");
        assert_eq!(tx.debit, dec("1000.00"));
    }
}
