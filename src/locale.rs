//! Locale profiles: injectable header-synonym and formatting conventions
//!
//! The original ledgers are human-authored spreadsheets, so the header names,
//! decimal conventions, and date formats vary by locale. Everything
//! locale-specific lives in a [`LocaleProfile`] so the normalizer itself
//! stays locale-agnostic.

use serde::{Deserialize, Serialize};

use crate::types::{ReconResult, ReconciliationError};

/// Column labels and date rendering used when handing transactions to the
/// export collaborator. Label order on the exported sheet is always
/// date, detail, debit, credit, balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLabels {
    pub date: String,
    pub detail: String,
    pub debit: String,
    pub credit: String,
    pub balance: String,
    /// `chrono` format string for rendering dates on export
    pub date_format: String,
}

/// Accepted header synonyms and numeric/date conventions for one locale.
///
/// Header matching is case-insensitive and whitespace-trimmed. The date
/// field matches by *substring* (any header containing the term), all other
/// fields match by equality against their synonym list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleProfile {
    /// Substring identifying the date column (e.g. "fecha")
    pub date_term: String,
    /// Exact synonyms for the description column
    pub detail_terms: Vec<String>,
    /// Exact synonyms for the debit column
    pub debit_terms: Vec<String>,
    /// Exact synonyms for the credit column
    pub credit_terms: Vec<String>,
    /// Exact synonyms for the balance column
    pub balance_terms: Vec<String>,
    /// Character used as the decimal separator in amount cells
    pub decimal_separator: char,
    /// Character used as the thousands separator in amount cells
    pub thousands_separator: char,
    /// Ordered `chrono` format strings tried against text date cells
    pub date_formats: Vec<String>,
    /// Column labels for exported difference sheets
    pub export: ExportLabels,
}

impl LocaleProfile {
    /// Spanish (Argentina) conventions: the profile the system was born with.
    ///
    /// Comma decimal separator, dot thousands separator, day-first dates,
    /// and the accented/plural header variants banks actually emit.
    pub fn es_ar() -> Self {
        Self {
            date_term: "fecha".to_string(),
            detail_terms: string_vec(&["detalle", "descripcion", "descripción"]),
            debit_terms: string_vec(&["debito", "debitos", "débito", "débitos"]),
            credit_terms: string_vec(&["credito", "creditos", "crédito", "créditos"]),
            balance_terms: string_vec(&["saldo"]),
            decimal_separator: ',',
            thousands_separator: '.',
            date_formats: string_vec(&[
                "%d/%m/%Y",
                "%d/%m/%y",
                "%d-%m-%Y",
                "%Y-%m-%d",
                "%d/%m/%Y %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S",
            ]),
            export: ExportLabels {
                date: "Fecha".to_string(),
                detail: "Detalle".to_string(),
                debit: "Débito".to_string(),
                credit: "Crédito".to_string(),
                balance: "Saldo".to_string(),
                date_format: "%d/%m/%Y".to_string(),
            },
        }
    }

    /// US English conventions
    pub fn en_us() -> Self {
        Self {
            date_term: "date".to_string(),
            detail_terms: string_vec(&["detail", "details", "description", "memo"]),
            debit_terms: string_vec(&["debit", "debits", "withdrawal"]),
            credit_terms: string_vec(&["credit", "credits", "deposit"]),
            balance_terms: string_vec(&["balance"]),
            decimal_separator: '.',
            thousands_separator: ',',
            date_formats: string_vec(&[
                "%m/%d/%Y",
                "%m/%d/%y",
                "%Y-%m-%d",
                "%m/%d/%Y %H:%M:%S",
                "%Y-%m-%dT%H:%M:%S",
            ]),
            export: ExportLabels {
                date: "Date".to_string(),
                detail: "Detail".to_string(),
                debit: "Debit".to_string(),
                credit: "Credit".to_string(),
                balance: "Balance".to_string(),
                date_format: "%m/%d/%Y".to_string(),
            },
        }
    }

    /// Whether a header names the date column (substring match)
    pub fn matches_date(&self, header: &str) -> bool {
        normalize_header(header).contains(&self.date_term)
    }

    /// Whether a header names the detail column
    pub fn matches_detail(&self, header: &str) -> bool {
        matches_any(&self.detail_terms, header)
    }

    /// Whether a header names the debit column
    pub fn matches_debit(&self, header: &str) -> bool {
        matches_any(&self.debit_terms, header)
    }

    /// Whether a header names the credit column
    pub fn matches_credit(&self, header: &str) -> bool {
        matches_any(&self.credit_terms, header)
    }

    /// Whether a header names the balance column
    pub fn matches_balance(&self, header: &str) -> bool {
        matches_any(&self.balance_terms, header)
    }

    /// Validate the profile before use
    pub fn validate(&self) -> ReconResult<()> {
        if self.date_term.trim().is_empty() {
            return Err(ReconciliationError::Validation(
                "Locale profile date term cannot be empty".to_string(),
            ));
        }

        for (field, terms) in [
            ("detail", &self.detail_terms),
            ("debit", &self.debit_terms),
            ("credit", &self.credit_terms),
            ("balance", &self.balance_terms),
        ] {
            if terms.is_empty() {
                return Err(ReconciliationError::Validation(format!(
                    "Locale profile has no header synonyms for the {field} field"
                )));
            }
        }

        if self.decimal_separator == self.thousands_separator {
            return Err(ReconciliationError::Validation(
                "Decimal and thousands separators cannot be the same character".to_string(),
            ));
        }

        if self.date_formats.is_empty() {
            return Err(ReconciliationError::Validation(
                "Locale profile must declare at least one date format".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::es_ar()
    }
}

/// Trim and lowercase a header for comparison
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn matches_any(terms: &[String], header: &str) -> bool {
    let header = normalize_header(header);
    terms.iter().any(|term| *term == header)
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
