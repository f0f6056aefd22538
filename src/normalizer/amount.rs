//! Locale-aware amount parsing
//!
//! Amount cells arrive as free text ("$ 1.234,56", "1.234,56 ARS") or as
//! plain numbers. Parsing strips everything that is not part of a number,
//! drops the locale's thousands separator, folds its decimal separator to a
//! dot, and parses the remainder as an exact decimal. Anything that still
//! fails to parse becomes zero: one malformed cell must never abort a ledger.

use bigdecimal::BigDecimal;
use std::str::FromStr;

use crate::locale::LocaleProfile;
use crate::types::RawCellValue;

/// Parse an amount cell into a signed decimal, degrading to zero on failure.
///
/// The caller decides what to do with the sign: debit/credit columns take
/// the magnitude, the balance column keeps it.
pub fn parse_amount(value: &RawCellValue, profile: &LocaleProfile) -> BigDecimal {
    match value {
        RawCellValue::Number(n) => decimal_from_f64(*n),
        RawCellValue::Text(s) => parse_amount_text(s, profile),
        RawCellValue::Date(_) | RawCellValue::Empty => BigDecimal::from(0),
    }
}

fn decimal_from_f64(n: f64) -> BigDecimal {
    // NaN and infinities fail the conversion and collapse to zero
    BigDecimal::try_from(n).unwrap_or_else(|_| BigDecimal::from(0))
}

fn parse_amount_text(text: &str, profile: &LocaleProfile) -> BigDecimal {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',' || *c == '-')
        .collect();
    cleaned.retain(|c| c != profile.thousands_separator);

    let folded: String = cleaned
        .chars()
        .map(|c| {
            if c == profile.decimal_separator {
                '.'
            } else {
                c
            }
        })
        .collect();

    BigDecimal::from_str(&folded).unwrap_or_else(|_| BigDecimal::from(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_es_ar_thousands_and_decimal_comma() {
        let profile = LocaleProfile::es_ar();
        let value = RawCellValue::from("1.234,56");
        assert_eq!(parse_amount(&value, &profile), dec("1234.56"));
    }

    #[test]
    fn strips_currency_symbols_and_whitespace() {
        let profile = LocaleProfile::es_ar();
        let value = RawCellValue::from("$ 1.234,56 ARS");
        assert_eq!(parse_amount(&value, &profile), dec("1234.56"));
    }

    #[test]
    fn keeps_the_sign_for_the_caller() {
        let profile = LocaleProfile::es_ar();
        let value = RawCellValue::from("-500,25");
        assert_eq!(parse_amount(&value, &profile), dec("-500.25"));
    }

    #[test]
    fn non_numeric_text_becomes_zero() {
        let profile = LocaleProfile::es_ar();
        assert_eq!(
            parse_amount(&RawCellValue::from("abc"), &profile),
            BigDecimal::from(0)
        );
        assert_eq!(
            parse_amount(&RawCellValue::from(""), &profile),
            BigDecimal::from(0)
        );
    }

    #[test]
    fn numeric_cells_pass_through() {
        let profile = LocaleProfile::es_ar();
        assert_eq!(
            parse_amount(&RawCellValue::Number(1000.0), &profile),
            BigDecimal::from(1000)
        );
    }

    #[test]
    fn nan_collapses_to_zero() {
        let profile = LocaleProfile::es_ar();
        assert_eq!(
            parse_amount(&RawCellValue::Number(f64::NAN), &profile),
            BigDecimal::from(0)
        );
        assert_eq!(
            parse_amount(&RawCellValue::Number(f64::INFINITY), &profile),
            BigDecimal::from(0)
        );
    }

    #[test]
    fn empty_and_date_cells_become_zero() {
        let profile = LocaleProfile::es_ar();
        assert_eq!(
            parse_amount(&RawCellValue::Empty, &profile),
            BigDecimal::from(0)
        );
    }

    #[test]
    fn en_us_convention() {
        let profile = LocaleProfile::en_us();
        let value = RawCellValue::from("1,234.56");
        assert_eq!(parse_amount(&value, &profile), dec("1234.56"));
    }
}
