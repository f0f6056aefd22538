//! Date-cell parsing: typed dates, spreadsheet serials, and text fallbacks

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::locale::LocaleProfile;
use crate::types::RawCellValue;

/// First representable serial. Serial 1 is 1900-01-01.
const MIN_SERIAL: f64 = 1.0;
/// The phantom 1900-02-29 that spreadsheet serials carry from the Lotus era.
const PHANTOM_LEAP_SERIAL: i64 = 60;

/// Parse a date cell, trying the representations in priority order:
/// typed date, spreadsheet serial number, then locale text formats.
/// Returns `None` when nothing applies; never fails.
pub fn parse_date(value: &RawCellValue, profile: &LocaleProfile) -> Option<NaiveDate> {
    match value {
        RawCellValue::Date(dt) => Some(dt.date()),
        RawCellValue::Number(serial) => date_from_serial(*serial),
        RawCellValue::Text(s) => parse_date_text(s, profile),
        RawCellValue::Empty => None,
    }
}

/// Convert a spreadsheet date serial to a calendar date.
///
/// Serials count days from the 1900 epoch, and inherit the Lotus 1-2-3 bug
/// that treats 1900 as a leap year: serials 1 through 59 count from
/// 1899-12-31, serial 60 is the nonexistent 1900-02-29, and everything after
/// counts from 1899-12-30. Fractional parts are time-of-day and are
/// discarded (matching is day-granular).
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < MIN_SERIAL {
        return None;
    }

    let days = serial.trunc() as i64;
    if days == PHANTOM_LEAP_SERIAL {
        return None;
    }

    let epoch = if days < PHANTOM_LEAP_SERIAL {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    epoch.checked_add_signed(Duration::days(days))
}

fn parse_date_text(text: &str, profile: &LocaleProfile) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in &profile.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}
