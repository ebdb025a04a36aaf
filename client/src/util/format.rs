//! Timestamp formatting for message cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Rendered in place of a missing or empty timestamp.
const PLACEHOLDER: &str = "-";

/// Two-digit long form, e.g. `15.01.2024, 10:30`.
const DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[day].[month].[year], [hour]:[minute]");

/// SQLite `CURRENT_TIMESTAMP` shape the backend writes for `created_at`.
const SQLITE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// ISO 8601 local datetime without an offset.
const ISO_LOCAL: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Format a backend timestamp for display.
///
/// Missing or empty input renders as a placeholder dash; recognized
/// datetimes render in two-digit long form; anything unparsable passes
/// through verbatim rather than erroring.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(text) = raw else {
        return PLACEHOLDER.to_owned();
    };
    if text.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    parse_datetime(text)
        .and_then(|dt| dt.format(DISPLAY).ok())
        .unwrap_or_else(|| text.to_owned())
}

fn parse_datetime(text: &str) -> Option<PrimitiveDateTime> {
    if let Ok(with_offset) = OffsetDateTime::parse(text, &Rfc3339) {
        // Rendered at the offset it was transmitted with.
        return Some(PrimitiveDateTime::new(with_offset.date(), with_offset.time()));
    }
    PrimitiveDateTime::parse(text, SQLITE)
        .or_else(|_| PrimitiveDateTime::parse(text, ISO_LOCAL))
        .ok()
}
