// libs/appointment-cell/src/dates.rs
use chrono::NaiveDate;

use crate::models::AppointmentError;

/// Parse a calendar date arriving on an external boundary. Accepts ISO 8601
/// (`2026-02-04`) and the legacy wire format (`04-02-2026`). Everything past
/// this point works with `NaiveDate` only.
pub fn parse_boundary_date(input: &str) -> Result<NaiveDate, AppointmentError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d-%m-%Y"))
        .map_err(|_| {
            AppointmentError::ValidationError(format!(
                "Invalid date '{}': expected YYYY-MM-DD or DD-MM-YYYY",
                input
            ))
        })
}

/// Format a date for the demonstration wire contract, which uses DD-MM-YYYY.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}
