use assert_matches::assert_matches;
use chrono::NaiveDate;

use appointment_cell::dates::{format_wire_date, parse_boundary_date};
use appointment_cell::models::AppointmentError;

#[test]
fn parses_iso_dates() {
    assert_eq!(
        parse_boundary_date("2026-02-04").unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
    );
}

#[test]
fn parses_legacy_wire_dates() {
    assert_eq!(
        parse_boundary_date("04-02-2026").unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 4).unwrap()
    );
}

#[test]
fn rejects_malformed_dates() {
    for input in ["7 Dec", "2026/02/04", "31-02-2026", "not-a-date", ""] {
        assert_matches!(
            parse_boundary_date(input),
            Err(AppointmentError::ValidationError(_)),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn wire_format_round_trips() {
    let date = NaiveDate::from_ymd_opt(2026, 12, 7).unwrap();
    let wire = format_wire_date(date);
    assert_eq!(wire, "07-12-2026");
    assert_eq!(parse_boundary_date(&wire).unwrap(), date);
}
