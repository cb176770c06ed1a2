// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, EventDate};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("whenever"),
        error: String::from("the 'year' component could not be parsed"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date 'whenever': the 'year' component could not be parsed"
    );

    let err: DomainError = DomainError::TicketLimitExceeded { count: 5 };
    assert_eq!(
        format!("{err}"),
        "Maximum 2 tickets can be purchased per order."
    );

    let err: DomainError = DomainError::InvalidTicketCount { count: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid ticket count: 0. At least one ticket is required"
    );
}

#[test]
fn test_unparsable_date_produces_parse_error() {
    let date: EventDate = EventDate::Text(String::from("next friday"));

    let result = date.resolve();

    assert!(matches!(
        result,
        Err(DomainError::DateParseError { date_string, .. }) if date_string == "next friday"
    ));
}

#[test]
fn test_date_resolution_accepts_both_text_formats() {
    let calendar: EventDate = EventDate::Text(String::from("2026-07-15"));
    let resolved = calendar.resolve().unwrap();
    assert_eq!(resolved.date(), time::macros::date!(2026 - 07 - 15));
    assert_eq!(resolved.time(), time::macros::time!(00:00));

    let rfc3339: EventDate = EventDate::Text(String::from("2026-07-15T19:30:00Z"));
    let resolved = rfc3339.resolve().unwrap();
    assert_eq!(resolved.time(), time::macros::time!(19:30));
}
