// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book_domain::{Event, EventDate};
use time::OffsetDateTime;
use time::macros::datetime;

pub const NOW: OffsetDateTime = datetime!(2026-06-01 12:00 UTC);

/// A typical upcoming event for booking tests.
pub fn make_event(id: u64, price: f64) -> Event {
    Event::new(
        id,
        format!("Friday Night Classics {id}"),
        EventDate::Text(String::from("2026-07-15")),
        String::from("7:30 PM"),
        String::from("Grand Hall"),
        String::from("50-80 people"),
        price,
    )
}
