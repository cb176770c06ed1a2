// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event enrichment.
//!
//! Builds display-ready event records from raw catalog events: the seat
//! total parsed from free-text capacity, a fresh availability estimate, and
//! the formatted capacity line. Enrichment never mutates its input and
//! retains no state between passes; the surrounding app may re-run it at any
//! time with a fresh catalog snapshot.

use rand::Rng;
use time::OffsetDateTime;

use crate::availability::{AvailabilityEstimate, SeatStatus, calculate_seat_availability};
use crate::capacity::parse_total_seats;
use crate::types::{EnrichedEvent, Event};

/// Enriches a single event with seat availability.
///
/// An event whose date cannot be resolved is surfaced with the distinct
/// "availability unknown" status rather than being treated as passed.
///
/// # Arguments
///
/// * `event` - The event to enrich
/// * `now` - The current point in time
/// * `rng` - Random source for the availability draw
pub fn enrich_event<R: Rng>(
    event: &Event,
    now: OffsetDateTime,
    rng: &mut R,
) -> EnrichedEvent {
    let total_seats: u32 = parse_total_seats(event.capacity());

    let estimate: AvailabilityEstimate = match event.date().resolve() {
        Ok(event_date) => calculate_seat_availability(event_date, now, total_seats, rng),
        Err(_) => AvailabilityEstimate::unknown(),
    };

    let display_capacity: String = if estimate.status == SeatStatus::Unknown {
        String::from("Availability unknown")
    } else {
        format!("{} of {total_seats} seats left", estimate.remaining_seats)
    };

    EnrichedEvent {
        event: event.clone(),
        total_seats,
        remaining_seats: estimate.remaining_seats,
        seat_status: estimate.status,
        is_low_availability: estimate.is_low_availability,
        display_capacity,
    }
}

/// Enriches a collection of events.
///
/// Order- and length-preserving; one availability draw per event.
///
/// # Arguments
///
/// * `events` - The catalog snapshot to enrich
/// * `now` - The current point in time
/// * `rng` - Random source for the availability draws
pub fn enrich_events<R: Rng>(
    events: &[Event],
    now: OffsetDateTime,
    rng: &mut R,
) -> Vec<EnrichedEvent> {
    events
        .iter()
        .map(|event| enrich_event(event, now, rng))
        .collect()
}
