// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-module properties of the availability and pricing engine.

use crate::{
    Event, EventDate, SeatStatus, apply_coupon, calculate_seat_availability, compute_total,
    enrich_events,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

const NOW: OffsetDateTime = datetime!(2026-06-01 12:00 UTC);

fn make_event(id: u64, date: &str, capacity: &str, price: f64) -> Event {
    Event::new(
        id,
        format!("Event {id}"),
        EventDate::Text(String::from(date)),
        String::from("7:30 PM"),
        String::from("Grand Hall"),
        String::from(capacity),
        price,
    )
}

#[test]
fn test_remaining_seats_bounded_across_seeds_and_horizons() {
    for seed in 0..25_u64 {
        let mut rng = StdRng::seed_from_u64(seed);

        for days in [0, 1, 2, 3, 6, 7, 13, 14, 29, 30, 90] {
            let event_date = NOW + Duration::days(days);

            for total in [1_u32, 10, 50, 100, 500] {
                let estimate = calculate_seat_availability(event_date, NOW, total, &mut rng);

                assert!(
                    (1..=total).contains(&estimate.remaining_seats),
                    "seed {seed}, {days} days, {total} seats: got {}",
                    estimate.remaining_seats
                );
            }
        }
    }
}

#[test]
fn test_every_passed_event_reports_identically() {
    for seed in 0..10_u64 {
        let mut rng = StdRng::seed_from_u64(seed);

        for days in 1..30_i64 {
            let event_date = NOW - Duration::days(days);
            let estimate = calculate_seat_availability(event_date, NOW, 100, &mut rng);

            assert_eq!(estimate.remaining_seats, 0);
            assert_eq!(estimate.status, SeatStatus::EventPassed);
            assert!(estimate.is_low_availability);
        }
    }
}

#[test]
fn test_low_availability_flag_matches_status() {
    // Statuses at or above "Limited seats left" imply a draw of at least
    // 20%, which must never be flagged low.
    let mut rng = StdRng::seed_from_u64(3);

    for days in 0..60_i64 {
        let event_date = NOW + Duration::days(days);
        let estimate = calculate_seat_availability(event_date, NOW, 100, &mut rng);

        match estimate.status {
            SeatStatus::PlentyAvailable | SeatStatus::FillingUp | SeatStatus::LimitedSeats => {
                assert!(!estimate.is_low_availability);
            }
            SeatStatus::LastFew | SeatStatus::AlmostSoldOut => {
                assert!(estimate.is_low_availability);
            }
            SeatStatus::EventPassed | SeatStatus::Unknown => {
                unreachable!("upcoming events only")
            }
        }
    }
}

#[test]
fn test_enrichment_composes_with_pricing() {
    let events = vec![
        make_event(1, "2026-07-15", "50-80 people", 250.0),
        make_event(2, "2026-06-03", "no numbers here", 400.0),
    ];
    let mut rng = StdRng::seed_from_u64(11);

    let enriched = enrich_events(&events, NOW, &mut rng);

    // Pricing operates on the preserved original event, not the projection.
    let unit_price: f64 = enriched[0].event.price();
    let coupon = apply_coupon("SAVE20", unit_price * 2.0);

    assert!(coupon.valid);
    assert_eq!(coupon.discount_amount, 100.0);
    assert_eq!(compute_total(unit_price, 2, coupon.discount_amount), 400.0);
}

#[test]
fn test_pricing_never_negative_for_any_table_entry() {
    let codes = ["WELCOME10", "SAVE20", "FLAT100", "NEWUSER", "MOVIE50"];

    for code in codes {
        for subtotal in [0.0, 1.0, 49.5, 50.0, 99.99, 100.0, 250.0, 10_000.0] {
            let result = apply_coupon(code, subtotal);

            assert!(result.valid);
            assert!(result.discount_amount >= 0.0);
            assert!(
                result.discount_amount <= subtotal + f64::EPSILON,
                "{code} at {subtotal} discounted {}",
                result.discount_amount
            );
        }
    }
}
