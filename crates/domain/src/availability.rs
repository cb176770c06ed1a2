// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat availability estimation.
//!
//! The estimator is a stochastic simulation of demand, not an inventory
//! system: days-until-event selects an availability-percentage band, and a
//! uniform draw within that band produces the displayed seat count.
//!
//! ## Invariants
//!
//! - `1 <= remaining_seats <= total_seats` for any upcoming event with
//!   `total_seats > 0` (a floor of one seat is enforced even when the draw
//!   rounds to zero)
//! - Passed events report exactly zero remaining seats
//! - The status label derives from the drawn percentage, not the band
//!
//! The random source is an explicit argument so callers can seed it.
//! Repeated calls with the same inputs draw fresh values; callers that need
//! a stable display across renders must cache the result.

use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const SECONDS_PER_DAY: i64 = 86_400;

/// Human-readable seat availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatStatus {
    /// 80% or more of seats remain.
    PlentyAvailable,
    /// 50-79% of seats remain.
    FillingUp,
    /// 20-49% of seats remain.
    LimitedSeats,
    /// 5-19% of seats remain.
    LastFew,
    /// Under 5% of seats remain.
    AlmostSoldOut,
    /// The event date is in the past.
    EventPassed,
    /// The event date could not be resolved.
    Unknown,
}

impl SeatStatus {
    /// Converts this status to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlentyAvailable => "Plenty of seats available",
            Self::FillingUp => "Seats filling up",
            Self::LimitedSeats => "Limited seats left",
            Self::LastFew => "Last few seats!",
            Self::AlmostSoldOut => "Almost sold out!",
            Self::EventPassed => "Event has passed",
            Self::Unknown => "Availability unknown",
        }
    }
}

impl std::fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a seat availability estimate for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEstimate {
    /// Remaining seats derived from the drawn percentage.
    pub remaining_seats: u32,
    /// Human-readable availability status.
    pub status: SeatStatus,
    /// Whether the drawn percentage was below 20.
    pub is_low_availability: bool,
}

impl AvailabilityEstimate {
    /// The terminal estimate for an event whose date has passed.
    #[must_use]
    pub const fn passed() -> Self {
        Self {
            remaining_seats: 0,
            status: SeatStatus::EventPassed,
            is_low_availability: true,
        }
    }

    /// The estimate for an event whose date could not be resolved.
    ///
    /// Surfaced as a distinct state rather than guessing "passed" or
    /// "upcoming".
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            remaining_seats: 0,
            status: SeatStatus::Unknown,
            is_low_availability: false,
        }
    }
}

/// Estimates remaining seats for an event.
///
/// Computes days-until-event (ceiling, so a partially elapsed day still
/// counts), selects an availability band, draws a uniform percentage within
/// it, and derives the seat count and status label.
///
/// # Arguments
///
/// * `event_date` - When the event takes place
/// * `now` - The current point in time
/// * `total_seats` - Maximum number of seats available
/// * `rng` - Random source for the percentage draw
///
/// # Returns
///
/// An `AvailabilityEstimate`. Events in the past yield the terminal
/// `passed()` estimate with zero seats.
pub fn calculate_seat_availability<R: Rng>(
    event_date: OffsetDateTime,
    now: OffsetDateTime,
    total_seats: u32,
    rng: &mut R,
) -> AvailabilityEstimate {
    let days_until_event: i64 = days_until(event_date, now);

    if days_until_event < 0 {
        return AvailabilityEstimate::passed();
    }

    let (band_min, band_max) = availability_band(days_until_event);
    let percentage: u8 = rng.random_range(band_min..=band_max);

    AvailabilityEstimate {
        remaining_seats: remaining_from_percentage(total_seats, percentage),
        status: status_for_percentage(percentage),
        is_low_availability: percentage < 20,
    }
}

/// Calculates whole days until the event, rounding up.
///
/// An event later today is 0 days away; an event any amount of time in the
/// past is negative.
fn days_until(event_date: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let seconds: i64 = (event_date - now).whole_seconds();
    let floor: i64 = seconds.div_euclid(SECONDS_PER_DAY);
    let partial: i64 = i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0);
    floor + partial
}

/// Maps days-until-event to an inclusive availability-percentage band.
///
/// Further-out events have more seats: the band minimum is non-decreasing
/// across the 0/1/3/7/14/30 thresholds.
const fn availability_band(days_until_event: i64) -> (u8, u8) {
    match days_until_event {
        0 => (0, 5),
        1..=2 => (5, 15),
        3..=6 => (10, 30),
        7..=13 => (30, 60),
        14..=29 => (60, 80),
        _ => (80, 100),
    }
}

/// Derives the remaining seat count from the drawn percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn remaining_from_percentage(total_seats: u32, percentage: u8) -> u32 {
    // scaled <= total_seats, so the narrowing cast cannot truncate.
    let scaled: u64 = (total_seats as u64 * percentage as u64) / 100;
    let remaining: u32 = scaled as u32;

    // The draw may round to zero; one seat is always shown for an upcoming
    // event.
    if remaining == 0 { 1 } else { remaining }
}

/// Derives the status label from the drawn percentage (not the band).
const fn status_for_percentage(percentage: u8) -> SeatStatus {
    match percentage {
        80.. => SeatStatus::PlentyAvailable,
        50..=79 => SeatStatus::FillingUp,
        20..=49 => SeatStatus::LimitedSeats,
        5..=19 => SeatStatus::LastFew,
        _ => SeatStatus::AlmostSoldOut,
    }
}
