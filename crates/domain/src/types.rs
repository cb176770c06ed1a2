// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::SeatStatus;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// An event date as supplied by the catalog.
///
/// Catalog data arrives either as an already-resolved point in time or as
/// free text that still needs parsing. Resolution is deferred so that a
/// malformed date can be surfaced per event instead of rejecting the whole
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDate {
    /// A fully resolved point in time.
    Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    /// Free text, resolved on demand.
    Text(String),
}

impl EventDate {
    /// Resolves this date to a point in time.
    ///
    /// Text dates are parsed as RFC 3339 first, then as a plain
    /// `YYYY-MM-DD` calendar date at midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the text matches neither
    /// format.
    pub fn resolve(&self) -> Result<OffsetDateTime, DomainError> {
        match self {
            Self::Timestamp(datetime) => Ok(*datetime),
            Self::Text(text) => {
                if let Ok(datetime) = OffsetDateTime::parse(text, &Rfc3339) {
                    return Ok(datetime);
                }

                let date_only = format_description!("[year]-[month]-[day]");
                time::Date::parse(text, &date_only)
                    .map(|date| date.midnight().assume_utc())
                    .map_err(|err| DomainError::DateParseError {
                        date_string: text.clone(),
                        error: err.to_string(),
                    })
            }
        }
    }
}

/// A catalog event as supplied by the presentation layer.
///
/// Events are immutable from the engine's perspective. The `capacity` field
/// is free text with an embedded seat count (e.g. "50-80 people"); see
/// `parse_total_seats` for how the authoritative total is extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Catalog identifier.
    id: u64,
    /// Display title.
    title: String,
    /// Event date (may still be free text).
    date: EventDate,
    /// Showtime display text (e.g. "7:30 PM").
    time: String,
    /// Venue display text.
    venue: String,
    /// Free-text capacity description.
    capacity: String,
    /// Non-negative unit ticket price in rupees.
    price: f64,
}

impl Event {
    /// Creates a new `Event`.
    ///
    /// # Arguments
    ///
    /// * `id` - Catalog identifier
    /// * `title` - Display title
    /// * `date` - Event date
    /// * `time` - Showtime display text
    /// * `venue` - Venue display text
    /// * `capacity` - Free-text capacity description
    /// * `price` - Unit ticket price in rupees
    #[must_use]
    pub const fn new(
        id: u64,
        title: String,
        date: EventDate,
        time: String,
        venue: String,
        capacity: String,
        price: f64,
    ) -> Self {
        Self {
            id,
            title,
            date,
            time,
            venue,
            capacity,
            price,
        }
    }

    /// Returns the catalog identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the event date.
    #[must_use]
    pub const fn date(&self) -> &EventDate {
        &self.date
    }

    /// Returns the showtime display text.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the venue display text.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Returns the free-text capacity description.
    #[must_use]
    pub fn capacity(&self) -> &str {
        &self.capacity
    }

    /// Returns the unit ticket price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

/// A display-ready projection of an `Event` plus computed availability.
///
/// Enrichment never mutates its input; the original event is carried along
/// unchanged for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedEvent {
    /// The original event, preserved as supplied.
    pub event: Event,
    /// Total seat count parsed from the capacity text (or defaulted).
    pub total_seats: u32,
    /// Remaining seats, in `[1, total_seats]` for upcoming events and 0 for
    /// passed or unknown-date events.
    pub remaining_seats: u32,
    /// Human-readable availability status.
    pub seat_status: SeatStatus,
    /// Whether the drawn availability percentage was below 20.
    pub is_low_availability: bool,
    /// Formatted capacity line for display.
    pub display_capacity: String,
}

impl EnrichedEvent {
    /// Returns the short urgency label shown on event cards.
    #[must_use]
    pub const fn availability_label(&self) -> &'static str {
        if self.is_low_availability {
            "Hurry! Limited seats"
        } else {
            "Available"
        }
    }
}
