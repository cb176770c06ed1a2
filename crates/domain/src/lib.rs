// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod capacity;
mod enrichment;
mod error;
mod order;
mod pricing;
mod types;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityEstimate, SeatStatus, calculate_seat_availability};
pub use capacity::{DEFAULT_TOTAL_SEATS, parse_total_seats};
pub use enrichment::{enrich_event, enrich_events};
pub use error::DomainError;
pub use order::{
    MAX_TICKETS_PER_ORDER, MIN_TICKETS_PER_ORDER, adjust_ticket_count, can_proceed,
    validate_ticket_count,
};
pub use pricing::{
    Coupon, CouponKind, CouponResult, PricingResult, apply_coupon, compute_total, find_coupon,
    price_order, subtotal,
};

// Re-export public types
pub use types::{EnrichedEvent, Event, EventDate};
