// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_book_domain::{Event, EventDate, PricingResult, price_order};
use serde::{Deserialize, Serialize};

/// The booking selection for a single event.
///
/// The resolved event is passed in explicitly; there is no ambient
/// "selected event" cell shared across screens. Only one date and time
/// exist per event, so both default from the event and are carried for the
/// summary.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    /// The event being booked.
    pub event: Event,
    /// The selected date (defaulted from the event).
    pub selected_date: EventDate,
    /// The selected showtime (defaulted from the event).
    pub selected_time: String,
    /// Tickets in the order, bounded by the per-order policy.
    pub ticket_count: u32,
    /// The last submitted coupon code, if any. Invalid codes are retained
    /// so re-quotes keep reporting the rejection.
    pub coupon_code: Option<String>,
}

impl BookingState {
    /// Creates a fresh selection for an event: one ticket, no coupon,
    /// date and time taken from the event.
    #[must_use]
    pub fn new(event: Event) -> Self {
        let selected_date: EventDate = event.date().clone();
        let selected_time: String = event.time().to_string();
        Self {
            event,
            selected_date,
            selected_time,
            ticket_count: 1,
            coupon_code: None,
        }
    }

    /// Prices the current selection from scratch.
    ///
    /// The discount is a function of `(code, subtotal)`; nothing is cached
    /// across quantity changes.
    #[must_use]
    pub fn quote(&self) -> PricingResult {
        price_order(
            self.event.price(),
            self.ticket_count,
            self.coupon_code.as_deref(),
        )
    }
}

/// The result of a successful booking transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new selection after the transition.
    pub new_state: BookingState,
    /// The selection priced from scratch after the transition.
    pub pricing: PricingResult,
}

/// The finalized summary handed to the payment layer.
///
/// This is the opaque plain-data shape crossing the engine boundary; the
/// payment screen renders it and never calls back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// Catalog identifier of the booked event.
    pub event_id: u64,
    /// Display title of the booked event.
    pub event_title: String,
    /// The selected date.
    pub date: EventDate,
    /// The selected showtime.
    pub time: String,
    /// Tickets in the order.
    pub tickets: u32,
    /// Subtotal before discount, in rupees.
    pub subtotal: f64,
    /// Applied discount, in rupees.
    pub discount: f64,
    /// Payable total, in rupees.
    pub total: f64,
}
