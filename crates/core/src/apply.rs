// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BookingState, BookingSummary, TransitionResult};
use cine_book_domain::{PricingResult, adjust_ticket_count, validate_ticket_count};

/// Applies a command to the current selection, producing a new selection
/// and a fresh quote.
///
/// Every transition reprices the selection from scratch, so a coupon
/// applied before a quantity change is always recomputed against the new
/// subtotal.
///
/// # Arguments
///
/// * `state` - The current selection (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new selection and its quote
///
/// # Errors
///
/// Currently infallible in practice (steppers clamp, unknown coupons are a
/// valid quote outcome); the `Result` keeps the transition seam uniform
/// with `finalize`.
pub fn apply(state: &BookingState, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_state: BookingState = state.clone();

    match command {
        Command::IncrementTickets => {
            new_state.ticket_count = adjust_ticket_count(state.ticket_count, 1);
        }
        Command::DecrementTickets => {
            new_state.ticket_count = adjust_ticket_count(state.ticket_count, -1);
        }
        Command::ApplyCoupon { code } => {
            let trimmed: &str = code.trim();
            // An empty submission leaves the existing selection alone.
            if !trimmed.is_empty() {
                new_state.coupon_code = Some(trimmed.to_string());
            }
        }
    }

    let pricing: PricingResult = new_state.quote();

    Ok(TransitionResult { new_state, pricing })
}

/// Finalizes the selection into the summary handed to the payment layer.
///
/// Runs the submission check independently of the clamped stepper path, so
/// a ticket count forced from outside is still rejected.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if the ticket count is outside the
/// per-order bounds.
pub fn finalize(state: &BookingState) -> Result<BookingSummary, CoreError> {
    validate_ticket_count(state.ticket_count)?;

    let pricing: PricingResult = state.quote();

    Ok(BookingSummary {
        event_id: state.event.id(),
        event_title: state.event.title().to_string(),
        date: state.selected_date.clone(),
        time: state.selected_time.clone(),
        tickets: state.ticket_count,
        subtotal: pricing.subtotal,
        discount: pricing.discount_amount,
        total: pricing.total,
    })
}
