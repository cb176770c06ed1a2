// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-order ticket quantity policy.
//!
//! The quantity stepper clamps silently; the submission check rejects. Both
//! exist because a caller can bypass the clamped stepper and force an
//! arbitrary count into a submission.

use crate::error::DomainError;

/// Minimum tickets per order.
pub const MIN_TICKETS_PER_ORDER: u32 = 1;

/// Maximum tickets per order.
pub const MAX_TICKETS_PER_ORDER: u32 = 2;

/// Applies a stepper adjustment to the ticket count, clamped to the
/// per-order bounds.
///
/// Stepping past a bound is a no-op, not an error.
#[must_use]
pub const fn adjust_ticket_count(current: u32, delta: i32) -> u32 {
    let adjusted: u32 = if delta >= 0 {
        current.saturating_add(delta.unsigned_abs())
    } else {
        current.saturating_sub(delta.unsigned_abs())
    };

    if adjusted < MIN_TICKETS_PER_ORDER {
        MIN_TICKETS_PER_ORDER
    } else if adjusted > MAX_TICKETS_PER_ORDER {
        MAX_TICKETS_PER_ORDER
    } else {
        adjusted
    }
}

/// Submission check for the proceed action.
#[must_use]
pub const fn can_proceed(ticket_count: u32) -> bool {
    ticket_count >= MIN_TICKETS_PER_ORDER && ticket_count <= MAX_TICKETS_PER_ORDER
}

/// Validates the ticket count at submission time.
///
/// # Errors
///
/// Returns `DomainError::TicketLimitExceeded` for counts above the per-order
/// maximum (with the user-facing rejection message), and
/// `DomainError::InvalidTicketCount` for a zero count.
pub const fn validate_ticket_count(ticket_count: u32) -> Result<(), DomainError> {
    if ticket_count < MIN_TICKETS_PER_ORDER {
        return Err(DomainError::InvalidTicketCount {
            count: ticket_count,
        });
    }
    if ticket_count > MAX_TICKETS_PER_ORDER {
        return Err(DomainError::TicketLimitExceeded {
            count: ticket_count,
        });
    }
    Ok(())
}
