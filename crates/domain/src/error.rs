// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::order::MAX_TICKETS_PER_ORDER;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse an event date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Ticket count exceeds the per-order maximum at submission time.
    TicketLimitExceeded {
        /// The rejected ticket count.
        count: u32,
    },
    /// Ticket count is below the per-order minimum.
    InvalidTicketCount {
        /// The rejected ticket count.
        count: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TicketLimitExceeded { .. } => {
                write!(
                    f,
                    "Maximum {MAX_TICKETS_PER_ORDER} tickets can be purchased per order."
                )
            }
            Self::InvalidTicketCount { count } => {
                write!(
                    f,
                    "Invalid ticket count: {count}. At least one ticket is required"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
