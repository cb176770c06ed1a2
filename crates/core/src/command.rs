// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A command represents booking-screen intent as data only.
///
/// Commands are the only way to change a booking selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Step the ticket count up by one (clamped to the per-order maximum).
    IncrementTickets,
    /// Step the ticket count down by one (clamped to one).
    DecrementTickets,
    /// Submit a coupon code for the current selection.
    ApplyCoupon {
        /// The submitted code, as typed.
        code: String,
    },
}
