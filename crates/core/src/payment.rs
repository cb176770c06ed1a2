// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! UPI payment request formatting.
//!
//! The payment screen is a mock: it renders a `upi://pay` deep link and a
//! statically generated QR image for the finalized total. Only the data
//! formatting lives here; no payment processing occurs.

use crate::state::BookingSummary;
use serde::{Deserialize, Serialize};

/// A UPI deep-link payment request for a finalized booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpiPaymentRequest {
    /// Payee virtual payment address (`pa`).
    pub payee_address: String,
    /// Payee display name (`pn`).
    pub payee_name: String,
    /// Amount with two decimal places (`am`).
    pub amount: String,
    /// ISO currency code (`cu`).
    pub currency: String,
}

impl UpiPaymentRequest {
    /// Builds a request for a finalized booking summary.
    ///
    /// # Arguments
    ///
    /// * `summary` - The finalized booking
    /// * `payee_address` - The merchant's virtual payment address
    /// * `payee_name` - The merchant's display name
    #[must_use]
    pub fn for_summary(summary: &BookingSummary, payee_address: &str, payee_name: &str) -> Self {
        Self {
            payee_address: payee_address.to_string(),
            payee_name: payee_name.to_string(),
            amount: format!("{:.2}", summary.total),
            currency: String::from("INR"),
        }
    }

    /// Renders the `upi://pay` deep link with percent-encoded values.
    #[must_use]
    pub fn to_uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&am={}&cu={}",
            percent_encode(&self.payee_address),
            percent_encode(&self.payee_name),
            percent_encode(&self.amount),
            percent_encode(&self.currency)
        )
    }

    /// Renders the QR image URL for the deep link.
    ///
    /// The whole URI is encoded again as a single query value for the
    /// external QR renderer.
    #[must_use]
    pub fn qr_image_url(&self, size: u16) -> String {
        format!(
            "https://api.qrserver.com/v1/create-qr-code/?size={size}x{size}&data={}",
            percent_encode(&self.to_uri())
        )
    }
}

/// Percent-encodes a query component (RFC 3986 unreserved characters pass
/// through).
fn percent_encode(value: &str) -> String {
    let mut encoded: String = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{byte:02X}"));
            }
        }
    }

    encoded
}
