// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coupon resolution and order pricing.
//!
//! The coupon table is immutable process-wide configuration. Discounts are
//! a pure function of `(code, subtotal)` and are recomputed from scratch on
//! every quantity change; nothing is carried forward stale.
//!
//! Percentage discounts are rounded half-up to the paisa at the engine
//! layer, so display code never re-rounds.

use serde::{Deserialize, Serialize};

/// How a coupon's value applies to the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponKind {
    /// Discount proportional to the subtotal (value is percentage points).
    Percentage,
    /// Flat currency amount, capped at the subtotal.
    Fixed,
}

/// A single entry in the coupon table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coupon {
    /// Canonical (uppercase) coupon code.
    pub code: &'static str,
    /// How the value applies.
    pub kind: CouponKind,
    /// Percentage points or rupees, depending on `kind`.
    pub value: f64,
}

/// The fixed coupon table. Lookup is case-insensitive.
const COUPON_TABLE: [Coupon; 5] = [
    Coupon {
        code: "WELCOME10",
        kind: CouponKind::Percentage,
        value: 10.0,
    },
    Coupon {
        code: "SAVE20",
        kind: CouponKind::Percentage,
        value: 20.0,
    },
    Coupon {
        code: "FLAT100",
        kind: CouponKind::Fixed,
        value: 100.0,
    },
    Coupon {
        code: "NEWUSER",
        kind: CouponKind::Percentage,
        value: 15.0,
    },
    Coupon {
        code: "MOVIE50",
        kind: CouponKind::Fixed,
        value: 50.0,
    },
];

/// Result of resolving a coupon code against a subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponResult {
    /// Whether the code matched a table entry.
    pub valid: bool,
    /// Discount in rupees; 0 for unknown codes.
    pub discount_amount: f64,
    /// Human-readable success or rejection text.
    pub message: String,
}

/// A fully priced booking attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Unit price times ticket count, before discount.
    pub subtotal: f64,
    /// Discount in rupees; 0 without a valid coupon.
    pub discount_amount: f64,
    /// Subtotal minus discount, clamped at zero.
    pub total: f64,
    /// Coupon outcome text, if a code was submitted.
    pub message: Option<String>,
}

/// Looks up a coupon code, case-insensitively.
#[must_use]
pub fn find_coupon(code: &str) -> Option<Coupon> {
    let normalized: String = code.trim().to_ascii_uppercase();
    COUPON_TABLE
        .iter()
        .find(|coupon| coupon.code == normalized)
        .copied()
}

/// Resolves a coupon code against a subtotal.
///
/// Percentage coupons discount `subtotal * value / 100`, rounded half-up to
/// the paisa. Fixed coupons discount `min(value, subtotal)`, so the total
/// can never go negative. Unknown or empty codes are a normal outcome, not
/// an error.
///
/// # Arguments
///
/// * `code` - The submitted coupon code (any case, surrounding whitespace
///   ignored)
/// * `subtotal` - Unit price times ticket count, in rupees
#[must_use]
pub fn apply_coupon(code: &str, subtotal: f64) -> CouponResult {
    let Some(coupon) = find_coupon(code) else {
        return CouponResult {
            valid: false,
            discount_amount: 0.0,
            message: String::from("Invalid coupon code"),
        };
    };

    let discount_amount: f64 = match coupon.kind {
        CouponKind::Percentage => round_to_paise(subtotal * coupon.value / 100.0),
        CouponKind::Fixed => coupon.value.min(subtotal),
    };

    CouponResult {
        valid: true,
        discount_amount,
        message: format!(
            "Coupon applied! You saved ₹{}",
            format_amount(discount_amount)
        ),
    }
}

/// Computes the subtotal for a booking attempt.
#[must_use]
pub fn subtotal(unit_price: f64, ticket_count: u32) -> f64 {
    unit_price * f64::from(ticket_count)
}

/// Computes the payable total, clamped at zero.
#[must_use]
pub fn compute_total(unit_price: f64, ticket_count: u32, discount_amount: f64) -> f64 {
    (subtotal(unit_price, ticket_count) - discount_amount).max(0.0)
}

/// Prices a booking attempt in one pass.
///
/// The booking screen's single entry point: resolves the coupon (if any)
/// against the current subtotal and produces the full breakdown. Calling
/// this again after a quantity change recomputes the discount from scratch.
///
/// # Arguments
///
/// * `unit_price` - Ticket price in rupees
/// * `ticket_count` - Number of tickets in the order
/// * `coupon_code` - The submitted coupon code, if any
#[must_use]
pub fn price_order(unit_price: f64, ticket_count: u32, coupon_code: Option<&str>) -> PricingResult {
    let subtotal: f64 = subtotal(unit_price, ticket_count);

    let (discount_amount, message) = match coupon_code {
        Some(code) => {
            let result: CouponResult = apply_coupon(code, subtotal);
            (result.discount_amount, Some(result.message))
        }
        None => (0.0, None),
    };

    PricingResult {
        subtotal,
        discount_amount,
        total: (subtotal - discount_amount).max(0.0),
        message,
    }
}

/// Rounds a rupee amount half-up to the paisa.
fn round_to_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Formats a rupee amount without trailing zeros ("100", "37.5", "12.25").
fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0}")
    } else {
        let fixed: String = format!("{amount:.2}");
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
