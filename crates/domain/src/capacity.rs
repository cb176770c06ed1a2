// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity parsing for free-text venue descriptions.

/// Total seats assumed when the capacity text carries no usable number.
pub const DEFAULT_TOTAL_SEATS: u32 = 100;

/// Extracts the authoritative total seat count from a capacity description.
///
/// The first maximal digit run in the text is the total (so "50-80 people"
/// yields 50). Text without any digits, or with a run too large for `u32`,
/// falls back to `DEFAULT_TOTAL_SEATS`.
#[must_use]
pub fn parse_total_seats(capacity: &str) -> u32 {
    let digits: String = capacity
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().unwrap_or(DEFAULT_TOTAL_SEATS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_integer_wins() {
        assert_eq!(parse_total_seats("50-80 people"), 50);
        assert_eq!(parse_total_seats("about 120 seats"), 120);
    }

    #[test]
    fn test_no_digits_defaults() {
        assert_eq!(parse_total_seats("no numbers here"), DEFAULT_TOTAL_SEATS);
        assert_eq!(parse_total_seats(""), DEFAULT_TOTAL_SEATS);
    }

    #[test]
    fn test_digit_run_is_maximal() {
        assert_eq!(parse_total_seats("cap: 2500"), 2500);
    }

    #[test]
    fn test_oversized_run_defaults() {
        assert_eq!(
            parse_total_seats("999999999999999999999"),
            DEFAULT_TOTAL_SEATS
        );
    }
}
