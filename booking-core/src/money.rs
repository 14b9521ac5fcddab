//! Currency display helpers.
//!
//! Totals are kept as exact decimals everywhere else; rounding happens here,
//! once, when an amount is shown.

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_FRACTION_DIGITS};
use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to cents, half away from zero.
#[must_use]
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_FRACTION_DIGITS,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Format an amount as `$1,234.50`, with a leading `-` for negatives.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(whole))
}

/// Label a proportional rate, e.g. `0.10` becomes `10%`.
#[must_use]
pub fn percent_label(rate: Decimal) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{pct}%")
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_midpoints_away_from_zero() {
        assert_eq!(round_for_display(dec!(0.125)), dec!(0.13));
        assert_eq!(round_for_display(dec!(-0.125)), dec!(-0.13));
        assert_eq!(round_for_display(dec!(2.344)), dec!(2.34));
    }

    #[test]
    fn formats_with_grouping_and_padding() {
        assert_eq!(format_currency(dec!(170)), "$170.00");
        assert_eq!(format_currency(dec!(8.5)), "$8.50");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(dec!(-12.5)), "-$12.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn percent_label_strips_trailing_zeros() {
        assert_eq!(percent_label(dec!(0.10)), "10%");
        assert_eq!(percent_label(dec!(0.075)), "7.5%");
    }
}
