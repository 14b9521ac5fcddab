//! Promo-code lookup seam.
//!
//! Validating a code and deciding its discount belongs to an external
//! collaborator. The default policy knows no codes, so applying one leaves
//! totals unchanged.

use crate::summary::{Discount, OrderSummary};

pub trait DiscountPolicy {
    /// Discount for `code` against the current order, if the code is valid.
    fn lookup(&self, code: &str, summary: &OrderSummary) -> Option<Discount>;
}

/// Policy that recognizes no promo codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscounts;

impl DiscountPolicy for NoDiscounts {
    fn lookup(&self, _code: &str, _summary: &OrderSummary) -> Option<Discount> {
        None
    }
}

impl<F> DiscountPolicy for F
where
    F: Fn(&str, &OrderSummary) -> Option<Discount>,
{
    fn lookup(&self, code: &str, summary: &OrderSummary) -> Option<Discount> {
        self(code, summary)
    }
}
