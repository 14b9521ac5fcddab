//! Derived order totals.
use crate::catalog::ItemId;
use crate::fees::FeeLines;
use crate::money::{format_currency, percent_label};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One catalog item's contribution to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// A discount returned by an external discount policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub label: String,
    pub amount: Decimal,
}

impl Discount {
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Totals for a selection. Recomputed on every change, never stored.
///
/// Amounts are exact; use [`OrderSummary::display`] for rounded strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub fees: FeeLines,
    /// Sum of all fee lines.
    pub service_fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    pub grand_total: Decimal,
}

impl OrderSummary {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Number of tickets across all line items.
    #[must_use]
    pub fn ticket_count(&self) -> u64 {
        self.line_items
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    #[must_use]
    pub fn line(&self, item_id: &str) -> Option<&LineItem> {
        self.line_items
            .iter()
            .find(|line| line.item_id.as_str() == item_id)
    }

    /// Apply a discount. The amount is capped so the total never goes below zero.
    #[must_use]
    pub fn with_discount(mut self, discount: Discount) -> Self {
        let before = self.subtotal.saturating_add(self.service_fee);
        let applied = discount.amount.max(Decimal::ZERO).min(before);
        self.grand_total = before - applied;
        self.discount = Some(Discount {
            label: discount.label,
            amount: applied,
        });
        self
    }

    /// Rounded, formatted amounts for rendering.
    #[must_use]
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            line_items: self
                .line_items
                .iter()
                .map(|line| DisplayLine {
                    label: format!("{} × {}", line.name, line.quantity),
                    amount: format_currency(line.line_total),
                })
                .collect(),
            subtotal: format_currency(self.subtotal),
            fees: self
                .fees
                .iter()
                .map(|fee| DisplayLine {
                    label: match fee.rate {
                        Some(rate) => format!("{} ({})", fee.label, percent_label(rate)),
                        None => fee.label.clone(),
                    },
                    amount: format_currency(fee.amount),
                })
                .collect(),
            discount: self.discount.as_ref().map(|discount| DisplayLine {
                label: discount.label.clone(),
                amount: format_currency(-discount.amount),
            }),
            grand_total: format_currency(self.grand_total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayLine {
    pub label: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDisplay {
    pub line_items: Vec<DisplayLine>,
    pub subtotal: String,
    pub fees: Vec<DisplayLine>,
    pub discount: Option<DisplayLine>,
    pub grand_total: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::FeeLine;
    use rust_decimal_macros::dec;

    fn summary_with_total(subtotal: Decimal, fee: Decimal) -> OrderSummary {
        let mut fees = FeeLines::new();
        fees.push(FeeLine {
            label: "Service fee".to_string(),
            amount: fee,
            rate: None,
        });
        OrderSummary {
            line_items: vec![LineItem {
                item_id: ItemId::from("general"),
                name: "General Admission".to_string(),
                unit_price: subtotal,
                quantity: 1,
                line_total: subtotal,
            }],
            subtotal,
            fees,
            service_fee: fee,
            discount: None,
            grand_total: subtotal.saturating_add(fee),
        }
    }

    #[test]
    fn discount_reduces_total() {
        let summary =
            summary_with_total(dec!(85), dec!(8.5)).with_discount(Discount::new("Promo", dec!(10)));
        assert_eq!(summary.grand_total, dec!(83.5));
    }

    #[test]
    fn discount_is_capped_at_the_total() {
        let summary = summary_with_total(dec!(85), dec!(8.5))
            .with_discount(Discount::new("Comp", dec!(500)));
        assert_eq!(summary.grand_total, Decimal::ZERO);
        assert_eq!(summary.discount.unwrap().amount, dec!(93.5));
    }

    #[test]
    fn negative_discounts_are_ignored() {
        let summary =
            summary_with_total(dec!(85), dec!(8.5)).with_discount(Discount::new("Odd", dec!(-5)));
        assert_eq!(summary.grand_total, dec!(93.5));
    }

    #[test]
    fn display_rounds_once_at_the_end() {
        let summary = summary_with_total(dec!(0.05), dec!(0.005));
        let display = summary.display();
        assert_eq!(display.fees[0].amount, "$0.01");
        assert_eq!(display.grand_total, "$0.06");
        assert_eq!(display.line_items[0].label, "General Admission × 1");
    }

    #[test]
    fn display_labels_proportional_fees_with_their_rate() {
        let mut summary = summary_with_total(dec!(85), dec!(8.5));
        summary.fees[0].rate = Some(dec!(0.10));
        let display = summary.display();
        assert_eq!(display.fees[0].label, "Service fee (10%)");
        assert_eq!(display.fees[0].amount, "$8.50");
    }

    #[test]
    fn discount_near_the_decimal_ceiling_does_not_overflow() {
        let summary = summary_with_total(Decimal::MAX, dec!(1))
            .with_discount(Discount::new("Promo", dec!(1)));
        assert_eq!(summary.grand_total, Decimal::MAX - dec!(1));
    }
}
