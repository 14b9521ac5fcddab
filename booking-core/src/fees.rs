//! Surcharges added on top of an order subtotal.
use crate::constants::{
    MODAL_SERVICE_RATE, PROCESSING_FEE_LABEL, REGISTRATION_PROCESSING_FEE,
    REGISTRATION_SERVICE_FEE, SERVICE_FEE_LABEL,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A flat fee charged once per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFee {
    pub label: String,
    pub amount: Decimal,
}

impl FixedFee {
    #[must_use]
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// One computed fee line on an order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    pub label: String,
    pub amount: Decimal,
    /// Rate behind a proportional fee, shown next to its label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
}

/// Fee lines for an order; orders rarely carry more than two.
pub type FeeLines = SmallVec<[FeeLine; 2]>;

/// Rule set determining surcharges added to the subtotal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeePolicy {
    #[default]
    None,
    Proportional { label: String, rate: Decimal },
    Fixed { fees: Vec<FixedFee> },
}

impl FeePolicy {
    #[must_use]
    pub fn proportional(label: impl Into<String>, rate: Decimal) -> Self {
        Self::Proportional {
            label: label.into(),
            rate,
        }
    }

    pub fn fixed(fees: impl IntoIterator<Item = FixedFee>) -> Self {
        Self::Fixed {
            fees: fees.into_iter().collect(),
        }
    }

    /// 10% service fee used by the ticket-selection modal.
    #[must_use]
    pub fn ticket_modal() -> Self {
        Self::proportional(SERVICE_FEE_LABEL, MODAL_SERVICE_RATE)
    }

    /// Flat service and processing fees used by the registration page.
    #[must_use]
    pub fn registration() -> Self {
        Self::fixed([
            FixedFee::new(SERVICE_FEE_LABEL, REGISTRATION_SERVICE_FEE),
            FixedFee::new(PROCESSING_FEE_LABEL, REGISTRATION_PROCESSING_FEE),
        ])
    }

    /// Fee lines for a subtotal. An order without line items carries no fees.
    #[must_use]
    pub fn fee_lines(&self, subtotal: Decimal, has_items: bool) -> FeeLines {
        if !has_items {
            return FeeLines::new();
        }
        match self {
            Self::None => FeeLines::new(),
            Self::Proportional { label, rate } => {
                let mut lines = FeeLines::new();
                lines.push(FeeLine {
                    label: label.clone(),
                    amount: subtotal.saturating_mul(*rate),
                    rate: Some(*rate),
                });
                lines
            }
            Self::Fixed { fees } => fees
                .iter()
                .map(|fee| FeeLine {
                    label: fee.label.clone(),
                    amount: fee.amount,
                    rate: None,
                })
                .collect(),
        }
    }
}
