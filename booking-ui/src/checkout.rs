use crate::navigation::Screen;
use booking_core::{OrderSummary, Selection};
use serde::{Deserialize, Serialize};

/// Selection and totals handed from a checkout screen to the payment screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub origin: Screen,
    pub selection: Selection,
    pub summary: OrderSummary,
}

impl CheckoutRequest {
    #[must_use]
    pub const fn new(origin: Screen, selection: Selection, summary: OrderSummary) -> Self {
        Self {
            origin,
            selection,
            summary,
        }
    }
}
