//! Payment screen: choose a method and submit the stubbed payment.
use crate::checkout::CheckoutRequest;
use crate::navigation::Screen;
use booking_core::OrderSummary;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    PayPal,
    ApplePay,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [Self; 4] = [Self::Card, Self::PayPal, Self::ApplePay, Self::BankTransfer];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit or debit card",
            Self::PayPal => "PayPal",
            Self::ApplePay => "Apple Pay",
            Self::BankTransfer => "Bank transfer",
        }
    }

    /// Short code used in confirmation references.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::PayPal => "PAYPAL",
            Self::ApplePay => "APPLEPAY",
            Self::BankTransfer => "BANK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Editing,
    Submitted,
}

/// Stub confirmation returned by a submitted payment. No gateway is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub reference: String,
    pub method: PaymentMethod,
    pub amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct PaymentPage {
    request: CheckoutRequest,
    method: Option<PaymentMethod>,
    status: PaymentStatus,
}

impl PaymentPage {
    #[must_use]
    pub const fn new(request: CheckoutRequest) -> Self {
        Self {
            request,
            method: None,
            status: PaymentStatus::Editing,
        }
    }

    /// Choose a method. Ignored after submission.
    pub fn select_method(&mut self, method: PaymentMethod) -> bool {
        if self.status == PaymentStatus::Submitted {
            return false;
        }
        self.method = Some(method);
        true
    }

    #[must_use]
    pub const fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    #[must_use]
    pub const fn status(&self) -> PaymentStatus {
        self.status
    }

    #[must_use]
    pub const fn summary(&self) -> &OrderSummary {
        &self.request.summary
    }

    /// Screen the payment step returns to.
    #[must_use]
    pub const fn origin(&self) -> Screen {
        self.request.origin
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status == PaymentStatus::Editing
            && self.method.is_some()
            && self.request.summary.grand_total > Decimal::ZERO
    }

    pub fn submit(&mut self) -> Option<PaymentConfirmation> {
        if !self.can_submit() {
            return None;
        }
        let method = self.method?;
        self.status = PaymentStatus::Submitted;
        let confirmation = PaymentConfirmation {
            reference: format!("MOCK-{}-{}", method.code(), self.request.summary.ticket_count()),
            method,
            amount: self.request.summary.grand_total,
        };
        log::debug!(
            "payment submitted: {} {}",
            confirmation.reference,
            confirmation.amount
        );
        Some(confirmation)
    }
}
