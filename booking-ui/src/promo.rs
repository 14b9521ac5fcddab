use booking_core::{DiscountPolicy, OrderSummary};

/// Promo-code text input with its client-side "applied" flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromoField {
    code: String,
    applied: bool,
}

impl PromoField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.applied
    }

    /// Replace the input text. Editing un-applies the previous code.
    pub fn set_code(&mut self, text: impl Into<String>) {
        self.code = text.into();
        self.applied = false;
    }

    /// Mark the code applied. Blank input is ignored.
    pub fn apply(&mut self) -> bool {
        if self.code.trim().is_empty() {
            return false;
        }
        self.applied = true;
        true
    }

    pub fn clear(&mut self) {
        self.code.clear();
        self.applied = false;
    }

    /// Apply the discount the policy grants for this code, if any.
    #[must_use]
    pub fn discounted<D: DiscountPolicy + ?Sized>(
        &self,
        summary: OrderSummary,
        policy: &D,
    ) -> OrderSummary {
        if !self.applied {
            return summary;
        }
        match policy.lookup(self.code.trim(), &summary) {
            Some(discount) => summary.with_discount(discount),
            None => summary,
        }
    }
}
