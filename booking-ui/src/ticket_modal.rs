//! Ticket-selection modal: pick one tier, choose a quantity, review totals.
use crate::announce::quantity_message;
use crate::checkout::CheckoutRequest;
use crate::navigation::Screen;
use booking_core::{
    Calculator, Catalog, CatalogError, CatalogItem, CatalogLoader, EmbeddedCatalogs, FeePolicy,
    ItemId, OrderSummary, Selection, TICKET_TIERS,
};

/// Steps inside the open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalStep {
    Select,
    Checkout,
}

/// Modal interface state
#[derive(Debug, Clone)]
pub struct TicketModal {
    catalog: Catalog,
    calculator: Calculator,
    fee_policy: FeePolicy,
    open: bool,
    step: ModalStep,
    tier: Option<ItemId>,
    selection: Selection,
    status: Option<String>,
}

impl TicketModal {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            calculator: Calculator::default(),
            fee_policy: FeePolicy::ticket_modal(),
            open: false,
            step: ModalStep::Select,
            tier: None,
            selection: Selection::new(),
            status: None,
        }
    }

    /// Modal backed by the embedded tier catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails to parse.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        EmbeddedCatalogs.load_catalog(TICKET_TIERS).map(Self::new)
    }

    #[must_use]
    pub fn with_fee_policy(mut self, fee_policy: FeePolicy) -> Self {
        self.fee_policy = fee_policy;
        self
    }

    #[must_use]
    pub fn with_calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Close and forget the current choice.
    pub fn close(&mut self) {
        self.reset();
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn step(&self) -> ModalStep {
        self.step
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn selected_tier(&self) -> Option<&CatalogItem> {
        self.tier
            .as_ref()
            .and_then(|id| self.catalog.find(id.as_str()))
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.tier
            .as_ref()
            .map_or(0, |id| self.selection.quantity(id.as_str()))
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Choose a tier, starting it at one ticket. Sold-out and unknown tiers
    /// are ignored.
    pub fn select_tier(&mut self, item_id: &str) -> bool {
        if !self.open || self.step != ModalStep::Select {
            return false;
        }
        let Some(item) = self.catalog.find(item_id) else {
            return false;
        };
        if item.is_sold_out() {
            self.status = Some(format!("{} is sold out", item.name));
            return false;
        }
        let id = item.id.clone();
        self.selection = self
            .calculator
            .set_quantity(&Selection::new(), id.as_str(), 1, &self.catalog);
        self.status = Some(format!("{} selected", item.name));
        self.tier = Some(id);
        true
    }

    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.step == ModalStep::Select
            && self.tier.as_ref().is_some_and(|id| {
                self.calculator
                    .can_increment(&self.selection, id.as_str(), &self.catalog)
            })
    }

    /// The modal never drops a chosen tier below one ticket.
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.step == ModalStep::Select && self.quantity() > 1
    }

    pub fn increment(&mut self) -> bool {
        if self.step != ModalStep::Select {
            return false;
        }
        self.change_by(1)
    }

    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.change_by(-1)
    }

    /// Move to the checkout step once at least one ticket is chosen.
    pub fn proceed(&mut self) -> bool {
        if !self.open || self.step != ModalStep::Select || self.summary().is_empty() {
            return false;
        }
        self.step = ModalStep::Checkout;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.step != ModalStep::Checkout {
            return false;
        }
        self.step = ModalStep::Select;
        true
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        self.calculator
            .compute_summary(&self.selection, &self.catalog, &self.fee_policy)
    }

    /// Payment hand-off, available from the checkout step.
    #[must_use]
    pub fn checkout(&self) -> Option<CheckoutRequest> {
        (self.open && self.step == ModalStep::Checkout).then(|| {
            CheckoutRequest::new(Screen::TicketModal, self.selection.clone(), self.summary())
        })
    }

    fn change_by(&mut self, delta: i64) -> bool {
        let Some(id) = self.tier.clone() else {
            return false;
        };
        let Some(item) = self.catalog.find(id.as_str()) else {
            return false;
        };
        let before = self.selection.quantity(id.as_str());
        let next = self
            .calculator
            .change_quantity(&self.selection, id.as_str(), delta, &self.catalog);
        let after = next.quantity(id.as_str());
        let cap = self.calculator.quantity_cap(item);
        let summary = self
            .calculator
            .compute_summary(&next, &self.catalog, &self.fee_policy);
        self.status = Some(quantity_message(item, before, after, cap, &summary));
        self.selection = next;
        after != before
    }

    fn reset(&mut self) {
        self.open = false;
        self.step = ModalStep::Select;
        self.tier = None;
        self.selection = Selection::new();
        self.status = None;
    }
}
