//! Event-registration page: per-type quantities, flat fees and a promo field.
use crate::announce::quantity_message;
use crate::checkout::CheckoutRequest;
use crate::navigation::Screen;
use crate::promo::PromoField;
use booking_core::{
    Calculator, Catalog, CatalogError, CatalogLoader, DiscountPolicy, EmbeddedCatalogs,
    FeePolicy, NoDiscounts, OrderSummary, REGISTRATION_TYPES, Selection, format_currency,
};
use rust_decimal::Decimal;

/// One ticket-type row as the page renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub item_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_label: String,
    pub quantity: u32,
    pub line_total: Decimal,
    pub sold_out: bool,
    pub can_increment: bool,
    pub can_decrement: bool,
}

#[derive(Debug, Clone)]
pub struct RegistrationPage<D = NoDiscounts> {
    catalog: Catalog,
    calculator: Calculator,
    fee_policy: FeePolicy,
    selection: Selection,
    promo: PromoField,
    discounts: D,
    status: Option<String>,
}

impl RegistrationPage<NoDiscounts> {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            calculator: Calculator::default(),
            fee_policy: FeePolicy::registration(),
            selection: Selection::new(),
            promo: PromoField::new(),
            discounts: NoDiscounts,
            status: None,
        }
    }

    /// Page backed by the embedded registration catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails to parse.
    pub fn from_embedded() -> Result<Self, CatalogError> {
        EmbeddedCatalogs.load_catalog(REGISTRATION_TYPES).map(Self::new)
    }
}

impl<D: DiscountPolicy> RegistrationPage<D> {
    /// Swap in the collaborator that validates promo codes.
    pub fn with_discounts<E: DiscountPolicy>(self, discounts: E) -> RegistrationPage<E> {
        RegistrationPage {
            catalog: self.catalog,
            calculator: self.calculator,
            fee_policy: self.fee_policy,
            selection: self.selection,
            promo: self.promo,
            discounts,
            status: self.status,
        }
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

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.selection.quantity(item_id)
    }

    #[must_use]
    pub const fn promo(&self) -> &PromoField {
        &self.promo
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub fn can_increment(&self, item_id: &str) -> bool {
        self.calculator
            .can_increment(&self.selection, item_id, &self.catalog)
    }

    #[must_use]
    pub fn can_decrement(&self, item_id: &str) -> bool {
        self.calculator
            .can_decrement(&self.selection, item_id, &self.catalog)
    }

    pub fn increment(&mut self, item_id: &str) -> bool {
        self.change_by(item_id, 1)
    }

    pub fn decrement(&mut self, item_id: &str) -> bool {
        self.change_by(item_id, -1)
    }

    pub fn set_promo_code(&mut self, text: impl Into<String>) {
        self.promo.set_code(text);
    }

    /// Flag the entered code as applied and report whether it discounted the order.
    pub fn apply_promo(&mut self) -> bool {
        if !self.promo.apply() {
            return false;
        }
        let discounted = self.summary().discount.is_some();
        self.status = Some(if discounted {
            format!("Promo code {} applied", self.promo.code().trim())
        } else {
            format!("Promo code {} saved", self.promo.code().trim())
        });
        discounted
    }

    pub fn clear_promo(&mut self) {
        self.promo.clear();
    }

    /// Totals with fixed fees and any promo discount.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        let base = self
            .calculator
            .compute_summary(&self.selection, &self.catalog, &self.fee_policy);
        self.promo.discounted(base, &self.discounts)
    }

    #[must_use]
    pub fn rows(&self) -> Vec<TicketRow> {
        self.catalog
            .iter()
            .map(|item| {
                let id = item.id.as_str();
                let quantity = self.selection.quantity(id);
                TicketRow {
                    item_id: id.to_string(),
                    name: item.name.clone(),
                    description: item.description.clone(),
                    price_label: format_currency(item.unit_price),
                    quantity,
                    line_total: item.unit_price.saturating_mul(Decimal::from(quantity)),
                    sold_out: item.is_sold_out(),
                    can_increment: self.can_increment(id),
                    can_decrement: self.can_decrement(id),
                }
            })
            .collect()
    }

    /// Payment hand-off once at least one ticket is selected.
    #[must_use]
    pub fn checkout(&self) -> Option<CheckoutRequest> {
        let summary = self.summary();
        (!summary.is_empty())
            .then(|| CheckoutRequest::new(Screen::Registration, self.selection.clone(), summary))
    }

    fn change_by(&mut self, item_id: &str, delta: i64) -> bool {
        let Some(item) = self.catalog.find(item_id) else {
            return false;
        };
        let before = self.selection.quantity(item_id);
        let next = self
            .calculator
            .change_quantity(&self.selection, item_id, delta, &self.catalog);
        let after = next.quantity(item_id);
        let cap = self.calculator.quantity_cap(item);
        let base = self
            .calculator
            .compute_summary(&next, &self.catalog, &self.fee_policy);
        let summary = self.promo.discounted(base, &self.discounts);
        self.status = Some(quantity_message(item, before, after, cap, &summary));
        self.selection = next;
        after != before
    }
}
