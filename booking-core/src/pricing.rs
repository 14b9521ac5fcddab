//! Order pricing calculator.
//!
//! Quantity changes and totals for a cart of catalog items. Every operation
//! is pure and total: out-of-range quantities are clamped and unknown item
//! ids are ignored, so cart manipulation never surfaces an error.

use crate::catalog::{Catalog, CatalogItem};
use crate::constants::{
    LOG_QUANTITY_CHANGED, LOG_QUANTITY_CLAMPED, LOG_SUMMARY_SKIPPED_ITEM, LOG_UNKNOWN_ITEM,
    PER_ORDER_MAX,
};
use crate::fees::FeePolicy;
use crate::selection::Selection;
use crate::summary::{LineItem, OrderSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quantity limits applied by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Ceiling per item per order. There is no cart-wide ceiling.
    pub per_order_max: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_order_max: PER_ORDER_MAX,
        }
    }
}

/// Calculator bound to a [`PricingConfig`].
///
/// The free functions in this module use the default configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    config: PricingConfig,
}

impl Calculator {
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> PricingConfig {
        self.config
    }

    /// Highest quantity allowed for an item: `min(per_order_max, available_count)`.
    #[must_use]
    pub fn quantity_cap(&self, item: &CatalogItem) -> u32 {
        self.config.per_order_max.min(item.available_count)
    }

    /// Move an item's quantity by `delta`, clamped to `[0, cap]`.
    ///
    /// Unknown ids return an unchanged copy of the selection.
    #[must_use]
    pub fn change_quantity(
        &self,
        selection: &Selection,
        item_id: &str,
        delta: i64,
        catalog: &Catalog,
    ) -> Selection {
        let current = i64::from(selection.quantity(item_id));
        self.set_quantity(selection, item_id, current.saturating_add(delta), catalog)
    }

    /// Set an item's quantity outright, clamped to `[0, cap]`.
    ///
    /// Unknown ids return an unchanged copy of the selection.
    #[must_use]
    pub fn set_quantity(
        &self,
        selection: &Selection,
        item_id: &str,
        quantity: i64,
        catalog: &Catalog,
    ) -> Selection {
        let Some(item) = catalog.find(item_id) else {
            if crate::debug_log_enabled() {
                log::debug!("{LOG_UNKNOWN_ITEM}: ignoring quantity change for {item_id}");
            }
            return selection.clone();
        };

        let cap = self.quantity_cap(item);
        let clamped = clamp_quantity(quantity, cap);
        if crate::debug_log_enabled() {
            if i64::from(clamped) == quantity {
                log::debug!("{LOG_QUANTITY_CHANGED}: {} -> {clamped}", item.id);
            } else {
                log::debug!(
                    "{LOG_QUANTITY_CLAMPED}: {} requested {quantity}, clamped to {clamped} (cap {cap})",
                    item.id
                );
            }
        }
        selection.with_quantity(item.id.clone(), clamped)
    }

    /// Whether one more unit of the item can be added.
    #[must_use]
    pub fn can_increment(&self, selection: &Selection, item_id: &str, catalog: &Catalog) -> bool {
        catalog
            .find(item_id)
            .is_some_and(|item| selection.quantity(item_id) < self.quantity_cap(item))
    }

    /// Whether one unit of the item can be removed.
    #[must_use]
    pub fn can_decrement(&self, selection: &Selection, item_id: &str, catalog: &Catalog) -> bool {
        catalog.find(item_id).is_some() && selection.quantity(item_id) > 0
    }

    #[must_use]
    pub fn compute_summary(
        &self,
        selection: &Selection,
        catalog: &Catalog,
        fee_policy: &FeePolicy,
    ) -> OrderSummary {
        compute_summary(selection, catalog, fee_policy)
    }
}

fn clamp_quantity(requested: i64, cap: u32) -> u32 {
    let bounded = requested.clamp(0, i64::from(cap));
    u32::try_from(bounded).unwrap_or(0)
}

/// See [`Calculator::change_quantity`].
#[must_use]
pub fn change_quantity(
    selection: &Selection,
    item_id: &str,
    delta: i64,
    catalog: &Catalog,
) -> Selection {
    Calculator::default().change_quantity(selection, item_id, delta, catalog)
}

/// See [`Calculator::set_quantity`].
#[must_use]
pub fn set_quantity(
    selection: &Selection,
    item_id: &str,
    quantity: i64,
    catalog: &Catalog,
) -> Selection {
    Calculator::default().set_quantity(selection, item_id, quantity, catalog)
}

/// See [`Calculator::can_increment`].
#[must_use]
pub fn can_increment(selection: &Selection, item_id: &str, catalog: &Catalog) -> bool {
    Calculator::default().can_increment(selection, item_id, catalog)
}

/// See [`Calculator::can_decrement`].
#[must_use]
pub fn can_decrement(selection: &Selection, item_id: &str, catalog: &Catalog) -> bool {
    Calculator::default().can_decrement(selection, item_id, catalog)
}

/// Derive line items, fees and totals for a selection.
///
/// Line items follow catalog order, not the order items were picked in.
/// Selection entries that name no catalog item are skipped.
#[must_use]
pub fn compute_summary(
    selection: &Selection,
    catalog: &Catalog,
    fee_policy: &FeePolicy,
) -> OrderSummary {
    let line_items: Vec<LineItem> = catalog
        .iter()
        .filter_map(|item| {
            let quantity = selection.quantity(item.id.as_str());
            (quantity > 0).then(|| LineItem {
                item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity,
                line_total: item.unit_price.saturating_mul(Decimal::from(quantity)),
            })
        })
        .collect();

    if crate::debug_log_enabled() {
        for (id, _) in selection.iter() {
            if catalog.find(id.as_str()).is_none() {
                log::debug!("{LOG_SUMMARY_SKIPPED_ITEM}: {id} is not in the catalog");
            }
        }
    }

    let subtotal = line_items
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total));
    let fees = fee_policy.fee_lines(subtotal, !line_items.is_empty());
    let service_fee = fees
        .iter()
        .fold(Decimal::ZERO, |acc, fee| acc.saturating_add(fee.amount));

    OrderSummary {
        line_items,
        subtotal,
        fees,
        service_fee,
        discount: None,
        grand_total: subtotal.saturating_add(service_fee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tiers() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new("general", "General Admission", dec!(85), 342),
            CatalogItem::new("vip", "VIP", dec!(250), 48),
            CatalogItem::new("backstage", "Backstage", dec!(400), 0),
            CatalogItem::new("balcony", "Balcony", dec!(60), 3),
        ])
        .unwrap()
    }

    #[test]
    fn general_pair_with_ten_percent_fee() {
        let catalog = tiers();
        let selection = Selection::from_raw([("general", 2)]);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
        assert_eq!(summary.subtotal, dec!(170));
        assert_eq!(summary.service_fee, dec!(17));
        assert_eq!(summary.grand_total, dec!(187));
    }

    #[test]
    fn single_ticket_fee_and_total() {
        let catalog = tiers();
        let selection = change_quantity(&Selection::new(), "general", 1, &catalog);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
        assert_eq!(summary.service_fee, dec!(8.50));
        assert_eq!(summary.grand_total, dec!(93.50));
        assert_eq!(summary.display().grand_total, "$93.50");
    }

    #[test]
    fn increments_clamp_at_per_order_max() {
        let catalog = tiers();
        let mut selection = Selection::new();
        for _ in 0..11 {
            selection = change_quantity(&selection, "general", 1, &catalog);
        }
        assert_eq!(selection.quantity("general"), PER_ORDER_MAX);
        assert!(!can_increment(&selection, "general", &catalog));
        let again = change_quantity(&selection, "general", 1, &catalog);
        assert_eq!(again, selection);
    }

    #[test]
    fn availability_caps_below_per_order_max() {
        let catalog = tiers();
        let selection = change_quantity(&Selection::new(), "balcony", 8, &catalog);
        assert_eq!(selection.quantity("balcony"), 3);
    }

    #[test]
    fn sold_out_items_never_rise_above_zero() {
        let catalog = tiers();
        let selection = change_quantity(&Selection::new(), "backstage", 5, &catalog);
        assert_eq!(selection.quantity("backstage"), 0);
        assert!(!can_increment(&selection, "backstage", &catalog));
        assert!(selection.is_empty());
    }

    #[test]
    fn decrements_floor_at_zero() {
        let catalog = tiers();
        let selection = Selection::from_raw([("vip", 1)]);
        let selection = change_quantity(&selection, "vip", -4, &catalog);
        assert_eq!(selection.quantity("vip"), 0);
        assert!(!can_decrement(&selection, "vip", &catalog));
    }

    #[test]
    fn unknown_ids_are_a_no_op() {
        let catalog = tiers();
        let selection = Selection::from_raw([("general", 2)]);
        assert_eq!(change_quantity(&selection, "ghost", 3, &catalog), selection);
        assert!(!can_increment(&selection, "ghost", &catalog));
        assert!(!can_decrement(&selection, "ghost", &catalog));
    }

    #[test]
    fn extreme_deltas_saturate() {
        let catalog = tiers();
        let up = change_quantity(&Selection::new(), "vip", i64::MAX, &catalog);
        assert_eq!(up.quantity("vip"), PER_ORDER_MAX);
        let down = change_quantity(&up, "vip", i64::MIN, &catalog);
        assert_eq!(down.quantity("vip"), 0);
    }

    #[test]
    fn line_items_follow_catalog_order() {
        let catalog = tiers();
        let selection = change_quantity(&Selection::new(), "balcony", 1, &catalog);
        let selection = change_quantity(&selection, "general", 1, &catalog);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::None);
        let ids: Vec<&str> = summary
            .line_items
            .iter()
            .map(|line| line.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["general", "balcony"]);
    }

    #[test]
    fn summary_skips_unknown_ids() {
        let catalog = tiers();
        let selection = Selection::from_raw([("ghost", 4), ("vip", 1)]);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::None);
        assert_eq!(summary.line_items.len(), 1);
        assert_eq!(summary.subtotal, dec!(250));
    }

    #[test]
    fn custom_config_changes_the_cap() {
        let catalog = tiers();
        let calculator = Calculator::new(PricingConfig { per_order_max: 2 });
        let selection = calculator.change_quantity(&Selection::new(), "general", 5, &catalog);
        assert_eq!(selection.quantity("general"), 2);
        assert!(!calculator.can_increment(&selection, "general", &catalog));
    }

    #[test]
    fn set_quantity_clamps_absolute_requests() {
        let catalog = tiers();
        let selection = set_quantity(&Selection::new(), "vip", 40, &catalog);
        assert_eq!(selection.quantity("vip"), PER_ORDER_MAX);
        let selection = set_quantity(&selection, "vip", -2, &catalog);
        assert_eq!(selection.quantity("vip"), 0);
    }

    #[test]
    fn fixed_fees_on_registration_order() {
        let catalog = tiers();
        let selection = Selection::from_raw([("balcony", 2)]);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::registration());
        assert_eq!(summary.subtotal, dec!(120));
        assert_eq!(summary.service_fee, dec!(3.75));
        assert_eq!(summary.grand_total, dec!(123.75));
        assert_eq!(summary.fees.len(), 2);
    }

    #[test]
    fn extreme_prices_saturate_instead_of_overflowing() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("a", "A", Decimal::MAX, 10),
            CatalogItem::new("b", "B", Decimal::MAX, 10),
        ])
        .unwrap();
        let selection = change_quantity(&Selection::new(), "a", 2, &catalog);
        let selection = change_quantity(&selection, "b", 1, &catalog);
        let summary = compute_summary(&selection, &catalog, &FeePolicy::ticket_modal());
        assert_eq!(summary.line("a").unwrap().line_total, Decimal::MAX);
        assert_eq!(summary.subtotal, Decimal::MAX);
        assert_eq!(summary.grand_total, Decimal::MAX);
    }

    #[test]
    fn empty_selection_totals_zero() {
        let catalog = tiers();
        let summary = compute_summary(&Selection::new(), &catalog, &FeePolicy::registration());
        assert!(summary.is_empty());
        assert_eq!(summary.grand_total, Decimal::ZERO);
    }
}
