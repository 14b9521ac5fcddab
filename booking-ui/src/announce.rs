//! Status messages for screen-reader live regions.
use booking_core::{CatalogItem, OrderSummary, format_currency};

/// Message describing a quantity change attempt on `item`.
///
/// `cap` is the item's clamp ceiling; it explains why an increment had no
/// effect.
#[must_use]
pub fn quantity_message(
    item: &CatalogItem,
    before: u32,
    after: u32,
    cap: u32,
    summary: &OrderSummary,
) -> String {
    let total = format_currency(summary.grand_total);
    let message = match after.cmp(&before) {
        std::cmp::Ordering::Greater => {
            format!("Added {} {}. Total {total}", after - before, item.name)
        }
        std::cmp::Ordering::Less => {
            format!("Removed {} {}. Total {total}", before - after, item.name)
        }
        std::cmp::Ordering::Equal if item.is_sold_out() => format!("{} is sold out", item.name),
        std::cmp::Ordering::Equal if after >= cap => {
            format!("{} is limited to {cap} per order", item.name)
        }
        std::cmp::Ordering::Equal => format!("{} quantity unchanged", item.name),
    };
    log::debug!("status: {message}");
    message
}
