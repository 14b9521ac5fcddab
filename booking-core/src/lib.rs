//! Booking Pricing Core
//!
//! Platform-agnostic order math for the booking checkout flows.
//! This crate provides catalogs, selections, fees and totals without UI or
//! platform-specific dependencies.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod constants;
pub mod data;
pub mod fees;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod selection;
pub mod summary;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogItem, ItemId};
pub use constants::PER_ORDER_MAX;
pub use data::{CatalogLoader, EmbeddedCatalogs, REGISTRATION_TYPES, TICKET_TIERS};
pub use fees::{FeeLine, FeeLines, FeePolicy, FixedFee};
pub use money::{format_currency, percent_label, round_for_display};
pub use pricing::{
    Calculator, PricingConfig, can_decrement, can_increment, change_quantity, compute_summary,
    set_quantity,
};
pub use promo::{DiscountPolicy, NoDiscounts};
pub use selection::Selection;
pub use summary::{DisplayLine, Discount, LineItem, OrderSummary, SummaryDisplay};

pub(crate) fn debug_log_enabled() -> bool {
    matches!(std::env::var(constants::DEBUG_ENV_VAR), Ok(val) if val != "0")
}
