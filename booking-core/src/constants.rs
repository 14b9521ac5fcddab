//! Centralized pricing and tuning constants for the booking flows.
//!
//! Per-order caps and fee amounts live here so checkout math can only be
//! adjusted through reviewed code changes, not through catalog assets.

use rust_decimal::Decimal;

// Logging keys -------------------------------------------------------------
pub(crate) const DEBUG_ENV_VAR: &str = "BOOKING_DEBUG_LOGS";
pub(crate) const LOG_QUANTITY_CLAMPED: &str = "log.quantity.clamped";
pub(crate) const LOG_QUANTITY_CHANGED: &str = "log.quantity.changed";
pub(crate) const LOG_UNKNOWN_ITEM: &str = "log.item.unknown";
pub(crate) const LOG_SOLD_OUT_MISMATCH: &str = "log.catalog.sold-out-mismatch";
pub(crate) const LOG_SUMMARY_SKIPPED_ITEM: &str = "log.summary.skipped-item";

// Quantity limits ----------------------------------------------------------
/// Maximum quantity of a single catalog item in one order.
pub const PER_ORDER_MAX: u32 = 10;

// Fees ---------------------------------------------------------------------
pub const SERVICE_FEE_LABEL: &str = "Service fee";
pub const PROCESSING_FEE_LABEL: &str = "Processing fee";

/// Proportional service fee charged by the ticket modal (10%).
pub const MODAL_SERVICE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Flat service fee charged by the registration page.
pub const REGISTRATION_SERVICE_FEE: Decimal = Decimal::from_parts(250, 0, 0, false, 2);

/// Flat processing fee charged by the registration page.
pub const REGISTRATION_PROCESSING_FEE: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

// Display ------------------------------------------------------------------
pub const CURRENCY_SYMBOL: &str = "$";
pub const DISPLAY_FRACTION_DIGITS: u32 = 2;
