//! Purchasable ticket tiers and ticket types.
use crate::constants::LOG_SOLD_OUT_MISMATCH;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a catalog item, unique within its catalog.
///
/// Catalog sources may use strings or integers; integers are kept in their
/// decimal string form so both compare the same way.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawItemId", into = "String")]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u32> for ItemId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemId {
    Text(String),
    Number(u64),
}

impl From<RawItemId> for ItemId {
    fn from(raw: RawItemId) -> Self {
        match raw {
            RawItemId::Text(text) => Self(text),
            RawItemId::Number(number) => Self(number.to_string()),
        }
    }
}

/// A ticket tier or ticket type with price and remaining inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub available_count: u32,
    /// Display hint carried by some sources. `is_sold_out` never reads it.
    #[serde(default, rename = "sold_out", skip_serializing_if = "Option::is_none")]
    pub sold_out_hint: Option<bool>,
}

impl CatalogItem {
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        available_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            unit_price,
            available_count,
            sold_out_hint: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sold out is derived from inventory alone.
    #[must_use]
    pub const fn is_sold_out(&self) -> bool {
        self.available_count == 0
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog item id: {0}")]
    DuplicateId(ItemId),
    #[error("catalog item {0} has a negative price")]
    NegativePrice(ItemId),
    #[error("unknown catalog: {0}")]
    Unknown(String),
}

/// On-disk shape of a catalog asset.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<CatalogItem>,
}

/// An ordered, validated list of catalog items.
///
/// Iteration order is definition order; order summaries list line items in
/// this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from items in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if two items share an id or a price is negative.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.unit_price.is_sign_negative() && !item.unit_price.is_zero() {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            warn_on_sold_out_mismatch(item);
        }
        Ok(Self { items })
    }

    /// Load a catalog from a JSON string of the form `{ "items": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items)
    }

    #[must_use]
    pub fn find(&self, item_id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id.as_str() == item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn warn_on_sold_out_mismatch(item: &CatalogItem) {
    if let Some(hint) = item.sold_out_hint
        && hint != item.is_sold_out()
        && crate::debug_log_enabled()
    {
        log::warn!(
            "{LOG_SOLD_OUT_MISMATCH}: item {} flagged sold_out={hint} but has {} available",
            item.id,
            item.available_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn numeric_and_text_ids_both_parse() {
        let catalog = Catalog::from_json(
            r#"{"items":[
                {"id": 7, "name": "Standard", "unit_price": "79.00", "available_count": 3},
                {"id": "vip", "name": "VIP", "unit_price": "250", "available_count": 1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.find("7").unwrap().name, "Standard");
        assert_eq!(catalog.find("vip").unwrap().unit_price, dec!(250));
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let items = vec![
            CatalogItem::new("general", "General", dec!(85), 10),
            CatalogItem::new("general", "General again", dec!(90), 10),
        ];
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "general"));
    }

    #[test]
    fn rejects_negative_prices() {
        let items = vec![CatalogItem::new("refund", "Refund", dec!(-1), 1)];
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::NegativePrice(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn sold_out_is_derived_from_inventory_not_the_hint() {
        let catalog = Catalog::from_json(
            r#"{"items":[
                {"id": 1, "name": "Early Bird", "unit_price": "49", "available_count": 4, "sold_out": true},
                {"id": 2, "name": "Standard", "unit_price": "79", "available_count": 0, "sold_out": false}
            ]}"#,
        )
        .unwrap();
        assert!(!catalog.find("1").unwrap().is_sold_out());
        assert!(catalog.find("2").unwrap().is_sold_out());
    }

    #[test]
    fn preserves_definition_order() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("b", "B", dec!(1), 1),
            CatalogItem::new("a", "A", dec!(2), 1),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
