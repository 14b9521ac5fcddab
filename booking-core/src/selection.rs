//! Requested quantities per catalog item.
use crate::catalog::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user's chosen quantities for the current order.
///
/// A missing entry means quantity zero; zero entries are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<ItemId, u32>", into = "BTreeMap<ItemId, u32>")]
pub struct Selection {
    quantities: BTreeMap<ItemId, u32>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from signed quantities, flooring negatives to zero.
    /// Later entries for the same id replace earlier ones.
    pub fn from_raw<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<ItemId>,
    {
        let mut selection = Self::new();
        for (id, quantity) in entries {
            let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
            selection.put(id.into(), quantity);
        }
        selection
    }

    /// Current quantity for an item, zero when absent.
    #[must_use]
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Copy of this selection with one entry replaced.
    #[must_use]
    pub fn with_quantity(&self, item_id: ItemId, quantity: u32) -> Self {
        let mut next = self.clone();
        next.put(item_id, quantity);
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.quantities.iter().map(|(id, qty)| (id, *qty))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.values().filter(|qty| **qty > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn put(&mut self, item_id: ItemId, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(&item_id);
        } else {
            self.quantities.insert(item_id, quantity);
        }
    }
}

impl From<BTreeMap<ItemId, u32>> for Selection {
    fn from(quantities: BTreeMap<ItemId, u32>) -> Self {
        let mut selection = Self::new();
        for (id, quantity) in quantities {
            selection.put(id, quantity);
        }
        selection
    }
}

impl From<Selection> for BTreeMap<ItemId, u32> {
    fn from(selection: Selection) -> Self {
        selection.quantities
    }
}
