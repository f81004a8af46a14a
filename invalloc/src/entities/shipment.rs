use std::collections::BTreeMap;

use crate::entities::{ItemId, Qty};

/// The per-item quantities a single warehouse contributes to a [`Solution`](crate::entities::Solution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shipment {
    /// Name of the warehouse the items are shipped from
    pub warehouse: String,
    /// Shipped quantity per item, always strictly positive
    pub lines: BTreeMap<ItemId, Qty>,
}

impl Shipment {
    pub fn new(warehouse: impl Into<String>) -> Self {
        Shipment {
            warehouse: warehouse.into(),
            lines: BTreeMap::new(),
        }
    }

    /// Adds `qty` units of `item` to the shipment. Zero quantities are ignored.
    pub fn add(&mut self, item: &str, qty: Qty) {
        if qty > 0 {
            *self.lines.entry(item.to_string()).or_insert(0) += qty;
        }
    }

    /// Shipped quantity of `item`, zero if it is not part of this shipment
    pub fn qty(&self, item: &str) -> Qty {
        self.lines.get(item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of shipped units, saturating at `Qty::MAX`
    pub fn n_units(&self) -> Qty {
        self.lines
            .values()
            .fold(0, |acc, qty| acc.saturating_add(*qty))
    }
}
