use std::collections::BTreeMap;

use crate::entities::{ItemId, Qty};

/// A named inventory source with its own per-item stock.
///
/// Entries with zero stock are kept: an item listed in the inventory is
/// considered *carried* by the warehouse, even if none of it is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    /// Label of the warehouse, copied verbatim into every [`Shipment`](crate::entities::Shipment) it produces.
    /// Does not need to be unique.
    pub name: String,
    /// Available quantity of every item carried by this warehouse
    pub inventory: BTreeMap<ItemId, Qty>,
}

impl Warehouse {
    pub fn new<I, S>(name: impl Into<String>, inventory: I) -> Self
    where
        I: IntoIterator<Item = (S, Qty)>,
        S: Into<ItemId>,
    {
        Warehouse {
            name: name.into(),
            inventory: inventory
                .into_iter()
                .map(|(item, qty)| (item.into(), qty))
                .collect(),
        }
    }

    /// Available stock of `item`, `None` if the warehouse does not carry it at all
    pub fn stock(&self, item: &str) -> Option<Qty> {
        self.inventory.get(item).copied()
    }

    pub fn carries(&self, item: &str) -> bool {
        self.inventory.contains_key(item)
    }
}
