use std::collections::BTreeMap;

use itertools::Itertools;

use crate::entities::{ItemId, Order, Qty, Warehouse};

/// The still outstanding quantities of an [`Order`] during an allocation.
/// Items are removed as soon as they are fully satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backlog {
    remaining: BTreeMap<ItemId, Qty>,
}

impl Backlog {
    pub fn new(order: &Order) -> Self {
        Backlog {
            remaining: order
                .items()
                .map(|(item, qty)| (item.to_string(), qty))
                .collect(),
        }
    }

    pub fn outstanding(&self) -> impl Iterator<Item = (&str, Qty)> {
        self.remaining.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn n_items(&self) -> usize {
        self.remaining.len()
    }

    /// Outstanding items carried by `warehouse`, regardless of whether any of them are in stock
    pub fn overlap(&self, warehouse: &Warehouse) -> Vec<ItemId> {
        self.remaining
            .keys()
            .filter(|item| warehouse.carries(item))
            .cloned()
            .collect_vec()
    }

    /// Draws as much of `item` as possible out of `stock` units.
    /// Returns the quantity drawn, which never exceeds the outstanding quantity.
    pub fn draw(&mut self, item: &str, stock: Qty) -> Qty {
        let Some(remaining) = self.remaining.get_mut(item) else {
            return 0;
        };
        let drawn = stock.min(*remaining);
        *remaining -= drawn;
        if *remaining == 0 {
            self.remaining.remove(item);
        }
        drawn
    }
}
