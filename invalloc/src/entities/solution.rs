use std::collections::BTreeMap;

use crate::entities::{ItemId, Order, Qty, Shipment};

/// The shipments which together fulfill an [`Order`], in warehouse offer order.
///
/// A solution is either complete or empty. An empty solution means that either
/// nothing was ordered or the order cannot be fully satisfied by the offer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub shipments: Vec<Shipment>,
}

impl Solution {
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Solution { shipments }
    }

    pub fn empty() -> Self {
        Solution::default()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    pub fn n_shipments(&self) -> usize {
        self.shipments.len()
    }

    /// Names of the contributing warehouses, in the order they appear in the solution
    pub fn warehouse_names(&self) -> impl Iterator<Item = &str> {
        self.shipments.iter().map(|s| s.warehouse.as_str())
    }

    /// Total quantity of `item` across all shipments
    pub fn shipped_qty(&self, item: &str) -> Qty {
        self.shipments.iter().map(|s| s.qty(item)).sum()
    }

    /// Total shipped quantity per item across all shipments
    pub fn shipped_qtys(&self) -> BTreeMap<ItemId, Qty> {
        let mut qtys = BTreeMap::new();
        for (item, qty) in self.shipments.iter().flat_map(|s| s.lines.iter()) {
            *qtys.entry(item.clone()).or_insert(0) += *qty;
        }
        qtys
    }

    pub fn n_units(&self) -> Qty {
        self.shipments
            .iter()
            .fold(0, |acc, s| acc.saturating_add(s.n_units()))
    }

    /// Whether the shipments sum up to exactly the quantities requested in `order`
    pub fn fulfills(&self, order: &Order) -> bool {
        let shipped = self.shipped_qtys();
        shipped.len() == order.n_items()
            && order
                .items()
                .all(|(item, qty)| shipped.get(item) == Some(&qty))
    }
}
