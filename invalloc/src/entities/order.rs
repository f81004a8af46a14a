use std::collections::BTreeMap;

use crate::entities::{ItemId, Qty};

/// The quantities of each item a customer wants fulfilled.
/// Items requested with a quantity of zero are trivially satisfied and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    demand: BTreeMap<ItemId, Qty>,
}

impl Order {
    pub fn new<I, S>(demand: I) -> Self
    where
        I: IntoIterator<Item = (S, Qty)>,
        S: Into<ItemId>,
    {
        demand.into_iter().collect()
    }

    /// Requested quantity of `item`, zero if it was not requested
    pub fn qty(&self, item: &str) -> Qty {
        self.demand.get(item).copied().unwrap_or(0)
    }

    /// All requested items with a strictly positive quantity, sorted by identifier
    pub fn items(&self) -> impl Iterator<Item = (&str, Qty)> {
        self.demand.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.demand.contains_key(item)
    }

    pub fn is_empty(&self) -> bool {
        self.demand.is_empty()
    }

    pub fn n_items(&self) -> usize {
        self.demand.len()
    }

    /// Total number of requested units, saturating at `Qty::MAX`
    pub fn total_qty(&self) -> Qty {
        self.demand
            .values()
            .fold(0, |acc, qty| acc.saturating_add(*qty))
    }
}

impl<S: Into<ItemId>> FromIterator<(S, Qty)> for Order {
    fn from_iter<T: IntoIterator<Item = (S, Qty)>>(iter: T) -> Self {
        let demand = iter
            .into_iter()
            .map(|(item, qty)| (item.into(), qty))
            .filter(|(_, qty)| *qty > 0)
            .collect();
        Order { demand }
    }
}
