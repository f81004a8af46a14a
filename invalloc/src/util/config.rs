use serde::{Deserialize, Serialize};

/// Configuration of the [`Allocator`](crate::alloc::Allocator)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocConfig {
    /// What to do with a warehouse which carries some of the outstanding items, but has none of them in stock
    #[serde(default)]
    pub empty_shipments: EmptyShipmentPolicy,
}

/// Policy for warehouses whose intersecting items all have zero stock.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptyShipmentPolicy {
    /// Leave the warehouse out of the solution. Only contributing warehouses are listed.
    #[default]
    Suppress,
    /// Add an entry with an empty shipment for the warehouse
    Emit,
}
