mod order;
mod shipment;
mod solution;
mod warehouse;

#[doc(inline)]
pub use order::Order;

#[doc(inline)]
pub use warehouse::Warehouse;

#[doc(inline)]
pub use shipment::Shipment;

#[doc(inline)]
pub use solution::Solution;

/// Identifier of an item, shared between orders and inventories
pub type ItemId = String;

/// A validated quantity of an item. Non-negative and integral by construction.
pub type Qty = u64;
